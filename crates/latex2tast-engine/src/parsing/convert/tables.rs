//! Static name tables mapping macros and environments to tree kinds.
//!
//! Names are looked up without a trailing `*`, so `\section*` classifies like
//! `\section`. Environments are looked up with the star kept, since starred
//! environments are often distinct (`figure*`, `tabular*`).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Emphasis,
    Strong,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroKind {
    Header(u8),
    Style(Style),
    /// `Code` leaf with the text of the content argument.
    Code,
    /// Content argument spliced in as plain prose.
    Transparent,
    Break,
    Url,
    Href,
    Image,
    /// Block-level markup, closes the running paragraph.
    Block,
    /// Inline markup known to carry no prose.
    Markup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentKind {
    List,
    Table,
    Quote,
    /// Body kept literally as a `CodeBlock`.
    Verbatim,
    Math,
    Figure,
    /// Body converted into the enclosing block sequence.
    Transparent,
}

pub fn macro_kind(name: &str) -> Option<MacroKind> {
    let name = name.strip_suffix('*').unwrap_or(name);
    let kind = match name {
        "part" | "title" => MacroKind::Header(1),
        "chapter" => MacroKind::Header(2),
        "section" => MacroKind::Header(3),
        "subsection" => MacroKind::Header(4),
        "subsubsection" => MacroKind::Header(5),
        "paragraph" | "subparagraph" => MacroKind::Header(6),

        "textit" | "textup" | "textsl" | "textsf" | "textsc" | "emph" | "textcolor"
        | "colorbox" | "fcolorbox" => MacroKind::Style(Style::Emphasis),
        "textbf" | "textmd" => MacroKind::Style(Style::Strong),
        "sout" | "xout" => MacroKind::Style(Style::Delete),

        "texttt" | "mathbf" | "mathit" | "mathsf" | "mathtt" | "mathnormal" | "mathcal"
        | "mathrm" => MacroKind::Code,

        "textrm" | "textnormal" | "uppercase" | "caption" | "footnotetext" | "mbox" => {
            MacroKind::Transparent
        }

        "\\" | "linebreak" | "newline" => MacroKind::Break,
        "url" => MacroKind::Url,
        "href" => MacroKind::Href,
        "includegraphics" => MacroKind::Image,

        "par" | "maketitle" | "tableofcontents" | "listoffigures" | "listoftables"
        | "newpage" | "clearpage" | "cleardoublepage" | "pagebreak" | "appendix"
        | "bibliography" | "bibliographystyle" | "printbibliography" | "vspace" | "bigskip"
        | "medskip" | "smallskip" | "author" | "date" | "thanks" | "input" | "include"
        | "frontmatter" | "mainmatter" | "backmatter" => MacroKind::Block,

        "label" | "ref" | "eqref" | "pageref" | "autoref" | "nameref" | "cref" | "Cref"
        | "cite" | "citep" | "citet" | "citeauthor" | "citeyear" | "nocite" | "footnote"
        | "footnotemark" | "index" | "glossary" | "documentclass" | "usepackage"
        | "RequirePackage" | "newcommand" | "renewcommand" | "providecommand"
        | "newenvironment" | "renewenvironment" | "DeclareMathOperator" | "def" | "let"
        | "setlength" | "addtolength" | "setcounter" | "addtocounter" | "color" | "hspace"
        | "noindent" | "indent" | "centering" | "raggedright" | "raggedleft" | "hfill"
        | "vfill" | "quad" | "qquad" | "protect" | "phantom" | "hphantom" | "vphantom"
        | "tiny" | "scriptsize" | "footnotesize" | "small" | "normalsize" | "large"
        | "Large" | "LARGE" | "huge" | "Huge" | "bf" | "it" | "em" | "rm" | "sf" | "sc"
        | "tt" | "ldots" | "dots" | "LaTeX" | "TeX" | "today" | "item" | "@"
        | "graphicspath" | "addbibresource" | "pagestyle" | "thispagestyle" | "hypersetup"
        | "geometry" | "hline" | "cline" | "toprule" | "midrule" | "bottomrule" => {
            MacroKind::Markup
        }
        _ => return None,
    };
    Some(kind)
}

/// Mandatory arguments a known macro takes; the last of them is its content.
/// Braced groups after those are ordinary text. `None` for unknown macros
/// and for definitions, whose argument count varies: they keep every
/// attached argument.
pub fn arity(name: &str) -> Option<usize> {
    let name = name.strip_suffix('*').unwrap_or(name);
    let count = match name {
        "newcommand" | "renewcommand" | "providecommand" | "newenvironment"
        | "renewenvironment" | "def" | "let" => return None,

        "textcolor" | "colorbox" | "href" | "setlength" | "addtolength" | "setcounter"
        | "addtocounter" | "DeclareMathOperator" => 2,
        "fcolorbox" => 3,

        "\\" | "linebreak" | "newline" | "par" | "maketitle" | "tableofcontents"
        | "listoffigures" | "listoftables" | "newpage" | "clearpage" | "cleardoublepage"
        | "pagebreak" | "appendix" | "printbibliography" | "bigskip" | "medskip"
        | "smallskip" | "frontmatter" | "mainmatter" | "backmatter" | "footnotemark"
        | "noindent" | "indent" | "centering" | "raggedright" | "raggedleft" | "hfill"
        | "vfill" | "quad" | "qquad" | "protect" | "tiny" | "scriptsize" | "footnotesize"
        | "small" | "normalsize" | "large" | "Large" | "LARGE" | "huge" | "Huge" | "bf"
        | "it" | "em" | "rm" | "sf" | "sc" | "tt" | "ldots" | "dots" | "LaTeX" | "TeX"
        | "today" | "item" | "@" | "hline" | "toprule" | "midrule" | "bottomrule" => 0,

        name if macro_kind(name).is_some() => 1,
        _ => return None,
    };
    Some(count)
}

pub fn environment_kind(name: &str) -> Option<EnvironmentKind> {
    let kind = match name {
        "itemize" | "enumerate" | "description" => EnvironmentKind::List,
        "tabular" | "tabular*" | "tabularx" | "longtable" => EnvironmentKind::Table,
        "quote" | "quotation" | "verse" => EnvironmentKind::Quote,
        "verbatim" | "verbatim*" | "Verbatim" | "lstlisting" | "minted" | "comment" => {
            EnvironmentKind::Verbatim
        }
        "figure" | "figure*" | "wrapfigure" => EnvironmentKind::Figure,
        "center" | "flushleft" | "flushright" | "table" | "table*" | "minipage"
        | "abstract" | "document" => EnvironmentKind::Transparent,
        name if latex2tast_syntax::environments::is_math(name) => EnvironmentKind::Math,
        _ => return None,
    };
    Some(kind)
}

/// Ends a table row.
pub fn is_row_break(name: &str) -> bool {
    matches!(name, "\\" | "tabularnewline")
}

/// Table rules and header markers, markup only.
pub fn is_table_rule(name: &str) -> bool {
    matches!(
        name,
        "hline"
            | "cline"
            | "toprule"
            | "midrule"
            | "bottomrule"
            | "endhead"
            | "endfirsthead"
            | "endfoot"
            | "endlastfoot"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("section", Some(MacroKind::Header(3)))]
    #[case("section*", Some(MacroKind::Header(3)))]
    #[case("subparagraph", Some(MacroKind::Header(6)))]
    #[case("emph", Some(MacroKind::Style(Style::Emphasis)))]
    #[case("textbf", Some(MacroKind::Style(Style::Strong)))]
    #[case("sout", Some(MacroKind::Style(Style::Delete)))]
    #[case("mathcal", Some(MacroKind::Code))]
    #[case("\\", Some(MacroKind::Break))]
    #[case("cite", Some(MacroKind::Markup))]
    #[case("maketitle", Some(MacroKind::Block))]
    #[case("frobnicate", None)]
    fn classifies_macros(#[case] name: &str, #[case] expected: Option<MacroKind>) {
        assert_eq!(macro_kind(name), expected);
    }

    #[rstest]
    #[case("emph", Some(1))]
    #[case("section*", Some(1))]
    #[case("texttt", Some(1))]
    #[case("textcolor", Some(2))]
    #[case("colorbox", Some(2))]
    #[case("fcolorbox", Some(3))]
    #[case("href", Some(2))]
    #[case("\\", Some(0))]
    #[case("LaTeX", Some(0))]
    #[case("newcommand", None)]
    #[case("frobnicate", None)]
    fn counts_mandatory_arguments(#[case] name: &str, #[case] expected: Option<usize>) {
        assert_eq!(arity(name), expected);
    }

    #[rstest]
    #[case("itemize", Some(EnvironmentKind::List))]
    #[case("tabular*", Some(EnvironmentKind::Table))]
    #[case("align*", Some(EnvironmentKind::Math))]
    #[case("minted", Some(EnvironmentKind::Verbatim))]
    #[case("figure*", Some(EnvironmentKind::Figure))]
    #[case("center", Some(EnvironmentKind::Transparent))]
    #[case("tikzpicture", None)]
    fn classifies_environments(#[case] name: &str, #[case] expected: Option<EnvironmentKind>) {
        assert_eq!(environment_kind(name), expected);
    }
}
