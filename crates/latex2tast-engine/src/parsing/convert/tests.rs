use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use super::*;
use crate::parsing::normalize::unwrap_document;
use crate::parsing::snapshot::dump;

fn convert(text: &str) -> (String, Vec<Warning>) {
    let root = latex2tast_syntax::parse(text).unwrap();
    let source = Source::new(text);
    let mut converter = Converter::new(&source);
    let blocks = converter.document(unwrap_document(&root));
    let dumped = blocks.iter().map(dump).collect();
    (dumped, converter.finish())
}

fn tree(text: &str) -> String {
    convert(text).0
}

#[test]
fn header_and_styled_paragraph() {
    assert_snapshot!(tree("\\section*{Intro}\nSome \\emph{new} text.\n"), @r#"
    Header(3)@0..16
      Str@10..15 "Intro"
    Paragraph@17..38
      Str@17..22 "Some "
      Emphasis@22..32
        Str@28..31 "new"
      Str@32..38 " text."
    "#);
}

#[test]
fn description_list_prepends_label() {
    assert_snapshot!(tree("\\begin{description}\n\\item[Term] Def.\n\\end{description}"), @r#"
    List@0..54
      ListItem@20..36
        Paragraph@26..30
          Str@26..30 "Term"
        Paragraph@32..36
          Str@32..36 "Def."
    "#);
}

#[test]
fn table_rows_and_cells() {
    let text = "\\begin{tabular}{ll}\n\\hline\na & b \\\\\n\\hline\n\\end{tabular}";
    assert_snapshot!(tree(text), @r#"
    Table@0..56
      TableRow@27..32
        TableCell@27..28
          Str@27..28 "a"
        TableCell@31..32
          Str@31..32 "b"
    "#);
}

#[test]
fn links_keep_literal_urls() {
    let text = "See \\url{http://x.org/a%20b} and \\href{http://y.org}{the site}.";
    assert_snapshot!(tree(text), @r#"
    Paragraph@0..63
      Str@0..4 "See "
      Link(http://x.org/a%20b)@4..28
        Str@9..27 "http://x.org/a%20b"
      Str@28..33 " and "
      Link(http://y.org)@33..62
        Str@53..61 "the site"
      Str@62..63 "."
    "#);
}

#[test]
fn escapes_math_and_verb() {
    assert_snapshot!(tree("caf\\'e costs 5\\% $x^2$ \\verb|a{b|"), @r#"
    Paragraph@0..33
      Str@0..17 "cafe costs 5% "
      Code@17..22 "$x^2$"
      Str@22..23 " "
      Code@23..33 "a{b"
    "#);
}

#[test]
fn unknown_constructs_fall_back_to_html() {
    let (dumped, warnings) = convert("\\foo{bar}\n\n\\begin{tikz}x\\end{tikz}");
    assert_snapshot!(dumped, @r#"
    Paragraph@0..9
      Html@0..9 "bar"
    Html@11..34
      Paragraph@23..24
        Str@23..24 "x"
    "#);
    let messages: Vec<_> = warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        ["1:0: unknown macro `\\foo`", "3:0: unknown environment `tikz`"]
    );
}

#[test]
fn preamble_is_markup() {
    let text = "\\documentclass{article}\n% c\n\\begin{document}\nHi.\n\\end{document}\n";
    let (dumped, warnings) = convert(text);
    assert_snapshot!(dumped, @r#"
    Html@0..23 "article"
    Html@28..44 "\\begin{document}"
    Paragraph@45..48
      Str@45..48 "Hi."
    Html@49..63 "\\end{document}"
    "#);
    assert!(warnings.is_empty());
}

#[test]
fn transparent_and_quote_environments() {
    let text = "\\begin{center}\nA\n\\end{center}\n\\begin{quote}\nB\n\\end{quote}";
    assert_snapshot!(tree(text), @r#"
    Paragraph@15..16
      Str@15..16 "A"
    BlockQuote@30..57
      Paragraph@44..45
        Str@44..45 "B"
    "#);
}

#[test]
fn figure_is_one_paragraph() {
    let text = "\\begin{figure}\n\\centering\n\\includegraphics{a.png}\n\\caption{Cap}\n\
                \\end{figure}";
    assert_snapshot!(tree(text), @r#"
    Paragraph@0..76
      Html@15..25 ""
      Str@25..26 "\n"
      Image(a.png)@26..49
      Str@49..50 "\n"
      Str@59..62 "Cap"
    "#);
}

#[test]
fn blank_line_splits_paragraphs_but_single_newline_does_not() {
    let (dumped, _) = convert("one\ntwo\n\n  \nthree");
    assert_snapshot!(dumped, @r#"
    Paragraph@0..7
      Str@0..7 "one\ntwo"
    Paragraph@12..17
      Str@12..17 "three"
    "#);
}

#[test]
fn verbatim_keeps_body_literally() {
    let (dumped, _) = convert("\\begin{verbatim}\n%{ \\x }\n\\end{verbatim}");
    assert_snapshot!(dumped, @r#"
    CodeBlock@0..39 "\n%{ \\x }\n"
    "#);
}

#[test]
fn breaks_and_code_styles() {
    assert_snapshot!(tree("a\\\\[2pt]\\texttt{b\\_c}"), @r#"
    Paragraph@0..21
      Str@0..1 "a"
      Break@1..8
      Code@8..21 "b_c"
    "#);
}
