//! SyntaxKind enum for all tokens and nodes in the LaTeX CST.
//!
//! Tokens and nodes share a single enum. Every byte of the source appears in
//! exactly one token of the tree.

/// All syntax kinds for the LaTeX CST.
///
/// The `repr(u16)` lets rowan store kinds compactly in the green tree.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // === Tokens (lexer output) ===
    /// Horizontal whitespace (spaces, tabs)
    WHITESPACE,
    /// A single line ending
    NEWLINE,
    /// A line ending followed by at least one blank line
    PARBREAK,
    /// `%` up to the end of the line, line ending excluded
    COMMENT,
    /// Plain text run
    TEXT,
    /// `\name` or `\name*`
    COMMAND_NAME,
    /// Control symbol: `\` followed by one non-letter (`\%`, `\\`, `\,`)
    ESCAPE,
    /// `{`
    L_BRACE,
    /// `}`
    R_BRACE,
    /// `[`
    L_BRACKET,
    /// `]`
    R_BRACKET,
    /// `&` column separator
    AMPERSAND,
    /// `$`
    DOLLAR,
    /// `$$`
    DOUBLE_DOLLAR,
    /// `\(`
    INLINE_MATH_OPEN,
    /// `\)`
    INLINE_MATH_CLOSE,
    /// `\[`
    DISPLAY_MATH_OPEN,
    /// `\]`
    DISPLAY_MATH_CLOSE,
    /// Literal region captured without tokenizing (verbatim bodies, `\verb`, URLs)
    VERBATIM_TEXT,
    /// End of file marker
    EOF,

    // === Composite Nodes (parser output) ===
    /// Root node
    ROOT,
    /// Command name with its attached arguments
    COMMAND,
    /// Mandatory argument or bare group `{...}`
    GROUP,
    /// Optional argument `[...]`
    OPTION,
    /// `\begin{name} ... \end{name}`
    ENVIRONMENT,
    /// `\begin{name}`
    BEGIN,
    /// `\end{name}`
    END,
    /// Everything between the environment arguments and `\end`
    ENV_BODY,
    /// `\item` with optional label and its content
    ITEM,
    /// Content of a list item
    ITEM_BODY,
    /// `$...$` or `\(...\)`
    INLINE_MATH,
    /// `$$...$$` or `\[...\]`
    DISPLAY_MATH,
    /// `\verb|...|`
    VERB,
}

impl SyntaxKind {
    /// Returns true if this kind represents a token (lexer output).
    pub fn is_token(self) -> bool {
        (self as u16) <= (Self::EOF as u16)
    }

    /// Returns true if this kind represents a composite node.
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Whitespace, line breaks and comments.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::NEWLINE | Self::PARBREAK | Self::COMMENT
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language definition for rowan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LatexLang {}

impl rowan::Language for LatexLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::VERB as u16);
        // SAFETY: bounds checked above and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type alias for our syntax nodes.
pub type SyntaxNode = rowan::SyntaxNode<LatexLang>;
/// Type alias for our syntax tokens.
pub type SyntaxToken = rowan::SyntaxToken<LatexLang>;
/// Type alias for syntax elements (node or token).
pub type SyntaxElement = rowan::SyntaxElement<LatexLang>;

#[cfg(test)]
mod tests {
    use super::*;
    use rowan::Language;

    #[test]
    fn token_kinds_are_tokens() {
        assert!(SyntaxKind::COMMENT.is_token());
        assert!(SyntaxKind::VERBATIM_TEXT.is_token());
        assert!(SyntaxKind::EOF.is_token());
    }

    #[test]
    fn node_kinds_are_nodes() {
        assert!(SyntaxKind::ROOT.is_node());
        assert!(SyntaxKind::ENVIRONMENT.is_node());
        assert!(SyntaxKind::VERB.is_node());
    }

    #[test]
    fn comments_and_breaks_are_trivia() {
        assert!(SyntaxKind::COMMENT.is_trivia());
        assert!(SyntaxKind::PARBREAK.is_trivia());
        assert!(!SyntaxKind::TEXT.is_trivia());
        assert!(!SyntaxKind::ESCAPE.is_trivia());
    }

    #[test]
    fn rowan_conversion_roundtrip() {
        for kind in [SyntaxKind::WHITESPACE, SyntaxKind::ITEM_BODY, SyntaxKind::VERB] {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(LatexLang::kind_from_raw(raw), kind);
        }
    }
}
