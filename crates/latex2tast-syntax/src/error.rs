use crate::line_index::position_at;

/// Fatal grammar error. There is no recovered tree when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {message}")]
pub struct SyntaxError {
    pub message: String,
    /// Byte offset of the offending construct.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SyntaxError {
    pub fn new(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let position = position_at(source, offset);
        Self {
            message: message.into(),
            offset,
            line: position.line,
            column: position.column,
        }
    }
}
