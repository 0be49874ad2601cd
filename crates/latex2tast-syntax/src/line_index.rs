//! Byte offset → line/column resolution.
//!
//! Lines are 1-based, columns are 0-based and count characters (not bytes)
//! since the last `\n`.

/// A resolved source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// Precomputed line starts for repeated lookups over the same text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { text, line_starts }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Position of `offset`. Offsets past the end clamp to the end, offsets
    /// inside a multi-byte character clamp to its first byte.
    pub fn position(&self, offset: usize) -> Position {
        let offset = floor_char_boundary(self.text, offset);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        Position {
            line,
            column: self.text[line_start..offset].chars().count(),
        }
    }
}

/// Position of `offset` in `text` without building an index.
pub fn position_at(text: &str, offset: usize) -> Position {
    let offset = floor_char_boundary(text, offset);
    let before = &text[..offset];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Position {
        line: before.matches('\n').count() + 1,
        column: before[line_start..].chars().count(),
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn pos(line: usize, column: usize) -> Position {
        Position { line, column }
    }

    #[rstest]
    #[case(0, pos(1, 0))]
    #[case(3, pos(1, 3))]
    #[case(4, pos(2, 0))]
    #[case(6, pos(2, 2))]
    #[case(7, pos(3, 0))]
    #[case(100, pos(3, 0))]
    fn resolves_lines_and_columns(#[case] offset: usize, #[case] expected: Position) {
        let text = "abc\nde\n";
        assert_eq!(LineIndex::new(text).position(offset), expected);
        assert_eq!(position_at(text, offset), expected);
    }

    #[test]
    fn columns_count_characters() {
        let text = "é%x";
        // `é` is two bytes wide
        assert_eq!(position_at(text, 2), pos(1, 1));
        assert_eq!(position_at(text, 1), pos(1, 0));
    }

    #[test]
    fn index_agrees_with_direct_lookup() {
        let text = "\\section{A}\r\n\nbody ü text\n% c";
        let index = LineIndex::new(text);
        for offset in 0..=text.len() {
            assert_eq!(index.position(offset), position_at(text, offset));
        }
    }

    #[test]
    fn positions_order_like_offsets() {
        assert!(pos(1, 9) < pos(2, 0));
        assert!(pos(2, 1) < pos(2, 3));
    }
}
