use latex2tast_syntax::Position;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// A byte range `[start, end)` into the source, with the resolved line and
/// column of both ends.
///
/// Nodes store spans rather than offsets alone because the comment
/// reinserter orders by line and column, and serialised trees carry both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
    pub start_pos: Position,
    pub end_pos: Position,
}

impl Span {
    /// Whether `other` lies within this span, compared by line and column.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        self.start_pos <= other.start_pos && other.end_pos <= self.end_pos
    }

    /// Whether this span starts at or after the end of `other`.
    #[must_use]
    pub fn starts_after(self, other: Span) -> bool {
        self.start_pos >= other.end_pos
    }

    /// Smallest span covering both.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        let (start, start_pos) = if other.start < self.start {
            (other.start, other.start_pos)
        } else {
            (self.start, self.start_pos)
        };
        let (end, end_pos) = if other.end > self.end {
            (other.end, other.end_pos)
        } else {
            (self.end, self.end_pos)
        };
        Span {
            start,
            end,
            start_pos,
            end_pos,
        }
    }
}

#[derive(Serialize)]
struct LineColumn {
    line: usize,
    column: usize,
}

impl From<Position> for LineColumn {
    fn from(p: Position) -> Self {
        Self {
            line: p.line,
            column: p.column,
        }
    }
}

#[derive(Serialize)]
struct Loc {
    start: LineColumn,
    end: LineColumn,
}

/// Serialises as the `range` and `loc` fields of a node, so it can be
/// flattened into one.
impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Span", 2)?;
        s.serialize_field("range", &[self.start, self.end])?;
        s.serialize_field(
            "loc",
            &Loc {
                start: self.start_pos.into(),
                end: self.end_pos.into(),
            },
        )?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::Source;
    use pretty_assertions::assert_eq;

    #[test]
    fn containment_uses_line_and_column() {
        let source = Source::new("ab\ncd\nef");
        let outer = source.span(1, 7);
        assert!(outer.contains(source.span(3, 5)));
        assert!(outer.contains(outer));
        assert!(!outer.contains(source.span(0, 2)));
    }

    #[test]
    fn starts_after_ties_on_the_same_column() {
        let source = Source::new("abcd");
        assert!(source.span(2, 3).starts_after(source.span(0, 2)));
        assert!(!source.span(1, 3).starts_after(source.span(0, 2)));
    }

    #[test]
    fn cover_widens_both_ends() {
        let source = Source::new("abcdef");
        let span = source.span(1, 2).cover(source.span(4, 6));
        assert_eq!((span.start, span.end), (1, 6));
        assert_eq!(span.end_pos.column, 6);
    }

    #[test]
    fn serialises_range_and_loc() {
        let source = Source::new("a\nbc");
        let json = serde_json::to_value(source.span(1, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "range": [1, 4],
                "loc": {
                    "start": { "line": 1, "column": 1 },
                    "end": { "line": 2, "column": 2 }
                }
            })
        );
    }
}
