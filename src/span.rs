/// A cursor position inside an editor document.
///
/// `line` is zero-based. `ch` counts chars (Unicode scalar values) from the
/// start of the line, so it never lands inside a multi-byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    #[inline]
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// A closed region `[start, end]` between two positions.
///
/// Spans produced by the locator always sit on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    #[inline]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "Span start must be <= end");
        Self { start, end }
    }

    /// A zero-length span sitting at `pos`.
    #[inline]
    pub fn empty_at(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A span on `line` covering columns `start..end`.
    #[inline]
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Orders the endpoints so that `start <= end`, the way an editor turns an
    /// anchor/head pair into a range.
    #[inline]
    pub fn normalized(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_at_has_equal_endpoints() {
        let span = Span::empty_at(Position::new(2, 7));
        assert!(span.is_empty());
        assert_eq!(span.start, span.end);
    }

    #[test]
    fn normalized_swaps_backwards_selection() {
        let span = Span::normalized(Position::new(1, 9), Position::new(0, 3));
        assert_eq!(span.start, Position::new(0, 3));
        assert_eq!(span.end, Position::new(1, 9));
    }
}
