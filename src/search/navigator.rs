/// Direction of a next/previous match navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Cursor position after a query change: the first match, or nothing.
pub fn reset(len: usize) -> Option<usize> {
    (len > 0).then_some(0)
}

/// Step the cursor through a match set of `len` entries with wraparound.
///
/// Returns `None` (leaving navigation a no-op) when there is no cursor or
/// nothing to navigate. Stepping past the last match wraps to the first and
/// vice versa; there is no terminal "end of results" position.
pub fn advance(cursor: Option<usize>, len: usize, direction: Direction) -> Option<usize> {
    let cursor = cursor?;
    if len == 0 {
        return None;
    }
    let next = match direction {
        Direction::Next => (cursor + 1) % len,
        Direction::Prev => (cursor + len - 1) % len,
    };
    Some(next)
}
