use super::position::Position;

/// A direction in which the snake can move
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the unit vector `(dx, dy)` for a single step in this direction.
    /// `y` grows downwards.
    pub(crate) fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the position one cell away from `pos` in this direction.  The
    /// result is not bounds-checked.
    pub(crate) fn advance(self, pos: Position) -> Position {
        let (dx, dy) = self.delta();
        Position::new(pos.x.saturating_add(dx), pos.y.saturating_add(dy))
    }
}
