use super::direction::Direction;
use super::position::Position;
use std::collections::VecDeque;

/// The player's snake
///
/// The snake always has a head plus at least one body segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: Position,

    /// The positions of the cells in the snake's body, starting with the cell
    /// right behind the head and ending with the tail
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a two-cell snake with its head at `head`, facing in
    /// `direction`, with its tail directly behind it.
    pub(crate) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::from([direction.reverse().advance(head)]),
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        self.head
    }

    /// Return the cell right behind the head
    pub(crate) fn neck(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// Return the positions of the cells in the snake's body, not including
    /// the head
    pub(crate) fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Iterate over every cell of the snake, head first
    #[cfg(test)]
    pub(crate) fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Return the number of cells the snake occupies, counting the head
    pub(crate) fn length(&self) -> usize {
        self.body.len() + 1
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Move the head one cell in `direction`, leaving the old head as the
    /// first body cell.  The tail stays put until [`Snake::drop_tail()`] is
    /// called, so calling only this method grows the snake by one cell.
    pub(crate) fn advance(&mut self, direction: Direction) {
        self.body.push_front(self.head);
        self.head = direction.advance(self.head);
    }

    /// Remove the last cell of the body, keeping at least one body cell
    pub(crate) fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Does the head occupy the same cell as any part of the body?
    pub(crate) fn bites_itself(&self) -> bool {
        self.body.contains(&self.head)
    }
}

#[cfg(test)]
impl FromIterator<Position> for Snake {
    /// Build a snake from its cells, head first
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Snake {
        let mut iter = iter.into_iter();
        let head = iter.next().expect("snake should have a head");
        let body = iter.collect::<VecDeque<_>>();
        assert!(!body.is_empty(), "snake should have a body");
        Snake { head, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snake() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.neck(), Some(Position::new(4, 5)));
        assert_eq!(snake.length(), 2);
        assert!(!snake.bites_itself());
    }

    #[test]
    fn advance_then_drop_tail_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right);
        snake.advance(Direction::Down);
        assert_eq!(snake.length(), 3);
        snake.drop_tail();
        assert_eq!(
            snake.segments().collect::<Vec<_>>(),
            [Position::new(5, 6), Position::new(5, 5)]
        );
    }

    #[test]
    fn drop_tail_keeps_a_body() {
        let mut snake = Snake::new(Position::new(1, 1), Direction::Up);
        snake.drop_tail();
        assert_eq!(snake.length(), 2);
    }

    #[test]
    fn bites_itself() {
        let mut snake = Snake::from_iter([
            Position::new(5, 5),
            Position::new(5, 4),
            Position::new(5, 3),
            Position::new(4, 3),
            Position::new(4, 4),
            Position::new(4, 5),
        ]);
        assert!(!snake.bites_itself());
        snake.advance(Direction::Up);
        snake.drop_tail();
        assert_eq!(snake.head(), Position::new(5, 4));
        assert!(snake.bites_itself());
    }
}
