//! Mapping of game state onto a grid of drawable cells
use crate::consts;
use crate::game::{Direction, GameState, Phase, Position};
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
};

/// What to draw in a single cell of the board
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum CellKind {
    #[default]
    Empty,
    Body,
    /// The snake's head, drawn differently depending on which way it last
    /// moved
    Head(Direction),
    Apple,
    /// Where the snake crashed
    Collision,
}

impl CellKind {
    /// Return the glyph & style for the cell, or `None` if it's empty
    pub(crate) fn appearance(self, snake_style: Style) -> Option<(char, Style)> {
        match self {
            CellKind::Empty => None,
            CellKind::Body => Some((consts::SNAKE_BODY_SYMBOL, snake_style)),
            CellKind::Head(Direction::Up) => Some((consts::SNAKE_HEAD_NORTH_SYMBOL, snake_style)),
            CellKind::Head(Direction::Down) => {
                Some((consts::SNAKE_HEAD_SOUTH_SYMBOL, snake_style))
            }
            CellKind::Head(Direction::Right) => {
                Some((consts::SNAKE_HEAD_EAST_SYMBOL, snake_style))
            }
            CellKind::Head(Direction::Left) => Some((consts::SNAKE_HEAD_WEST_SYMBOL, snake_style)),
            CellKind::Apple => Some((consts::APPLE_SYMBOL, consts::APPLE_STYLE)),
            CellKind::Collision => Some((consts::COLLISION_SYMBOL, consts::COLLISION_STYLE)),
        }
    }
}

/// A snapshot of the board as a grid of [`CellKind`]s, stored row by row
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct BoardView {
    size: u16,
    cells: Vec<CellKind>,
}

impl BoardView {
    pub(crate) fn new<S, R>(game: &GameState<S, R>) -> BoardView {
        let size = game.board_size();
        let mut view = BoardView {
            size,
            cells: vec![CellKind::default(); usize::from(size) * usize::from(size)],
        };
        if let Some(apple) = game.apple() {
            view.set(apple, CellKind::Apple);
        }
        let snake = game.snake();
        for &pos in snake.body() {
            view.set(pos, CellKind::Body);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        let head = snake.head();
        if game.phase() == Phase::GameOver {
            // A head that went off the board has nowhere to be drawn, so mark
            // the last cell it was in instead.
            let crash = if game.in_bounds(head) {
                Some(head)
            } else {
                snake.neck()
            };
            if let Some(pos) = crash {
                view.set(pos, CellKind::Collision);
            }
        } else {
            view.set(head, CellKind::Head(game.heading()));
        }
        view
    }

    /// Return the number of cells along each side of the board
    pub(crate) fn size(&self) -> u16 {
        self.size
    }

    /// Return the kind of the cell at `pos`, or `None` if `pos` is off the
    /// board
    #[cfg(test)]
    pub(crate) fn get(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Iterate over the non-empty cells of the board
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let size = usize::from(self.size);
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &kind)| kind != CellKind::Empty)
            .filter_map(move |(i, &kind)| {
                let x = i32::try_from(i % size).ok()?;
                let y = i32::try_from(i / size).ok()?;
                Some((Position::new(x, y), kind))
            })
    }

    fn set(&mut self, pos: Position, kind: CellKind) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = kind;
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        let size = usize::from(self.size);
        (x < size && y < size).then_some(y * size + x)
    }
}

/// Return the terminal size of a bordered board with `size` cells per side
pub(crate) fn bordered_size(size: u16) -> Size {
    Size {
        width: size.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
        height: size.saturating_add(2),
    }
}

/// A region of a [`Buffer`] onto which board cells are drawn
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    pub(crate) area: Rect,
    pub(crate) buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` in the first column of the board cell at `pos`.  Cells
    /// outside the canvas are silently skipped.
    pub(crate) fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Ok(x) = u16::try_from(pos.x) else {
            return;
        };
        let Ok(y) = u16::try_from(pos.y) else {
            return;
        };
        let Some(x) = x
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| self.area.x.checked_add(x))
        else {
            return;
        };
        let Some(y) = self.area.y.checked_add(y) else {
            return;
        };
        if !self.area.contains((x, y).into()) {
            return;
        }
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(style);
        }
    }

    /// Draw every occupied cell of `view`
    pub(crate) fn draw_board(&mut self, view: &BoardView, snake_style: Style) {
        for (pos, kind) in view.occupied() {
            if let Some((symbol, style)) = kind.appearance(snake_style) {
                self.draw_cell(pos, symbol, style);
            }
        }
    }
}
