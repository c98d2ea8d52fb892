//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(500);

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 48,
    height: 23,
};

/// Number of terminal columns used to draw a single board cell, so that cells
/// come out roughly square
pub(crate) const CELL_WIDTH: u16 = 2;

/// Default width & height of the board, in cells
pub(crate) const DEFAULT_BOARD_SIZE: u16 = 10;

/// Smallest allowed board size; the starting snake needs some room in front
/// of it
pub(crate) const MIN_BOARD_SIZE: u16 = 6;

/// Largest board size that fits in [`DISPLAY_SIZE`] along with the score bar
/// & status lines
pub(crate) const MAX_BOARD_SIZE: u16 = 18;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the cell where the snake's head crashed
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Modifier applied to the snake on top of its color
pub(crate) const SNAKE_MODIFIER: Modifier = Modifier::BOLD;

/// Style for the apple
pub(crate) const APPLE_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
