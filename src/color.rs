use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::style::{Color, Style};
use serde::Deserialize;
use std::fmt;

/// The colors the snake can be drawn in.  This is purely cosmetic.
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SnakeColor {
    #[default]
    Green,
    Yellow,
    Cyan,
    Magenta,
    Blue,
    White,
}

impl SnakeColor {
    /// Return the next color in the palette, wrapping around at the end
    pub(crate) fn cycle(self) -> SnakeColor {
        self.next().unwrap_or_else(SnakeColor::min)
    }

    /// Return the style for drawing the snake in this color
    pub(crate) fn style(self) -> Style {
        Style::new()
            .fg(Color::from(self))
            .add_modifier(consts::SNAKE_MODIFIER)
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SnakeColor::Green => "green",
            SnakeColor::Yellow => "yellow",
            SnakeColor::Cyan => "cyan",
            SnakeColor::Magenta => "magenta",
            SnakeColor::Blue => "blue",
            SnakeColor::White => "white",
        }
    }
}

impl From<SnakeColor> for Color {
    fn from(value: SnakeColor) -> Color {
        match value {
            SnakeColor::Green => Color::Green,
            SnakeColor::Yellow => Color::Yellow,
            SnakeColor::Cyan => Color::Cyan,
            SnakeColor::Magenta => Color::Magenta,
            SnakeColor::Blue => Color::LightBlue,
            SnakeColor::White => Color::White,
        }
    }
}

impl fmt::Display for SnakeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
