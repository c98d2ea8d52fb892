use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing an error that the user should know about but that
/// doesn't stop the game
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: u16 = 12;
    const TEXT_WIDTH: u16 = 36;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter | Command::Space => Some(WarningOutcome::Dismissed),
            Command::Quit | Command::Q => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn from_error_messages(msgs: Vec<String>) -> Self {
        let mut msgs = msgs.into_iter();
        let Some(first) = msgs.next() else {
            return Warning {
                lines: vec![String::from("You should never see this.")],
            };
        };
        let wrap = |s: &str, initial: &str, subsequent: &str| {
            let opts = textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
                .break_words(true)
                .initial_indent(initial)
                .subsequent_indent(subsequent);
            textwrap::wrap(s, opts)
                .into_iter()
                .map(Cow::into_owned)
                .collect::<Vec<_>>()
        };
        let mut lines = wrap(&first, "", "");
        let causes = msgs.collect::<Vec<_>>();
        if !causes.is_empty() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            if causes.len() > 1 {
                for (i, m) in causes.iter().enumerate() {
                    let init_indent = format!("{i:>5}: ");
                    lines.extend(wrap(m, &init_indent, "       "));
                }
            } else {
                lines.extend(wrap(&causes[0], "    ", "    "));
            }
        }
        if lines.len() > usize::from(Warning::MAX_LINES) {
            lines.truncate(usize::from(Warning::MAX_LINES));
            if let Some(last) = lines.last_mut() {
                while textwrap::core::display_width(last) >= usize::from(Warning::TEXT_WIDTH) {
                    let _ = last.pop();
                }
                last.push('…');
            }
        }
        Warning { lines }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl<E: std::error::Error> From<E> for Warning {
    fn from(e: E) -> Warning {
        let mut msgs = vec![e.to_string()];
        let mut source = e.source();
        while let Some(src) = source {
            msgs.push(src.to_string());
            source = src.source();
        }
        log::warn!("{}", msgs.join(": "));
        Warning::from_error_messages(msgs)
    }
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .min(Warning::MAX_LINES)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{MemoryStore, SaveError, ScoreStore};

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages(vec![String::from("Terminal broke")]);
        let area = Rect::new(0, 0, 48, 23);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "    ┌────────────── WARNING ───────────────┐    ",
            "    │ Terminal broke                       │    ",
            "    │                                      │    ",
            "    │                 [OK]                 │    ",
            "    └──────────────────────────────────────┘    ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to save best score to disk"),
            String::from("disk on fire"),
        ]);
        let area = Rect::new(0, 0, 48, 22);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "    ┌────────────── WARNING ───────────────┐    ",
            "    │ Failed to save best score to disk    │    ",
            "    │                                      │    ",
            "    │ Caused by:                           │    ",
            "    │     disk on fire                     │    ",
            "    │                                      │    ",
            "    │                 [OK]                 │    ",
            "    └──────────────────────────────────────┘    ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        pretty_assertions::assert_eq!(buffer, expected);
    }

    #[test]
    fn from_error_chain() {
        let mut store = MemoryStore {
            broken: true,
            ..MemoryStore::default()
        };
        let e: SaveError = store.save(1).unwrap_err();
        let warning = Warning::from(e);
        assert_eq!(
            warning.lines,
            [
                "Failed to save best score to disk",
                "",
                "Caused by:",
                "    0: failed to write best score to",
                "       disk",
                "    1: disk on fire",
            ]
        );
    }

    #[test]
    fn long_chain_is_cut_off() {
        let mut msgs = vec![String::from("Failed to save best score to disk")];
        msgs.extend((0..15).map(|i| format!("cause {i}")));
        let warning = Warning::from_error_messages(msgs);
        assert_eq!(warning.lines.len(), 12);
        assert_eq!(warning.lines[10], "    7: cause 7");
        assert_eq!(warning.lines[11], "    8: cause 8…");
    }

    #[test]
    fn cut_off_line_stays_in_width() {
        let mut msgs = vec![String::from("Top")];
        msgs.extend((0..15).map(|_| "x".repeat(29)));
        let warning = Warning::from_error_messages(msgs);
        assert_eq!(warning.lines.len(), 12);
        assert_eq!(warning.lines[11], format!("    8: {}…", "x".repeat(28)));
    }

    #[test]
    fn wrapped_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to read best score from disk"),
            String::from("failed to read the file that holds the best score for this game"),
        ]);
        assert_eq!(
            warning.lines,
            [
                "Failed to read best score from disk",
                "",
                "Caused by:",
                "    failed to read the file that",
                "    holds the best score for this",
                "    game",
            ]
        );
    }

    #[test]
    fn handle_command() {
        let warning = Warning::from_error_messages(vec![String::from("Oops")]);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Q),
            Some(WarningOutcome::Quit)
        );
        assert_eq!(warning.handle_command(Command::Up), None);
    }
}
