use crate::app::Screen;
use crate::board::{bordered_size, BoardView, Canvas};
use crate::color::SnakeColor;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::game::{GameState, Phase};
use crate::score::{BestScoreStore, ScoreStore};
use crate::ticker::Ticker;
use crate::util::{center_rect, get_display_area};
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::time::Instant;

/// The game screen: the board, the score, and whatever the user is being told
/// about the game
#[derive(Clone, Debug)]
pub(crate) struct GameScreen<S = BestScoreStore, R = rand::rngs::ThreadRng> {
    state: GameState<S, R>,
    ticker: Ticker,
    color: SnakeColor,
    /// An error to show on top of the game; the game is frozen while it's
    /// shown.
    warning: Option<Warning>,
}

impl GameScreen {
    pub(crate) fn new(config: &Config) -> GameScreen {
        let state = GameState::new(config.game.board_size.get(), config.best_score_store());
        let mut screen = GameScreen::from_state(state, config.game.snake_color);
        if let Err(e) = screen.state.load_best_score() {
            screen.warn(e);
        }
        screen
    }
}

impl<S: ScoreStore, R: Rng> GameScreen<S, R> {
    pub(crate) fn from_state(state: GameState<S, R>, color: SnakeColor) -> Self {
        GameScreen {
            state,
            ticker: Ticker::new(consts::TICK_PERIOD),
            color,
            warning: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.warning.is_some() {
            return Ok(self.handle_event(read()?));
        }
        let now = Instant::now();
        if self.ticker.fire(now) {
            self.advance();
            return Ok(None);
        }
        match self.ticker.timeout(now) {
            Some(wait) => {
                if poll(wait)? {
                    Ok(self.handle_event(read()?))
                } else {
                    Ok(None)
                }
            }
            None => Ok(self.handle_event(read()?)),
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(warning) = self.warning.as_ref() {
            match warning.handle_command(cmd)? {
                WarningOutcome::Dismissed => self.warning = None,
                WarningOutcome::Quit => return Some(self.quit()),
            }
            return None;
        }
        match (self.state.phase(), cmd) {
            (_, Command::Quit | Command::Q) => return Some(self.quit()),
            (Phase::NotStarted, Command::Enter | Command::Space) => self.start(),
            (Phase::NotStarted, Command::R) => (),
            (_, Command::R) => self.restart(),
            (_, Command::X) => {
                if let Err(e) = self.state.reset_best_score() {
                    self.warn(e);
                }
            }
            (_, Command::C) => {
                self.color = self.color.cycle();
                log::debug!("Snake color is now {}", self.color);
            }
            (Phase::Running, cmd) => {
                if let Some(direction) = cmd.direction() {
                    let _ = self.state.set_direction(direction);
                }
            }
            _ => (),
        }
        None
    }

    /// Advance the game by one tick, stopping the ticker once the game is
    /// over
    fn advance(&mut self) {
        if self.state.tick().is_none() || self.state.is_over() {
            self.ticker.cancel();
        }
    }

    fn start(&mut self) {
        if self.state.start() {
            self.ticker.start(Instant::now());
        }
    }

    fn restart(&mut self) {
        let r = self.state.restart();
        self.ticker.start(Instant::now());
        if let Err(e) = r {
            self.warn(e);
        }
    }

    fn quit(&mut self) -> Screen {
        if let Err(e) = self.state.record_best_score() {
            log::error!("{:#}", anyhow::Error::new(e));
        }
        Screen::Quit
    }

    fn warn<E: std::error::Error>(&mut self, e: E) {
        self.warning = Some(Warning::from(e));
    }
}

impl<S, R> GameScreen<S, R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

impl<S, R> Widget for &GameScreen<S, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, block_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}   Best: {}",
                self.state.score(),
                self.state.best_score()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let view = BoardView::new(&self.state);
        let block_area = center_rect(block_area, bordered_size(view.size()));
        Block::bordered().render(block_area, buf);
        let mut canvas = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        canvas.draw_board(&view, self.color.style());

        match self.state.phase() {
            Phase::NotStarted => {
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("Enter", consts::KEY_STYLE),
                    Span::raw(" to start"),
                ])
                .render(msg1_area, buf);
                key_hints(&[("Colour", "c"), ("Reset best", "x"), ("Quit", "q")])
                    .render(msg2_area, buf);
            }
            Phase::Running => {
                key_hints(&[("Restart", "r"), ("Colour", "c"), ("Quit", "q")])
                    .render(msg2_area, buf);
            }
            Phase::GameOver | Phase::Won => {
                let msg = if self.state.phase() == Phase::Won {
                    " — BOARD FILLED! —"
                } else {
                    " — GAME OVER —"
                };
                Span::from(msg).render(msg1_area, buf);
                key_hints(&[("Restart", "r"), ("Reset best", "x"), ("Quit", "q")])
                    .render(msg2_area, buf);
            }
        }

        if let Some(ref warning) = self.warning {
            warning.render(display, buf);
        }
    }
}

/// Build a line of "Label (k)" hints separated by dashes, with the keys
/// highlighted
fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut line = Line::default();
    for (i, &(label, key)) in hints.iter().enumerate() {
        line.push_span(if i == 0 { " " } else { " — " });
        line.push_span(label);
        line.push_span(" (");
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    }
    line
}
