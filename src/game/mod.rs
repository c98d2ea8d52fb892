mod direction;
mod position;
mod snake;
pub(crate) use self::direction::Direction;
pub(crate) use self::position::Position;
pub(crate) use self::snake::Snake;
use crate::score::{LoadError, SaveError, ScoreStore};
use rand::Rng;

/// The state of a game of snake, independent of how it is displayed.
///
/// `S` is where the best score is persisted; `R` is the source of randomness
/// for placing apples.
#[derive(Clone, Debug)]
pub(crate) struct GameState<S, R = rand::rngs::ThreadRng> {
    rng: R,
    store: S,
    /// The board is `board_size` cells wide and `board_size` cells tall
    board_size: u16,
    snake: Snake,
    /// `None` iff the snake fills the whole board
    apple: Option<Position>,
    /// The direction in which the snake will move on the next tick
    direction: Direction,
    /// The direction in which the snake moved on the last tick
    heading: Direction,
    score: u32,
    best_score: u32,
    phase: Phase,
}

impl<S: ScoreStore> GameState<S, rand::rngs::ThreadRng> {
    pub(crate) fn new(board_size: u16, store: S) -> Self {
        GameState::new_with_rng(board_size, store, rand::rng())
    }
}

impl<S: ScoreStore, R: Rng> GameState<S, R> {
    /// Create a game that has not started yet on a board of the given size,
    /// which must be at least 2.  The best score starts out at zero; call
    /// [`GameState::load_best_score()`] to fetch it from `store`.
    pub(crate) fn new_with_rng(board_size: u16, store: S, rng: R) -> Self {
        let mut game = GameState {
            rng,
            store,
            board_size,
            snake: Snake::new(initial_head(board_size), Direction::Right),
            apple: None,
            direction: Direction::Right,
            heading: Direction::Right,
            score: 0,
            best_score: 0,
            phase: Phase::NotStarted,
        };
        game.apple = game.generate_apple();
        game
    }

    /// Set the best score to the value held in the store.  On failure, the
    /// best score is left unchanged.
    pub(crate) fn load_best_score(&mut self) -> Result<(), LoadError> {
        self.best_score = self.store.load()?;
        log::debug!("Loaded best score: {}", self.best_score);
        Ok(())
    }

    /// Begin the first game.  Returns `false` if a game has already been
    /// started, in which case nothing happens.
    pub(crate) fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.reset();
        true
    }

    /// Throw away the current game and begin a new one, first recording the
    /// current score as the best score if it beats it.  Does nothing if no
    /// game has been started yet.
    ///
    /// The new game is started even if the best score could not be saved, in
    /// which case the error is returned afterwards.
    pub(crate) fn restart(&mut self) -> Result<(), SaveError> {
        if self.phase == Phase::NotStarted {
            return Ok(());
        }
        let r = self.record_best_score();
        self.reset();
        r
    }

    /// If the current score is higher than the best score, make it the new
    /// best score and save it.
    pub(crate) fn record_best_score(&mut self) -> Result<(), SaveError> {
        if self.score > self.best_score {
            log::info!(
                "New best score: {} (previously {})",
                self.score,
                self.best_score
            );
            self.best_score = self.score;
            self.store.save(self.best_score)
        } else {
            Ok(())
        }
    }

    /// Set the best score to zero and save it.  The current game is
    /// unaffected.
    pub(crate) fn reset_best_score(&mut self) -> Result<(), SaveError> {
        log::info!("Resetting best score");
        self.best_score = 0;
        self.store.save(0)
    }

    /// Request that the snake move in `direction` on the next tick.  Requests
    /// to turn back the way the snake last moved are ignored, as are requests
    /// made while the game isn't running.  If multiple requests are made
    /// between ticks, the last accepted one wins.
    ///
    /// Returns `true` if the request was accepted.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || direction == self.heading.reverse() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Advance the game by one step.  Returns `None` if the game is not
    /// running.
    pub(crate) fn tick(&mut self) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        self.heading = self.direction;
        self.snake.advance(self.direction);
        let head = self.snake.head();
        log::trace!("Snake moved {:?} to {head}", self.direction);
        let mut outcome = TickOutcome::Moved;
        if Some(head) == self.apple {
            self.score = self.score.saturating_add(1);
            log::debug!("Apple eaten at {head}; score is now {}", self.score);
            // The tail is kept, so the snake grows by one.
            self.apple = self.generate_apple();
            if self.apple.is_some() {
                outcome = TickOutcome::AteApple;
            } else {
                outcome = TickOutcome::BoardFilled;
            }
        } else {
            self.snake.drop_tail();
        }
        if !self.in_bounds(head) || self.snake.bites_itself() {
            log::info!("Snake collided at {head}; final score: {}", self.score);
            self.phase = Phase::GameOver;
            return Some(TickOutcome::Collided);
        }
        if outcome == TickOutcome::BoardFilled {
            log::info!("Snake filled the board; final score: {}", self.score);
            self.phase = Phase::Won;
        }
        Some(outcome)
    }

    /// Pick a random cell on the board that isn't occupied by the snake.
    /// Returns `None` if the snake covers the whole board.
    pub(crate) fn generate_apple(&mut self) -> Option<Position> {
        let size = i32::from(self.board_size);
        let cells = usize::from(self.board_size) * usize::from(self.board_size);
        if self.snake.length() >= cells {
            return None;
        }
        loop {
            let pos = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            if !self.snake.contains(pos) {
                return Some(pos);
            }
        }
    }

    fn reset(&mut self) {
        self.snake = Snake::new(initial_head(self.board_size), Direction::Right);
        self.direction = Direction::Right;
        self.heading = Direction::Right;
        self.score = 0;
        self.phase = Phase::Running;
        self.apple = self.generate_apple();
        log::info!("New game started");
    }
}

impl<S, R> GameState<S, R> {
    pub(crate) fn board_size(&self) -> u16 {
        self.board_size
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn apple(&self) -> Option<Position> {
        self.apple
    }

    pub(crate) fn heading(&self) -> Direction {
        self.heading
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn best_score(&self) -> u32 {
        self.best_score
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Has the game ended, either by a collision or by filling the board?
    pub(crate) fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver | Phase::Won)
    }

    pub(crate) fn in_bounds(&self, pos: Position) -> bool {
        let size = i32::from(self.board_size);
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }
}

#[cfg(test)]
impl<S, R> GameState<S, R> {
    /// Replace the snake, direction, apple, and phase with fixed values
    pub(crate) fn arrange<I: IntoIterator<Item = Position>>(
        &mut self,
        segments: I,
        direction: Direction,
        apple: Option<Position>,
        phase: Phase,
    ) {
        self.snake = Snake::from_iter(segments);
        self.direction = direction;
        self.heading = direction;
        self.apple = apple;
        self.phase = phase;
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }
}

/// Where a game is in its life cycle
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// The program has just started, and no game has begun yet
    NotStarted,
    Running,
    /// The snake ran into a wall or itself
    GameOver,
    /// The snake has filled the board and there are no more cells to place
    /// apples in.
    Won,
}

/// What happened during a call to [`GameState::tick()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum TickOutcome {
    Moved,
    AteApple,
    Collided,
    /// An apple was eaten, and the snake now covers the whole board
    BoardFilled,
}

/// Return the starting position of the snake's head: the middle of the board,
/// rounding down and to the right
fn initial_head(board_size: u16) -> Position {
    let mid = i32::from(board_size / 2);
    Position::new(mid, mid)
}
