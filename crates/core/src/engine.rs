//! Engine module - the snake state machine
//!
//! Owns the body, food, heading, score and speed. State only changes through
//! [`Engine::start`], [`Engine::tick`], [`Engine::change_direction`] and
//! [`Engine::stop`]; everything else is read-only.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, info, trace};

use crate::clock::Clock;
use crate::event::EngineEvent;
use crate::rng::CellSource;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Result of a single [`Engine::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed
    Idle,
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food and grew
    Ate,
    /// The move was fatal; the game is over
    Ended(EndCause),
}

/// Rejected [`Engine::load_position`] input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    EmptySnake,
    SegmentOutOfBounds(Cell),
    FoodOutOfBounds(Cell),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::EmptySnake => write!(f, "snake must have at least one segment"),
            PositionError::SegmentOutOfBounds(c) => {
                write!(f, "segment ({}, {}) is off the board", c.x, c.y)
            }
            PositionError::FoodOutOfBounds(c) => {
                write!(f, "food ({}, {}) is off the board", c.x, c.y)
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Single-player snake game engine
///
/// Generic over its scheduling port `C` and its food placement port `R` so
/// hosts can plug in a wall clock and a seeded RNG while tests use
/// [`ManualClock`](crate::clock::ManualClock) and
/// [`ScriptedCells`](crate::rng::ScriptedCells).
#[derive(Debug, Clone)]
pub struct Engine<C: Clock, R: CellSource> {
    clock: C,
    cells: R,
    /// Head at the front, tail at the back.
    snake: VecDeque<Cell>,
    food: Option<Cell>,
    direction: Direction,
    score: u32,
    speed_ms: u32,
    phase: Phase,
    end_cause: Option<EndCause>,
    /// Games started so far (including restarts).
    games: u32,
    events: Vec<EngineEvent>,
}

impl<C: Clock, R: CellSource> Engine<C, R> {
    /// Create an idle engine; nothing is armed until [`Engine::start`]
    pub fn new(clock: C, cells: R) -> Self {
        let mut snake = VecDeque::with_capacity(64);
        snake.push_back(START_CELL);
        Self {
            clock,
            cells,
            snake,
            food: None,
            direction: START_DIRECTION,
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            phase: Phase::Idle,
            end_cause: None,
            games: 0,
            events: Vec::with_capacity(4),
        }
    }

    /// Reset to the canonical starting position and begin ticking.
    ///
    /// Valid from any phase; a running game is simply restarted.
    pub fn start(&mut self) {
        self.snake.clear();
        self.snake.push_back(START_CELL);
        self.direction = START_DIRECTION;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.end_cause = None;
        let food = self.cells.next_cell();
        self.food = Some(food);
        self.phase = Phase::Running;
        self.games = self.games.wrapping_add(1);
        self.rearm();

        info!(game = self.games, food_x = food.x, food_y = food.y, "game started");
        self.events.push(EngineEvent::Started { food });
        self.events.push(EngineEvent::Frame);
    }

    /// Advance the game by one cell
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        let head = self.head().step(self.direction);

        if !head.in_bounds() {
            self.end(EndCause::Wall);
            return TickOutcome::Ended(EndCause::Wall);
        }

        // The tail has not moved yet, so stepping into it is fatal too.
        if self.snake.contains(&head) {
            self.end(EndCause::SelfCollision);
            return TickOutcome::Ended(EndCause::SelfCollision);
        }

        self.snake.push_front(head);

        let outcome = if self.food == Some(head) {
            self.eat(head);
            TickOutcome::Ate
        } else {
            self.snake.pop_back();
            TickOutcome::Moved
        };

        self.events.push(EngineEvent::Frame);
        outcome
    }

    fn eat(&mut self, at: Cell) {
        self.score += FOOD_SCORE;
        // Food may land on the body; placement does not avoid the snake.
        self.food = Some(self.cells.next_cell());
        self.speed_ms = self
            .speed_ms
            .saturating_sub(SPEED_STEP_MS)
            .max(MIN_SPEED_MS);
        self.rearm();

        debug!(
            score = self.score,
            speed_ms = self.speed_ms,
            length = self.snake.len(),
            "food eaten"
        );
        self.events.push(EngineEvent::AteFood {
            at,
            score: self.score,
            speed_ms: self.speed_ms,
            length: self.snake.len(),
        });
    }

    /// Request a new heading for the next tick.
    ///
    /// The direct reverse of the current heading is ignored. Later calls
    /// before the next tick overwrite earlier ones.
    pub fn change_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.direction) {
            trace!(
                current = self.direction.as_str(),
                requested = requested.as_str(),
                "reversal ignored"
            );
            return false;
        }
        self.direction = requested;
        true
    }

    /// Explicit stop request; returns false when no game was running
    pub fn stop(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.end(EndCause::Stopped);
        true
    }

    fn end(&mut self, cause: EndCause) {
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::Ended;
        self.end_cause = Some(cause);
        self.clock.cancel();

        info!(
            game = self.games,
            cause = cause.as_str(),
            score = self.score,
            length = self.snake.len(),
            "game over"
        );
        self.events.push(EngineEvent::GameOver {
            cause,
            score: self.score,
            length: self.snake.len(),
        });
    }

    /// Dispatch a command from an input adapter
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Turn(dir) => self.change_direction(dir),
            Command::Start => {
                self.start();
                true
            }
            Command::Stop => self.stop(),
            Command::Toggle => {
                if self.is_running() {
                    self.stop()
                } else {
                    self.start();
                    true
                }
            }
        }
    }

    /// Put the engine into a running game with an arbitrary position.
    ///
    /// Score and speed are kept; the clock is re-armed at the current speed.
    /// Overlapping segments are accepted as given.
    pub fn load_position(
        &mut self,
        snake: &[Cell],
        direction: Direction,
        food: Cell,
    ) -> Result<(), PositionError> {
        if snake.is_empty() {
            return Err(PositionError::EmptySnake);
        }
        if let Some(&bad) = snake.iter().find(|c| !c.in_bounds()) {
            return Err(PositionError::SegmentOutOfBounds(bad));
        }
        if !food.in_bounds() {
            return Err(PositionError::FoodOutOfBounds(food));
        }

        self.snake.clear();
        self.snake.extend(snake.iter().copied());
        self.direction = direction;
        self.food = Some(food);
        self.phase = Phase::Running;
        self.end_cause = None;
        self.rearm();
        Ok(())
    }

    fn rearm(&mut self) {
        self.clock.cancel();
        self.clock.arm(self.speed_ms);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events emitted since the last drain, without consuming them
    pub fn pending_events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.score = self.score;
        out.speed_ms = self.speed_ms;
        out.direction = self.direction;
        out.phase = self.phase;
        out.end_cause = self.end_cause;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn end_cause(&self) -> Option<EndCause> {
        self.end_cause
    }

    pub fn head(&self) -> Cell {
        // Length >= 1 always holds.
        self.snake.front().copied().unwrap_or(START_CELL)
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    /// Games started so far
    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn cells(&self) -> &R {
        &self.cells
    }
}
