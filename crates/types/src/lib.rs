//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping, event logs).
//!
//! # Board Dimensions
//!
//! The board is a fixed 20x20 grid of cells, **1-indexed** on both axes:
//!
//! - **x**: 1 (left edge) to 20 (right edge)
//! - **y**: 1 (top edge) to 20 (bottom edge)
//! - **Start cell**: (10, 10), heading right
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SPEED_MS` | 200 | Tick interval after start |
//! | `SPEED_STEP_MS` | 10 | Interval reduction per food eaten |
//! | `MIN_SPEED_MS` | 50 | Fastest possible tick interval |
//! | `GAME_OVER_BLINK_MS` | 3000 | Duration of the blinking game over overlay |
//! | `GAME_OVER_BLINK_PERIOD_MS` | 300 | Overlay toggle period |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Cell, Command, Direction, GRID_SIZE, START_CELL};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert!(dir.is_opposite(Direction::Down));
//!
//! // Step a cell
//! let next = START_CELL.step(Direction::Right);
//! assert_eq!(next, Cell::new(11, 10));
//! assert!(next.in_bounds());
//! assert!(!Cell::new(GRID_SIZE + 1, 1).in_bounds());
//!
//! // Parse commands coming from an input adapter
//! assert_eq!(Command::from_str("left"), Some(Command::Turn(Direction::Left)));
//! assert_eq!(Command::from_str("start"), Some(Command::Start));
//! assert_eq!(Command::from_str("jump"), None);
//! ```

/// Board dimension in cells (20x20, fixed)
pub const GRID_SIZE: i8 = 20;

/// Where a freshly started snake's single segment sits
pub const START_CELL: Cell = Cell { x: 10, y: 10 };

/// Heading of a freshly started snake
pub const START_DIRECTION: Direction = Direction::Right;

/// Tick interval right after start (200ms)
pub const INITIAL_SPEED_MS: u32 = 200;

/// Tick interval reduction per food eaten (10ms)
pub const SPEED_STEP_MS: u32 = 10;

/// Tick interval floor (50ms)
pub const MIN_SPEED_MS: u32 = 50;

/// Score awarded per food eaten
pub const FOOD_SCORE: u32 = 10;

/// How long the game over overlay blinks before it stays on (3s)
pub const GAME_OVER_BLINK_MS: u64 = 3000;

/// Game over overlay toggle period (300ms)
pub const GAME_OVER_BLINK_PERIOD_MS: u64 = 300;

/// Tick interval after `foods` consecutive meals.
///
/// ```
/// use tui_snake_types::speed_after;
///
/// assert_eq!(speed_after(0), 200);
/// assert_eq!(speed_after(3), 170);
/// assert_eq!(speed_after(15), 50);
/// assert_eq!(speed_after(1000), 50);
/// ```
pub fn speed_after(foods: u32) -> u32 {
    INITIAL_SPEED_MS
        .saturating_sub(SPEED_STEP_MS.saturating_mul(foods))
        .max(MIN_SPEED_MS)
}


/// A cell on the game board
///
/// Coordinates are 1-indexed. Cells outside [1, GRID_SIZE] are representable
/// so a candidate head can be checked against the walls before it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Whether the cell lies on the board
    pub fn in_bounds(self) -> bool {
        (1..=GRID_SIZE).contains(&self.x) && (1..=GRID_SIZE).contains(&self.y)
    }
}

/// Heading of the snake
///
/// Screen coordinates: "up" decreases y, "down" increases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` for one step
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Check if `other` is the direct reverse of this direction
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("Down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Requests an input adapter can make of the engine
///
/// Raw key codes never reach the engine; adapters translate them into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change heading (ignored if it is the reverse of the current one)
    Turn(Direction),
    /// Start, or restart, a game
    Start,
    /// End the running game
    Stop,
    /// Stop when running, start otherwise (start/stop button)
    Toggle,
}

impl Command {
    /// Parse a command token (case-insensitive)
    ///
    /// Direction names map to [`Command::Turn`].
    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(dir) = Direction::from_str(s) {
            return Some(Command::Turn(dir));
        }
        match s.to_lowercase().as_str() {
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            "toggle" => Some(Command::Toggle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Turn(dir) => dir.as_str(),
            Command::Start => "start",
            Command::Stop => "stop",
            Command::Toggle => "toggle",
        }
    }
}

/// Lifecycle phase of a game
///
/// `Idle` only exists before the first start; after that the engine moves
/// between `Running` and `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Ended => "ended",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndCause {
    /// The head would have left the board
    Wall,
    /// The head would have entered a body segment
    SelfCollision,
    /// An explicit stop request
    Stopped,
}

impl EndCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndCause::Wall => "wall",
            EndCause::SelfCollision => "self_collision",
            EndCause::Stopped => "stopped",
        }
    }
}
