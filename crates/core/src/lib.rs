//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules and state machine. It has **no
//! dependencies** on terminal I/O, audio or input handling, which makes it:
//!
//! - **Deterministic**: the same food sequence produces identical games
//! - **Testable**: time and randomness are injected ports with test doubles
//! - **Portable**: any host that can call `tick()` on a timer can run it
//!
//! # Module Structure
//!
//! - [`engine`]: the state machine (start, tick, change direction, stop)
//! - [`clock`]: scheduling port the engine arms with its current speed
//! - [`rng`]: food placement port, seeded LCG and scripted source
//! - [`snapshot`]: read-only view handed to renderers
//! - [`event`]: events for renderer, audio and logging adapters
//!
//! # Game Rules
//!
//! - 20x20 board, 1-indexed; the snake starts as a single cell at (10, 10)
//!   heading right
//! - Leaving the board or running into any body segment ends the game
//! - Eating food scores 10, grows the snake by one and shortens the tick
//!   interval by 10ms (200ms at start, never below 50ms)
//! - Reversing onto yourself (e.g. right → left) is ignored
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{Engine, ManualClock, ScriptedCells, TickOutcome};
//! use tui_snake_types::{Cell, Direction, Phase};
//!
//! // Food will appear right in front of the snake.
//! let mut game = Engine::new(ManualClock::new(), ScriptedCells::new([Cell::new(11, 10)]));
//! game.start();
//! assert_eq!(game.clock().armed(), Some(200));
//!
//! assert_eq!(game.tick(), TickOutcome::Ate);
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.len(), 2);
//! assert_eq!(game.clock().armed(), Some(190));
//!
//! // Reversal is ignored, a quarter turn is not.
//! assert!(!game.change_direction(Direction::Left));
//! assert!(game.change_direction(Direction::Up));
//!
//! game.stop();
//! assert_eq!(game.phase(), Phase::Ended);
//! ```

pub mod clock;
pub mod engine;
pub mod event;
pub mod rng;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, IntervalClock, ManualClock};
pub use engine::{Engine, PositionError, TickOutcome};
pub use event::EngineEvent;
pub use rng::{CellSource, ScriptedCells, SimpleRng};
pub use snapshot::GameSnapshot;
