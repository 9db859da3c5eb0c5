//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. Raw key codes
//! stop here; the engine only ever sees commands.

pub mod map;

pub use tui_snake_types as types;

pub use map::{map_key, should_quit};
