//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Snapshots are
//! painted into a simple framebuffer that is then flushed to the terminal,
//! plus the audio/visual effects adapters (bell, blinking game over overlay).
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Repaint the full board from each snapshot (no diffing contract with core)
//! - Cells are 2 chars wide so the 20x20 board looks square

pub mod blink;
pub mod chime;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use blink::GameOverBlink;
pub use chime::Chime;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
