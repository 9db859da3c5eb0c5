//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_snake::{core,input,term,types}` and
//! hosts the binary's ambient pieces: environment configuration, the JSONL
//! event log and tracing setup.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub mod config;
pub mod event_log;
pub mod logging;

pub use config::SnakeConfig;
pub use event_log::EventLog;
