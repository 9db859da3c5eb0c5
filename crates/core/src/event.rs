//! Engine events consumed by adapters (renderer, audio, event log).

use crate::types::{Cell, EndCause};

/// Something observable happened inside the engine.
///
/// Events queue up inside the engine until the host drains them with
/// [`Engine::drain_events`](crate::engine::Engine::drain_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A game (re)started; `food` is the first food cell
    Started { food: Cell },
    /// State changed and should be repainted
    Frame,
    /// The head reached the food
    AteFood {
        at: Cell,
        score: u32,
        speed_ms: u32,
        length: usize,
    },
    /// The game ended; terminal until the next start
    GameOver {
        cause: EndCause,
        score: u32,
        length: usize,
    },
}

impl EngineEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::Started { .. } => "started",
            EngineEvent::Frame => "frame",
            EngineEvent::AteFood { .. } => "ate_food",
            EngineEvent::GameOver { .. } => "game_over",
        }
    }
}
