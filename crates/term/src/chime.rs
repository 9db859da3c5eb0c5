//! Audio cues via the terminal bell.
//!
//! A terminal can't play the start/game-over jingles, so both become a BEL.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::EngineEvent;

const BEL: &[u8] = b"\x07";

pub struct Chime<W: Write = io::Stdout> {
    out: W,
    enabled: bool,
}

impl Chime<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> Chime<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Ring for start and game over; returns whether the bell rang.
    pub fn on_event(&mut self, event: &EngineEvent) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }
        match event {
            EngineEvent::Started { .. } | EngineEvent::GameOver { .. } => {
                self.out.write_all(BEL)?;
                self.out.flush()?;
                Ok(true)
            }
            EngineEvent::Frame | EngineEvent::AteFood { .. } => Ok(false),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
