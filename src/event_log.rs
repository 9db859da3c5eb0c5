//! Game event log: one JSON object per line, append-only.
//!
//! Frames are not logged; starts, meals, game overs and input commands are.
//!
//! ```text
//! {"timestamp_ms":1700000000000,"game":1,"event":"started","food":{"x":4,"y":17}}
//! {"timestamp_ms":1700000000410,"game":1,"event":"command","command":"down","accepted":true}
//! {"timestamp_ms":1700000001400,"game":1,"event":"ate_food","at":{"x":4,"y":17},"score":10,"speed_ms":190,"length":2}
//! {"timestamp_ms":1700000004200,"game":1,"event":"game_over","cause":"wall","score":10,"length":2}
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::EngineEvent;
use crate::types::{Cell, Command};

#[derive(Debug, Clone, Copy, Serialize)]
struct CellData {
    x: i8,
    y: i8,
}

impl From<Cell> for CellData {
    fn from(c: Cell) -> Self {
        Self { x: c.x, y: c.y }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Record {
    Started {
        food: CellData,
    },
    AteFood {
        at: CellData,
        score: u32,
        speed_ms: u32,
        length: usize,
    },
    GameOver {
        cause: &'static str,
        score: u32,
        length: usize,
    },
    Command {
        command: &'static str,
        accepted: bool,
    },
}

#[derive(Debug, Serialize)]
struct Entry {
    timestamp_ms: u64,
    game: u32,
    #[serde(flatten)]
    record: Record,
}

/// JSONL sink for engine events
pub struct EventLog<W: Write> {
    out: W,
    lines: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open (or create) `path` for appending
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    /// Log an engine event stamped with the current wall-clock time
    pub fn record(&mut self, game: u32, event: &EngineEvent) -> Result<()> {
        self.record_at(now_ms(), game, event)
    }

    /// Log an engine event with an explicit timestamp (frames are skipped)
    pub fn record_at(&mut self, timestamp_ms: u64, game: u32, event: &EngineEvent) -> Result<()> {
        let record = match *event {
            EngineEvent::Frame => return Ok(()),
            EngineEvent::Started { food } => Record::Started { food: food.into() },
            EngineEvent::AteFood {
                at,
                score,
                speed_ms,
                length,
            } => Record::AteFood {
                at: at.into(),
                score,
                speed_ms,
                length,
            },
            EngineEvent::GameOver {
                cause,
                score,
                length,
            } => Record::GameOver {
                cause: cause.as_str(),
                score,
                length,
            },
        };
        self.write(Entry {
            timestamp_ms,
            game,
            record,
        })
    }

    /// Log an input command and whether the engine accepted it
    pub fn record_command(&mut self, game: u32, command: Command, accepted: bool) -> Result<()> {
        self.write(Entry {
            timestamp_ms: now_ms(),
            game,
            record: Record::Command {
                command: command.as_str(),
                accepted,
            },
        })
    }

    fn write(&mut self, entry: Entry) -> Result<()> {
        serde_json::to_writer(&mut self.out, &entry)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.lines += 1;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
