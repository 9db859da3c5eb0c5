use crate::types::{Cell, Direction, EndCause, Phase, INITIAL_SPEED_MS, START_CELL, START_DIRECTION};

/// Read-only view of the engine handed to renderers after each tick and start
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Head-first body
    pub snake: Vec<Cell>,
    /// `None` only before the first start
    pub food: Option<Cell>,
    pub score: u32,
    pub speed_ms: u32,
    pub direction: Direction,
    pub phase: Phase,
    pub end_cause: Option<EndCause>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.snake.push(START_CELL);
        self.food = None;
        self.score = 0;
        self.speed_ms = INITIAL_SPEED_MS;
        self.direction = START_DIRECTION;
        self.phase = Phase::Idle;
        self.end_cause = None;
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.snake.contains(&cell)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Ended
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            snake: Vec::with_capacity(64),
            food: None,
            score: 0,
            speed_ms: INITIAL_SPEED_MS,
            direction: START_DIRECTION,
            phase: Phase::Idle,
            end_cause: None,
        };
        s.clear();
        s
    }
}
