use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::direction::Direction;
use super::state::Position;

/// Width of the board in cells
pub const BOARD_WIDTH: i32 = 16;
/// Height of the board in cells
pub const BOARD_HEIGHT: i32 = 24;

/// Time between two simulation ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(120);

/// Length the snake grows back to after a start or a reset
pub const INITIAL_SNAKE_LENGTH: usize = 4;

pub const INITIAL_HEAD: Position = Position::new(7, 7);
pub const RESTART_HEAD: Position = Position::new(8, 12);
pub const INITIAL_FOOD: Position = Position::new(5, 5);
pub const INITIAL_DIRECTION: Direction = Direction::Right;

/// Run-level settings. Gameplay constants live in the consts above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for food placement; drawn from the OS when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks; run until interrupted when absent
    pub max_ticks: Option<u64>,
}

impl GameConfig {
    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }
}
