use std::time::Duration;

use tokio::time::Instant;

use crate::game::TickOutcome;

/// Running statistics for one simulation, folded from tick outcomes
#[derive(Debug, Clone)]
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub ticks: u64,
    pub food_eaten: u64,
    pub resets: u64,
    pub high_score: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            ticks: 0,
            food_eaten: 0,
            resets: 0,
            high_score: 0,
        }
    }

    /// Record one tick. `score` is the score after the tick.
    pub fn record(&mut self, outcome: TickOutcome, score: u32) {
        self.ticks += 1;
        self.elapsed_time = self.start_time.elapsed();

        match outcome {
            TickOutcome::Ate => self.food_eaten += 1,
            TickOutcome::Collided => self.resets += 1,
            TickOutcome::Moved => {}
        }

        self.high_score = self.high_score.max(score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
