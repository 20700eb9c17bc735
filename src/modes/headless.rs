use anyhow::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::game::{Direction, GameConfig, GameState, Position, Simulation};
use crate::input::InputHandler;
use crate::metrics::GameMetrics;

/// Chance per snapshot that the autopilot turns at random instead of
/// chasing the food
const WANDER_PROBABILITY: f64 = 0.2;

/// Runs the simulation without a screen.
///
/// Stands in for the presentation layer: it watches snapshots, logs them
/// and steers with a seeded autopilot through an [`InputHandler`].
pub struct HeadlessMode {
    config: GameConfig,
    autopilot: ChaCha8Rng,
}

impl HeadlessMode {
    pub fn new(config: GameConfig) -> Self {
        let autopilot = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            None => ChaCha8Rng::from_entropy(),
        };

        Self { config, autopilot }
    }

    pub async fn run(&mut self) -> Result<GameMetrics> {
        let simulation = Simulation::new(&self.config);
        let mut snapshots = simulation.subscribe();
        let mut input = InputHandler::new(simulation.direction());
        let handle = simulation.spawn();

        loop {
            tokio::select! {
                changed = snapshots.changed() => {
                    // Sender gone: the task hit its tick limit
                    if changed.is_err() {
                        break;
                    }

                    let snapshot = snapshots.borrow_and_update().clone();
                    if let Some(state) = snapshot {
                        self.observe(&state, &mut input);
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("interrupted");
                    break;
                }
            }
        }

        let metrics = handle.stop().await?;
        info!(
            ticks = metrics.ticks,
            food_eaten = metrics.food_eaten,
            resets = metrics.resets,
            high_score = metrics.high_score,
            elapsed = %metrics.format_time(),
            "run finished"
        );

        Ok(metrics)
    }

    fn observe(&mut self, state: &GameState, input: &mut InputHandler) {
        let head = state.head();
        debug!(
            score = state.score,
            length = state.len(),
            head_x = head.x,
            head_y = head.y,
            "snapshot"
        );

        let wanted = if self.autopilot.gen_bool(WANDER_PROBABILITY) {
            Some(Direction::ALL[self.autopilot.gen_range(0..Direction::ALL.len())])
        } else {
            toward(head, state.food)
        };

        if let Some(direction) = wanted {
            input.request(direction);
        }
    }
}

/// First axis-aligned step from `from` towards `to`, ignoring wraparound
fn toward(from: Position, to: Position) -> Option<Direction> {
    if to.x > from.x {
        Some(Direction::Right)
    } else if to.x < from.x {
        Some(Direction::Left)
    } else if to.y > from.y {
        Some(Direction::Down)
    } else if to.y < from.y {
        Some(Direction::Up)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toward() {
        let here = Position::new(5, 5);
        assert_eq!(toward(here, Position::new(9, 1)), Some(Direction::Right));
        assert_eq!(toward(here, Position::new(0, 9)), Some(Direction::Left));
        assert_eq!(toward(here, Position::new(5, 9)), Some(Direction::Down));
        assert_eq!(toward(here, Position::new(5, 0)), Some(Direction::Up));
        assert_eq!(toward(here, here), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_tick_limit() {
        let config = GameConfig::default().with_seed(3).with_max_ticks(50);
        let mut mode = HeadlessMode::new(config);

        let metrics = mode.run().await.unwrap();

        assert_eq!(metrics.ticks, 50);
        assert!(metrics.food_eaten >= u64::from(metrics.high_score));
    }
}
