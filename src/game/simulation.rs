//! The ticking task that owns the authoritative [`GameState`].
//!
//! Observers get the latest snapshot through a `watch` channel, so a slow
//! reader skips intermediate ticks instead of queueing them. The channel
//! holds `None` until the task has started.

use anyhow::{Context, Result};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, trace};

use super::{
    config::{GameConfig, TICK_PERIOD},
    engine::{GameEngine, TickOutcome},
    state::GameState,
    store::DirectionStore,
};
use crate::metrics::GameMetrics;

pub type SnapshotReceiver = watch::Receiver<Option<GameState>>;

pub struct Simulation<R = ChaCha8Rng> {
    engine: GameEngine<R>,
    state: GameState,
    direction: DirectionStore,
    snapshots: watch::Sender<Option<GameState>>,
    metrics: GameMetrics,
    max_ticks: Option<u64>,
}

impl Simulation<ChaCha8Rng> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config.seed), config.max_ticks)
    }
}

impl<R: Rng + Send + 'static> Simulation<R> {
    pub fn with_engine(engine: GameEngine<R>, max_ticks: Option<u64>) -> Self {
        let (snapshots, _) = watch::channel(None);
        Self {
            engine,
            state: GameState::default(),
            direction: DirectionStore::default(),
            snapshots,
            metrics: GameMetrics::new(),
            max_ticks,
        }
    }

    /// Handle for writing the requested direction
    pub fn direction(&self) -> DirectionStore {
        self.direction.clone()
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.snapshots.subscribe()
    }

    /// Start ticking on the current tokio runtime.
    ///
    /// Dropping the returned handle stops the task after the tick in
    /// progress, same as [`SimulationHandle::stop`].
    pub fn spawn(self) -> SimulationHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let direction = self.direction.clone();
        let snapshots = self.snapshots.subscribe();
        let task = tokio::spawn(self.run(shutdown_rx));

        SimulationHandle {
            direction,
            snapshots,
            shutdown: Some(shutdown_tx),
            task,
        }
    }

    async fn run(mut self, mut shutdown: oneshot::Receiver<()>) -> GameMetrics {
        let mut timer = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.snapshots.send_replace(Some(self.state.clone()));
        info!(period_ms = TICK_PERIOD.as_millis() as u64, "simulation started");

        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!(ticks = self.metrics.ticks, "simulation stopped");
                    break;
                }

                _ = timer.tick() => {
                    self.step();

                    if self.max_ticks.is_some_and(|max| self.metrics.ticks >= max) {
                        info!(ticks = self.metrics.ticks, "tick limit reached");
                        break;
                    }
                }
            }
        }

        self.metrics
    }

    /// One tick: read direction, advance, publish. Never suspends.
    fn step(&mut self) {
        let direction = self.direction.get();
        let (next, outcome) = self.engine.tick(&self.state, direction);

        match outcome {
            TickOutcome::Collided => info!(
                score = self.state.score,
                length = self.state.len(),
                "self-collision, resetting"
            ),
            TickOutcome::Ate => debug!(
                score = next.score,
                food_x = next.food.x,
                food_y = next.food.y,
                "food eaten"
            ),
            TickOutcome::Moved => trace!(x = next.head().x, y = next.head().y, "moved"),
        }

        self.metrics.record(outcome, next.score);
        self.state = next;
        self.snapshots.send_replace(Some(self.state.clone()));
    }
}

/// Control side of a running [`Simulation`]
pub struct SimulationHandle {
    direction: DirectionStore,
    snapshots: SnapshotReceiver,
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<GameMetrics>,
}

impl SimulationHandle {
    pub fn direction(&self) -> DirectionStore {
        self.direction.clone()
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.snapshots.clone()
    }

    /// Stop scheduling ticks and return the run statistics
    pub async fn stop(mut self) -> Result<GameMetrics> {
        if let Some(shutdown) = self.shutdown.take() {
            // The task may already have hit its tick limit.
            let _ = shutdown.send(());
        }
        self.join().await
    }

    /// Wait for the task to end on its own (tick limit)
    pub async fn join(self) -> Result<GameMetrics> {
        // Dropping the sender would stop the task.
        let _shutdown = self.shutdown;
        self.task.await.context("Simulation task failed")
    }
}
