//! Core game logic module for Snake
//!
//! Everything here is free of rendering and input-device code. Presentation
//! code reads snapshots from a [`Simulation`] and writes directions into its
//! [`DirectionStore`].

pub mod config;
pub mod direction;
pub mod engine;
pub mod simulation;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::{
    BOARD_HEIGHT, BOARD_WIDTH, GameConfig, INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_HEAD,
    INITIAL_SNAKE_LENGTH, RESTART_HEAD, TICK_PERIOD,
};
pub use direction::{Direction, DirectionError};
pub use engine::{GameEngine, TickOutcome};
pub use simulation::{Simulation, SimulationHandle, SnapshotReceiver};
pub use state::{GameState, Position};
pub use store::DirectionStore;
