//! Grid Snake - the simulation core of a single-screen snake game
//!
//! This library provides:
//! - Core game logic and the ticking simulation task (game module)
//! - Reversal-filtered steering for presentation code (input module)
//! - Run statistics (metrics module)
//! - A screenless runner used by the binary (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
