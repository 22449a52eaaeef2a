//! Centralized error types for the simulation core.
//!
//! The simulation is closed: no I/O, parsing, or external failure sources.
//! Invalid player commands are dropped silently by the systems that receive
//! them, so the remaining error surface is internal invariant violations,
//! which systems report as `GameError` events rather than panicking.

use bevy_ecs::event::Event;

/// Main error type for the game core.
///
/// Registered as an ECS event; systems that detect an inconsistent world
/// write it, and the host drains and logs it after each tick.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("World generation error: {0}")]
    WorldGen(#[from] WorldGenError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to procedural world generation.
#[derive(thiserror::Error, Debug)]
pub enum WorldGenError {
    #[error("Frontier moved backwards: {from} -> {to}")]
    FrontierRegression { from: f32, to: f32 },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
