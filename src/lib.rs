//! Simulation core for the portfolio site's platformer game mode.
//!
//! The crate owns the real-time loop only: procedural world generation,
//! physics and collision, camera scrolling, interaction detection and the
//! death/respawn state machine. Rendering, panel content and page chrome
//! are external collaborators reached through [`app::HostBridge`] and
//! [`snapshot::FrameSnapshot`].

pub mod app;
pub mod constants;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod snapshot;
pub mod systems;
pub mod world;
