//! Commands flowing into the core and requests flowing out of it.
//!
//! The host's input collaborator delivers `GameCommand`s (already mapped
//! from key events by [`crate::systems::input::Bindings`]); the core answers
//! with `UiRequest`s that the panel/UI collaborator consumes. The core never
//! renders text or touches the page itself.

use bevy_ecs::prelude::*;

use crate::constants::death;
use crate::systems::RunStats;
use crate::world::DoorId;

/// Discrete input events the host delivers, one per key transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    StartMoveLeft,
    StopMoveLeft,
    StartMoveRight,
    StopMoveRight,
    Jump,
    Interact,
    Respawn,
    Exit,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}

/// Final tally shown on the death screen. Captured at the moment of death;
/// the live `RunStats` reset on respawn while this copy survives inside the
/// Dead stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalStats {
    /// Whole units of rightward progress.
    pub distance: u32,
    pub coins: u32,
    pub score: u32,
    /// One entry of the fixed death message pool.
    pub message: &'static str,
}

impl FinalStats {
    pub fn capture(stats: &RunStats, message: &'static str) -> Self {
        FinalStats {
            distance: stats.distance.floor() as u32,
            coins: stats.coins,
            score: (stats.distance + stats.coins as f32 * death::COIN_VALUE).floor() as u32,
            message,
        }
    }
}

/// Side effects the core asks the external UI collaborator to perform.
/// Emitted by state transitions, drained by the host after each tick.
#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum UiRequest {
    /// Open the info panel whose content is keyed by this door.
    OpenPanel(DoorId),
    ClosePanel,
    ShowDeathScreen(FinalStats),
}
