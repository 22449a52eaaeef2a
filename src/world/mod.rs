//! World entities (platforms, coins, clouds) and procedural generation.

pub mod generator;

use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum_macros::{Display, EnumIter, EnumString};

use crate::systems::{BodySize, Position};

/// Identifier linking a door platform to an external info panel. The string
/// forms (via `Display`/`FromStr`) are the keys the UI collaborator indexes
/// its content by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DoorId {
    About,
    Skills,
    Experience,
    Projects,
}

/// Visual category of a platform. Cosmetic to the simulation, except that
/// `Ground` marks the guaranteed opening foothold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PlatformKind {
    Ground,
    Block,
    Question,
    Brick,
    Coin,
    Pipe,
}

/// A static platform. Immutable once spawned; the platform list only grows
/// within a life (append-only, ascending x).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub kind: PlatformKind,
    /// Present on the four tutorial platforms that open info panels.
    pub door: Option<DoorId>,
}

/// A floating collectible. Never despawned; `collected` flips once per life
/// and the render stage skips collected coins.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub collected: bool,
}

/// Background decoration. No collision, no interaction.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Cloud;

/// World x beyond which no platforms exist yet; the generation high-water
/// mark. Only ever increases within a life.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct Frontier(pub f32);

/// Seedable random source for world synthesis and death messages. Injected
/// as a resource so tests can pin a seed and replay generation exactly.
#[derive(Resource, Debug)]
pub struct WorldRng(pub SmallRng);

impl WorldRng {
    pub fn from_os_rng() -> Self {
        WorldRng(SmallRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }
}

#[derive(Bundle, Debug, Clone, Copy)]
pub struct PlatformBundle {
    pub platform: Platform,
    pub position: Position,
    pub size: BodySize,
}

#[derive(Bundle, Debug, Clone, Copy)]
pub struct CoinBundle {
    pub coin: Coin,
    pub position: Position,
    pub size: BodySize,
}

#[derive(Bundle, Debug, Clone, Copy)]
pub struct CloudBundle {
    pub cloud: Cloud,
    pub position: Position,
    pub size: BodySize,
}
