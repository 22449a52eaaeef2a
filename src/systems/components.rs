use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;

use crate::constants::{mechanics, VIEWPORT_SIZE};

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// World-space position of an entity's top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Axis-aligned rectangle size of an entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BodySize(pub Vec2);

/// Continuous vertical velocity. Horizontal motion is a per-tick constant
/// applied directly from input, so no x component is tracked.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub y: f32,
}

/// Which way the player sprite faces. Purely presentational but tracked in
/// the core since input drives it.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Whether the player is resting on a platform top. Cleared at the start of
/// every collision pass; only a confirmed support sets it again, so airborne
/// is the default state.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Grounded(pub bool);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub size: BodySize,
    pub velocity: Velocity,
    pub facing: Facing,
    pub grounded: Grounded,
}

impl PlayerBundle {
    /// A player at the fixed spawn point, airborne and motionless.
    pub fn at_spawn() -> Self {
        PlayerBundle {
            player: PlayerControlled,
            position: Position(mechanics::SPAWN_POSITION),
            size: BodySize(mechanics::PLAYER_SIZE),
            velocity: Velocity::default(),
            facing: Facing::default(),
            grounded: Grounded::default(),
        }
    }
}

/// Whether the simulation is running at all, and whether the host asked to
/// quit. `active` mirrors the page's game-mode toggle: while false, ticks
/// are no-ops and input is dropped.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub active: bool,
    pub exit: bool,
}

/// Per-life score counters. Fully reset on respawn, never patched.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RunStats {
    /// Rightward progress only; never decreases within a life.
    pub distance: f32,
    pub coins: u32,
}

/// Horizontal viewport offset, derived from the player position each tick.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub offset_x: f32,
}

/// Logical size of the host's canvas, in world units.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { size: VIEWPORT_SIZE }
    }
}

/// Overlap test for two top-left anchored rectangles.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x + a_size.x > b_pos.x
        && a_pos.x < b_pos.x + b_size.x
        && a_pos.y + a_size.y > b_pos.y
        && a_pos.y < b_pos.y + b_size.y
}
