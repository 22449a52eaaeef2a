//! Read-only frame snapshot for the render collaborator.
//!
//! The core decides *what* is visible; drawing it is entirely the host's
//! concern. Entities outside the viewport plus a per-kind margin are
//! culled here, so the render stage never needs world-coordinate reasoning
//! of its own.

use bevy_ecs::world::World;
use glam::Vec2;

use crate::constants::view;
use crate::error::{GameError, GameResult};
use crate::systems::{
    door_in_reach, ActivePanel, BodySize, CameraState, Facing, GameStage, Grounded, PlayerControlled, Position,
    RunStats, Viewport,
};
use crate::world::{Cloud, Coin, DoorId, Platform, PlatformKind};

#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    pub grounded: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct PlatformView {
    pub position: Vec2,
    pub size: Vec2,
    pub kind: PlatformKind,
    pub door: Option<DoorId>,
    /// True when an interact request right now would open this door; the
    /// host draws its "press E" prompt from this.
    pub prompt: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CoinView {
    pub position: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy)]
pub struct CloudView {
    pub position: Vec2,
    pub size: Vec2,
}

/// Everything the render stage consumes for one frame.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub stage: GameStage,
    pub active_panel: Option<DoorId>,
    pub camera_x: f32,
    pub stats: RunStats,
    pub player: PlayerView,
    pub platforms: Vec<PlatformView>,
    /// Uncollected coins only; collected ones are invisible for the rest of
    /// the life.
    pub coins: Vec<CoinView>,
    pub clouds: Vec<CloudView>,
}

fn in_view(camera_x: f32, viewport_width: f32, margin: f32, x: f32, width: f32) -> bool {
    x + width > camera_x - margin && x < camera_x + viewport_width + margin
}

/// Captures the current frame. Fails only if the player entity is missing,
/// which would mean the world was tampered with from outside.
pub fn capture(world: &mut World) -> GameResult<FrameSnapshot> {
    let stage = *world.resource::<GameStage>();
    let active_panel = world.resource::<ActivePanel>().0;
    let camera_x = world.resource::<CameraState>().offset_x;
    let stats = *world.resource::<RunStats>();
    let viewport_width = world.resource::<Viewport>().size.x;

    let player = world
        .query_filtered::<(&Position, &BodySize, &Facing, &Grounded), bevy_ecs::query::With<PlayerControlled>>()
        .single(world)
        .map(|(position, size, facing, grounded)| PlayerView {
            position: position.0,
            size: size.0,
            facing: *facing,
            grounded: grounded.0,
        })
        .map_err(|e| GameError::InvalidState(format!("No/multiple entities queried for snapshot: {}", e)))?;

    let prompt_allowed = stage.is_running() && active_panel.is_none() && player.grounded;

    let platforms = world
        .query::<(&Platform, &Position, &BodySize)>()
        .iter(world)
        .filter(|(_, position, size)| in_view(camera_x, viewport_width, view::PLATFORM_MARGIN, position.0.x, size.0.x))
        .map(|(platform, position, size)| PlatformView {
            position: position.0,
            size: size.0,
            kind: platform.kind,
            door: platform.door,
            prompt: prompt_allowed
                && platform.door.is_some()
                && door_in_reach(player.position, player.size, position.0, size.0),
        })
        .collect();

    let coins = world
        .query::<(&Coin, &Position, &BodySize)>()
        .iter(world)
        .filter(|(coin, position, size)| {
            !coin.collected && in_view(camera_x, viewport_width, view::COIN_MARGIN, position.0.x, size.0.x)
        })
        .map(|(_, position, size)| CoinView {
            position: position.0,
            size: size.0,
        })
        .collect();

    let clouds = world
        .query_filtered::<(&Position, &BodySize), bevy_ecs::query::With<Cloud>>()
        .iter(world)
        .filter(|(position, size)| in_view(camera_x, viewport_width, view::CLOUD_MARGIN, position.0.x, size.0.x))
        .map(|(position, size)| CloudView {
            position: position.0,
            size: size.0,
        })
        .collect();

    Ok(FrameSnapshot {
        stage,
        active_panel,
        camera_x,
        stats,
        player,
        platforms,
        coins,
        clouds,
    })
}
