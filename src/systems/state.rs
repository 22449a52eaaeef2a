use bevy_ecs::{
    entity::Entity,
    event::EventWriter,
    query::{Or, With},
    resource::Resource,
    system::{Commands, Query, Res, ResMut},
};
use rand::Rng;
use tracing::info;

use crate::constants::{death, mechanics};
use crate::events::{FinalStats, UiRequest};
use crate::systems::{
    input::InputState, CameraState, Facing, Grounded, PlayerControlled, Position, RunStats, Velocity, Viewport,
};
use crate::world::{generator, Cloud, Coin, DoorId, Frontier, Platform, WorldRng};

/// High-level stage of a life. While Dead the whole update chain is frozen
/// and only a respawn command is accepted; the captured stats ride along in
/// the variant for the death screen.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub enum GameStage {
    #[default]
    Running,
    Dead(FinalStats),
}

impl GameStage {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStage::Running)
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, GameStage::Dead(_))
    }
}

/// The door whose info panel is currently open, if any. A sub-state of
/// Running: physics keeps going underneath an open panel.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ActivePanel(pub Option<DoorId>);

/// Fall-death detection. Crossing the kill line below the viewport captures
/// the final stats (with a uniformly drawn message from the fixed pool),
/// freezes the simulation by flipping the stage, and asks the UI for the
/// death screen.
pub fn death_system(
    viewport: Res<Viewport>,
    stats: Res<RunStats>,
    mut stage: ResMut<GameStage>,
    mut panel: ResMut<ActivePanel>,
    mut rng: ResMut<WorldRng>,
    players: Query<&Position, With<PlayerControlled>>,
    mut ui: EventWriter<UiRequest>,
) {
    let Ok(position) = players.single() else {
        return;
    };
    if position.0.y <= viewport.size.y + death::FALL_MARGIN {
        return;
    }

    let message = death::MESSAGES[rng.0.random_range(0..death::MESSAGES.len())];
    let final_stats = FinalStats::capture(&stats, message);
    info!(
        distance = final_stats.distance,
        coins = final_stats.coins,
        score = final_stats.score,
        "Player fell out of the world"
    );

    // The death screen replaces whatever panel was open.
    panel.0 = None;
    ui.write(UiRequest::ShowDeathScreen(final_stats));
    *stage = GameStage::Dead(final_stats);
}

/// Dead → Running. Accepted only while Dead; a respawn request during play
/// is dropped. The world is discarded and rebuilt from scratch (the
/// deterministic tutorial row plus freshly randomized steps) rather than
/// patched, and every per-life counter resets.
#[allow(clippy::too_many_arguments)]
#[allow(clippy::type_complexity)]
pub fn respawn_system(
    mut commands: Commands,
    input: Res<InputState>,
    mut stage: ResMut<GameStage>,
    mut stats: ResMut<RunStats>,
    mut camera: ResMut<CameraState>,
    mut panel: ResMut<ActivePanel>,
    mut frontier: ResMut<Frontier>,
    mut rng: ResMut<WorldRng>,
    mut players: Query<(&mut Position, &mut Velocity, &mut Facing, &mut Grounded), With<PlayerControlled>>,
    stale: Query<Entity, Or<(With<Platform>, With<Coin>, With<Cloud>)>>,
    mut ui: EventWriter<UiRequest>,
) {
    if !stage.is_dead() || !input.respawn_requested {
        return;
    }

    if let Ok((mut position, mut velocity, mut facing, mut grounded)) = players.single_mut() {
        position.0 = mechanics::SPAWN_POSITION;
        *velocity = Velocity::default();
        *facing = Facing::default();
        grounded.0 = false;
    }

    camera.offset_x = 0.0;
    *stats = RunStats::default();
    panel.0 = None;

    for entity in stale.iter() {
        commands.entity(entity).despawn();
    }

    let layout = generator::initial_world(&mut rng.0);
    frontier.0 = layout.frontier;
    let counts = (layout.platforms.len(), layout.coins.len(), layout.clouds.len());
    for platform in layout.platforms {
        commands.spawn(platform);
    }
    for coin in layout.coins {
        commands.spawn(coin);
    }
    for cloud in layout.clouds {
        commands.spawn(cloud);
    }

    ui.write(UiRequest::ClosePanel);
    *stage = GameStage::Running;
    info!(platforms = counts.0, coins = counts.1, clouds = counts.2, "Respawned with a fresh world");
}
