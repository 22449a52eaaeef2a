//! Procedural world synthesis.
//!
//! All randomness flows through the injected [`WorldRng`] so a seeded game
//! replays its world exactly. The synthesis functions are pure: they return
//! bundles instead of spawning, which lets `Game::new` build the opening
//! world directly on the `World` while the respawn system rebuilds it
//! through `Commands`, from the same code.

use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Commands, Query, Res, ResMut},
};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::constants::{clouds, generation, tutorial};
use crate::error::{GameError, WorldGenError};
use crate::systems::{BodySize, CameraState, Position, Viewport};
use crate::world::{Cloud, CloudBundle, Coin, CoinBundle, DoorId, Frontier, Platform, PlatformBundle, PlatformKind, WorldRng};

/// One randomized synthesis step: the new platform, any coins seeded around
/// it, and the advanced frontier.
pub struct GeneratedStep {
    pub platform: PlatformBundle,
    pub coins: SmallVec<[CoinBundle; 2]>,
    pub frontier: f32,
}

/// Everything a fresh life spawns with.
pub struct InitialWorld {
    pub platforms: Vec<PlatformBundle>,
    pub coins: Vec<CoinBundle>,
    pub clouds: Vec<CloudBundle>,
    pub frontier: f32,
}

fn platform(position: Vec2, size: Vec2, kind: PlatformKind, door: Option<DoorId>) -> PlatformBundle {
    PlatformBundle {
        platform: Platform { kind, door },
        position: Position(position),
        size: BodySize(size),
    }
}

fn coin(position: Vec2) -> CoinBundle {
    CoinBundle {
        coin: Coin::default(),
        position: Position(position),
        size: BodySize(generation::COIN_SIZE),
    }
}

/// The deterministic opening row: the extended ground strip and the four
/// door platforms, one per info panel, laid out exactly as the tutorial
/// expects. No randomness here; these must always be reachable.
pub fn tutorial_platforms() -> SmallVec<[PlatformBundle; 5]> {
    let door_y = tutorial::DOOR_Y;
    smallvec![
        platform(tutorial::GROUND_POSITION, tutorial::GROUND_SIZE, PlatformKind::Ground, None),
        platform(Vec2::new(250.0, door_y), Vec2::new(100.0, 150.0), PlatformKind::Pipe, Some(DoorId::About)),
        platform(Vec2::new(420.0, door_y), Vec2::new(120.0, 40.0), PlatformKind::Question, Some(DoorId::Skills)),
        platform(Vec2::new(620.0, door_y), Vec2::new(140.0, 40.0), PlatformKind::Brick, Some(DoorId::Experience)),
        platform(Vec2::new(840.0, door_y), Vec2::new(120.0, 40.0), PlatformKind::Coin, Some(DoorId::Projects)),
    ]
}

/// Synthesizes the next platform past `frontier`: draw a gap, a top
/// edge and a width, pick a category, then maybe seed a coin above the
/// platform and another over the gap when it is wide enough to cross
/// mid-air. The returned frontier is the new platform's right edge.
pub fn platform_step(rng: &mut SmallRng, frontier: f32) -> GeneratedStep {
    let gap = rng.random_range(generation::GAP);
    let x = frontier + gap;
    let y = rng.random_range(generation::PLATFORM_Y);
    let width = rng.random_range(generation::PLATFORM_WIDTH);

    let kind = match rng.random_range(0..3) {
        0 => PlatformKind::Block,
        1 => PlatformKind::Question,
        _ => PlatformKind::Brick,
    };

    let mut coins = SmallVec::new();
    let half_coin = generation::COIN_SIZE.x / 2.0;

    if rng.random_bool(generation::COIN_ABOVE_CHANCE) {
        coins.push(coin(Vec2::new(
            x + width / 2.0 - half_coin,
            y - generation::COIN_ABOVE_RISE,
        )));
    }

    if rng.random_bool(generation::COIN_BETWEEN_CHANCE) && gap > generation::COIN_BETWEEN_MIN_GAP {
        coins.push(coin(Vec2::new(
            x - gap / 2.0 - half_coin,
            y.min(generation::COIN_BETWEEN_BASE_CAP) - generation::COIN_BETWEEN_RISE,
        )));
    }

    GeneratedStep {
        platform: platform(Vec2::new(x, y), Vec2::new(width, generation::PLATFORM_HEIGHT), kind, None),
        coins,
        frontier: x + width,
    }
}

/// Coins sprinkled over the opening stretch, independent of any platform.
pub fn scattered_coins(rng: &mut SmallRng) -> Vec<CoinBundle> {
    (0..generation::SCATTERED_COIN_COUNT)
        .map(|i| {
            let x = i as f32 * generation::SCATTERED_COIN_SPACING
                + generation::SCATTERED_COIN_LEAD
                + rng.random_range(0.0..generation::SCATTERED_COIN_JITTER);
            coin(Vec2::new(x, rng.random_range(generation::SCATTERED_COIN_Y)))
        })
        .collect()
}

fn cloud_at(rng: &mut SmallRng, x: f32) -> CloudBundle {
    CloudBundle {
        cloud: Cloud,
        position: Position(Vec2::new(x, clouds::Y_BASE + rng.random_range(0.0..clouds::Y_SPREAD))),
        size: BodySize(Vec2::new(
            clouds::WIDTH_BASE + rng.random_range(0.0..clouds::WIDTH_SPREAD),
            clouds::HEIGHT_BASE + rng.random_range(0.0..clouds::HEIGHT_SPREAD),
        )),
    }
}

pub fn initial_clouds(rng: &mut SmallRng) -> Vec<CloudBundle> {
    (0..clouds::INITIAL_COUNT)
        .map(|i| {
            let x = i as f32 * clouds::SPACING + rng.random_range(0.0..clouds::JITTER);
            cloud_at(rng, x)
        })
        .collect()
}

/// A replacement cloud somewhere past the viewport's right edge.
pub fn cloud_ahead(rng: &mut SmallRng, camera_offset: f32, viewport_width: f32) -> CloudBundle {
    let x = camera_offset + viewport_width + rng.random_range(0.0..clouds::AHEAD_LEAD);
    cloud_at(rng, x)
}

/// Builds the complete spawn set for a fresh life: the tutorial row, the
/// eagerly pre-generated randomized stretch, the scattered coins and the
/// cloud backdrop.
pub fn initial_world(rng: &mut SmallRng) -> InitialWorld {
    let mut platforms: Vec<PlatformBundle> = tutorial_platforms().into_vec();
    let mut coins = Vec::new();
    let mut frontier = tutorial::FRONTIER;

    for _ in 0..generation::PREGENERATED_STEPS {
        let step = platform_step(rng, frontier);
        frontier = step.frontier;
        platforms.push(step.platform);
        coins.extend(step.coins);
    }

    coins.extend(scattered_coins(rng));
    let cloud_layer = initial_clouds(rng);

    InitialWorld {
        platforms,
        coins,
        clouds: cloud_layer,
        frontier,
    }
}

/// Camera-driven incremental generation. Keeps the platform frontier at
/// least a margin past the camera's right edge and tops the cloud pool back
/// up whenever too few remain on screen or ahead.
pub fn generation_system(
    mut commands: Commands,
    camera: Res<CameraState>,
    viewport: Res<Viewport>,
    mut frontier: ResMut<Frontier>,
    mut rng: ResMut<WorldRng>,
    cloud_layer: Query<(&Position, &BodySize), With<Cloud>>,
    mut errors: EventWriter<GameError>,
) {
    let target = camera.offset_x + viewport.size.x + generation::MARGIN;
    let mut spawned = 0usize;

    while frontier.0 < target {
        let step = platform_step(&mut rng.0, frontier.0);
        if step.frontier <= frontier.0 {
            errors.write(
                WorldGenError::FrontierRegression {
                    from: frontier.0,
                    to: step.frontier,
                }
                .into(),
            );
            break;
        }
        frontier.0 = step.frontier;
        commands.spawn(step.platform);
        for coin in step.coins {
            commands.spawn(coin);
        }
        spawned += 1;
    }

    if spawned > 0 {
        trace!(spawned, frontier = frontier.0, "Extended platform frontier");
    }

    let visible_or_ahead = cloud_layer
        .iter()
        .filter(|(position, size)| position.0.x + size.0.x >= camera.offset_x)
        .count();
    for _ in visible_or_ahead..clouds::POOL {
        commands.spawn(cloud_ahead(&mut rng.0, camera.offset_x, viewport.size.x));
    }
}
