#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use glam::Vec2;

use runfolio::constants::mechanics;
use runfolio::game::Game;
use runfolio::systems::{BodySize, Grounded, PlayerControlled, Position, Velocity};
use runfolio::world::{Coin, CoinBundle, DoorId, Platform, PlatformBundle, PlatformKind};

/// Seed shared by tests that need reproducible generation.
pub const SEED: u64 = 0xC0FFEE;

/// A started game with deterministic world generation.
pub fn test_game() -> Game {
    let mut game = Game::with_seed(SEED);
    game.start();
    game
}

pub fn run_ticks(game: &mut Game, ticks: usize) {
    for _ in 0..ticks {
        game.tick();
    }
}

pub fn player_position(game: &mut Game) -> Vec2 {
    game.world
        .query_filtered::<&Position, With<PlayerControlled>>()
        .single(&game.world)
        .expect("player entity")
        .0
}

pub fn player_velocity_y(game: &mut Game) -> f32 {
    game.world
        .query_filtered::<&Velocity, With<PlayerControlled>>()
        .single(&game.world)
        .expect("player entity")
        .y
}

pub fn player_grounded(game: &mut Game) -> bool {
    game.world
        .query_filtered::<&Grounded, With<PlayerControlled>>()
        .single(&game.world)
        .expect("player entity")
        .0
}

pub fn set_player_position(game: &mut Game, position: Vec2) {
    let mut query = game.world.query_filtered::<&mut Position, With<PlayerControlled>>();
    query.single_mut(&mut game.world).expect("player entity").0 = position;
}

pub fn set_player_velocity_y(game: &mut Game, y: f32) {
    let mut query = game.world.query_filtered::<&mut Velocity, With<PlayerControlled>>();
    query.single_mut(&mut game.world).expect("player entity").y = y;
}

/// Removes every platform so gravity scenarios can fall unobstructed.
pub fn clear_platforms(game: &mut Game) {
    let stale: Vec<Entity> = game
        .world
        .query_filtered::<Entity, With<Platform>>()
        .iter(&game.world)
        .collect();
    for entity in stale {
        game.world.despawn(entity);
    }
}

pub fn clear_coins(game: &mut Game) {
    let stale: Vec<Entity> = game
        .world
        .query_filtered::<Entity, With<Coin>>()
        .iter(&game.world)
        .collect();
    for entity in stale {
        game.world.despawn(entity);
    }
}

pub fn spawn_platform(game: &mut Game, position: Vec2, size: Vec2) -> Entity {
    spawn_door_platform(game, position, size, None)
}

pub fn spawn_door_platform(game: &mut Game, position: Vec2, size: Vec2, door: Option<DoorId>) -> Entity {
    game.world
        .spawn(PlatformBundle {
            platform: Platform {
                kind: PlatformKind::Block,
                door,
            },
            position: Position(position),
            size: BodySize(size),
        })
        .id()
}

pub fn spawn_coin(game: &mut Game, position: Vec2, size: Vec2) -> Entity {
    game.world
        .spawn(CoinBundle {
            coin: Coin::default(),
            position: Position(position),
            size: BodySize(size),
        })
        .id()
}

/// Parks the player just above a surface and lets a few ticks of gravity
/// settle them, so `grounded` is the product of a real landing.
pub fn settle_on(game: &mut Game, x: f32, top: f32) {
    set_player_position(game, Vec2::new(x, top - mechanics::PLAYER_SIZE.y - 2.0));
    set_player_velocity_y(game, 0.0);
    run_ticks(game, 3);
    assert!(player_grounded(game), "player should have settled onto the surface");
}

pub fn platform_count(game: &mut Game) -> usize {
    game.world
        .query_filtered::<(), With<Platform>>()
        .iter(&game.world)
        .count()
}

pub fn coin_count(game: &mut Game) -> usize {
    game.world
        .query_filtered::<(), With<Coin>>()
        .iter(&game.world)
        .count()
}

pub fn collected_coin_count(game: &mut Game) -> usize {
    game.world
        .query::<&Coin>()
        .iter(&game.world)
        .filter(|coin| coin.collected)
        .count()
}
