use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use runfolio::constants::mechanics;
use runfolio::events::GameCommand;

mod common;

#[test]
fn test_gravity_accumulates_every_tick() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);

    // With nothing to land on, velocity grows by exactly one gravity step
    // per tick.
    for tick in 1..=5 {
        game.tick();
        let expected = mechanics::GRAVITY * tick as f32;
        assert_that(&(common::player_velocity_y(&mut game) - expected).abs()).is_less_than(1e-4);
    }
}

#[test]
fn test_player_spawns_airborne() {
    let mut game = common::test_game();
    assert!(!common::player_grounded(&mut game));
}

#[test]
fn test_player_lands_on_platform_top() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(100.0, 500.0), Vec2::new(200.0, 30.0));
    common::set_player_position(&mut game, Vec2::new(150.0, 451.0));
    common::set_player_velocity_y(&mut game, 0.0);

    common::run_ticks(&mut game, 3);

    let position = common::player_position(&mut game);
    assert_eq!(position.y, 500.0 - mechanics::PLAYER_SIZE.y);
    assert_eq!(common::player_velocity_y(&mut game), 0.0);
    assert!(common::player_grounded(&mut game));
}

#[test]
fn test_rising_player_passes_through_platform() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(100.0, 500.0), Vec2::new(200.0, 30.0));
    // Feet will be inside the landing band after integration, but moving up.
    common::set_player_position(&mut game, Vec2::new(150.0, 455.0));
    common::set_player_velocity_y(&mut game, -1.0);

    game.tick();

    assert!(!common::player_grounded(&mut game));
    assert_that(&common::player_velocity_y(&mut game)).is_less_than(0.0);
}

#[test]
fn test_player_misses_platform_outside_horizontal_span() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(100.0, 500.0), Vec2::new(50.0, 30.0));
    // Horizontally clear of the platform: falls straight past it.
    common::set_player_position(&mut game, Vec2::new(300.0, 451.0));
    common::set_player_velocity_y(&mut game, 0.0);

    common::run_ticks(&mut game, 5);

    assert!(!common::player_grounded(&mut game));
    assert_that(&common::player_position(&mut game).y).is_greater_than(455.0);
}

#[test]
fn test_jump_only_from_grounded_stance() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 500.0), Vec2::new(600.0, 30.0));
    common::settle_on(&mut game, 150.0, 500.0);

    game.queue_command(GameCommand::Jump);
    game.tick();

    // Jump velocity was applied, then one gravity step integrated on top.
    assert_eq!(
        common::player_velocity_y(&mut game),
        mechanics::JUMP_POWER + mechanics::GRAVITY
    );
    assert!(!common::player_grounded(&mut game));
}

#[test]
fn test_jump_request_while_airborne_is_dropped() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    game.tick();
    let velocity_before = common::player_velocity_y(&mut game);

    game.queue_command(GameCommand::Jump);
    game.tick();

    // Just gravity; no jump impulse.
    assert_eq!(
        common::player_velocity_y(&mut game),
        velocity_before + mechanics::GRAVITY
    );
}

#[test]
fn test_held_direction_moves_player_each_tick() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(10_000.0, 50.0));

    let start_x = common::player_position(&mut game).x;
    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 10);
    assert_eq!(common::player_position(&mut game).x, start_x + 10.0 * mechanics::RUN_SPEED);

    game.queue_command(GameCommand::StopMoveRight);
    game.tick();
    game.tick();
    assert_eq!(common::player_position(&mut game).x, start_x + 10.0 * mechanics::RUN_SPEED);
}

#[test]
fn test_distance_tracks_rightward_movement_only() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::clear_coins(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(10_000.0, 50.0));

    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 1000);
    game.queue_command(GameCommand::StopMoveRight);
    game.tick();

    // 0.1 per tick over 1000 ticks of rightward running.
    let distance = game.stats().distance;
    assert_that(&(distance - 100.0).abs()).is_less_than(0.5);

    // Leftward movement earns nothing.
    game.queue_command(GameCommand::StartMoveLeft);
    common::run_ticks(&mut game, 50);
    assert_eq!(game.stats().distance, distance);
}

#[test]
fn test_distance_never_decreases_while_running() {
    let mut game = common::test_game();
    game.queue_command(GameCommand::StartMoveRight);

    let mut last = 0.0f32;
    for tick in 0..300 {
        game.tick();
        if tick % 40 == 0 {
            game.queue_command(GameCommand::Jump);
        }
        let distance = game.stats().distance;
        assert_that(&distance).is_greater_than_or_equal_to(last);
        last = distance;
    }
}

#[test]
fn test_player_clamped_to_camera_left_edge() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(10_000.0, 50.0));

    // Run right far enough that the camera locks on, then hold left.
    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 300);
    game.queue_command(GameCommand::StopMoveRight);
    game.queue_command(GameCommand::StartMoveLeft);

    for _ in 0..400 {
        game.tick();
        let position = common::player_position(&mut game);
        assert_that(&position.x).is_greater_than_or_equal_to(game.camera_offset());
    }

    // Holding left long enough pins the player against the world origin.
    assert_eq!(common::player_position(&mut game).x, 0.0);
}
