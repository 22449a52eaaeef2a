use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use runfolio::constants::VIEWPORT_SIZE;
use runfolio::events::GameCommand;

mod common;

#[test]
fn test_camera_rests_at_origin_before_midpoint() {
    let mut game = common::test_game();
    common::run_ticks(&mut game, 10);

    // Spawn x (150) is well short of the viewport midpoint.
    assert_eq!(game.camera_offset(), 0.0);
}

#[test]
fn test_camera_locks_to_player_past_midpoint() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(10_000.0, 50.0));

    game.queue_command(GameCommand::StartMoveRight);
    for _ in 0..400 {
        game.tick();
        let x = common::player_position(&mut game).x;
        assert_eq!(game.camera_offset(), (x - VIEWPORT_SIZE.x / 2.0).max(0.0));
    }

    // After 400 ticks the player is far past the midpoint and the camera is
    // rigidly locked on.
    let x = common::player_position(&mut game).x;
    assert_that(&game.camera_offset()).is_equal_to(x - VIEWPORT_SIZE.x / 2.0);
    assert_that(&game.camera_offset()).is_greater_than(0.0);
}

#[test]
fn test_viewport_resize_shifts_the_midpoint() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(10_000.0, 50.0));
    game.set_viewport(Vec2::new(400.0, 720.0));

    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 100);

    let x = common::player_position(&mut game).x;
    assert_eq!(game.camera_offset(), x - 200.0);
}

#[test]
fn test_player_never_left_of_camera() {
    let mut game = common::test_game();
    game.queue_command(GameCommand::StartMoveRight);

    for tick in 0..500 {
        game.tick();
        if tick % 35 == 0 {
            game.queue_command(GameCommand::Jump);
        }
        if tick == 250 {
            // Turn around mid-run.
            game.queue_command(GameCommand::StopMoveRight);
            game.queue_command(GameCommand::StartMoveLeft);
        }
        assert_that(&common::player_position(&mut game).x).is_greater_than_or_equal_to(game.camera_offset());
    }
}
