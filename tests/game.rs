use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

use runfolio::constants::{view, VIEWPORT_SIZE};
use runfolio::events::GameCommand;
use runfolio::world::{DoorId, Frontier};

mod common;

#[test]
fn test_long_seeded_run_holds_core_invariants() {
    let mut game = common::test_game();
    game.queue_command(GameCommand::StartMoveRight);

    let mut last_distance = 0.0f32;

    for tick in 0..1000 {
        game.tick();
        if tick % 40 == 0 {
            game.queue_command(GameCommand::Jump);
        }
        if game.stage().is_dead() {
            game.queue_command(GameCommand::Respawn);
            last_distance = 0.0;
        }

        let frontier = game.world.resource::<Frontier>().0;
        assert_that(&common::player_position(&mut game).x).is_greater_than_or_equal_to(game.camera_offset());
        assert_that(&frontier).is_greater_than_or_equal_to(game.camera_offset() + VIEWPORT_SIZE.x);

        if game.stage().is_running() {
            let distance = game.stats().distance;
            assert_that(&distance).is_greater_than_or_equal_to(last_distance);
            last_distance = distance;
        }
    }
}

#[test]
fn test_snapshot_reflects_player_and_stats() {
    let mut game = common::test_game();
    common::run_ticks(&mut game, 30);

    let frame = game.snapshot().expect("snapshot");
    assert_eq!(frame.player.position, common::player_position(&mut game));
    assert_eq!(frame.stats, game.stats());
    assert_eq!(frame.camera_x, game.camera_offset());
    assert!(frame.stage.is_running());
    assert_eq!(frame.active_panel, None);
}

#[test]
fn test_snapshot_culls_to_camera_view() {
    let mut game = common::test_game();
    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 200);

    let frame = game.snapshot().expect("snapshot");
    let camera = frame.camera_x;

    assert_that(&frame.platforms.len()).is_greater_than(0);
    for platform in &frame.platforms {
        assert!(platform.position.x + platform.size.x > camera - view::PLATFORM_MARGIN);
        assert!(platform.position.x < camera + VIEWPORT_SIZE.x + view::PLATFORM_MARGIN);
    }
    for coin in &frame.coins {
        assert!(coin.position.x + coin.size.x > camera - view::COIN_MARGIN);
        assert!(coin.position.x < camera + VIEWPORT_SIZE.x + view::COIN_MARGIN);
    }
    for cloud in &frame.clouds {
        assert!(cloud.position.x + cloud.size.x > camera - view::CLOUD_MARGIN);
        assert!(cloud.position.x < camera + VIEWPORT_SIZE.x + view::CLOUD_MARGIN);
    }
}

#[test]
fn test_snapshot_skips_collected_coins() {
    let mut game = common::test_game();
    common::clear_platforms(&mut game);
    common::clear_coins(&mut game);
    common::spawn_platform(&mut game, Vec2::new(0.0, 550.0), Vec2::new(1_000.0, 50.0));
    common::spawn_coin(&mut game, Vec2::new(300.0, 510.0), Vec2::new(20.0, 20.0));

    game.queue_command(GameCommand::StartMoveRight);
    common::run_ticks(&mut game, 60);
    assert_eq!(game.stats().coins, 1);

    let frame = game.snapshot().expect("snapshot");
    assert!(frame.coins.is_empty());
}

#[test]
fn test_snapshot_prompt_marks_door_underfoot() {
    let mut game = common::test_game();
    common::settle_on(&mut game, 284.0, 480.0);

    let frame = game.snapshot().expect("snapshot");
    let prompts: Vec<Option<DoorId>> = frame
        .platforms
        .iter()
        .filter(|platform| platform.prompt)
        .map(|platform| platform.door)
        .collect();
    assert_eq!(prompts, vec![Some(DoorId::About)]);

    // With the panel open, the prompt disappears.
    game.queue_command(GameCommand::Interact);
    game.tick();
    let frame = game.snapshot().expect("snapshot");
    assert!(frame.platforms.iter().all(|platform| !platform.prompt));
}

#[test]
fn test_missing_player_is_reported_not_fatal() {
    let mut game = common::test_game();

    // Tampering with the world from outside is the only way to lose the
    // player; the core reports it as an error event instead of panicking.
    let player = game
        .world
        .query_filtered::<bevy_ecs::entity::Entity, bevy_ecs::query::With<runfolio::systems::PlayerControlled>>()
        .single(&game.world)
        .expect("player entity");
    game.world.despawn(player);

    game.tick();

    let errors = game.drain_errors();
    assert!(!errors.is_empty());
    assert!(game.snapshot().is_err());
}

#[test]
fn test_two_seeds_diverge() {
    let mut a = runfolio::game::Game::with_seed(1);
    let mut b = runfolio::game::Game::with_seed(2);

    let xs = |game: &mut runfolio::game::Game| -> Vec<f32> {
        let mut xs: Vec<f32> = game
            .world
            .query::<(&runfolio::world::Platform, &runfolio::systems::Position)>()
            .iter(&game.world)
            .map(|(_, position)| position.0.x)
            .collect();
        xs.sort_by(|x, y| x.total_cmp(y));
        xs
    };

    assert_ne!(xs(&mut a), xs(&mut b));
}
