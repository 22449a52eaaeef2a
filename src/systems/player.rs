use bevy_ecs::{
    event::EventWriter,
    query::With,
    system::{Query, Res, ResMut},
};
use tracing::trace;

use crate::constants::mechanics;
use crate::error::GameError;
use crate::systems::{
    input::{InputState, MoveButtons},
    Facing, Grounded, PlayerControlled, Position, RunStats, Velocity,
};

/// Applies horizontal intent and jump requests to the player.
///
/// Held directions translate directly into displacement (speed is a per-tick
/// constant, not an integrated velocity); rightward ticks also accrue
/// distance credit. A jump is honored only from a grounded stance; mid-air
/// requests are silently dropped, which is the whole of the input error
/// policy here.
pub fn player_control_system(
    input: Res<InputState>,
    mut stats: ResMut<RunStats>,
    mut players: Query<(&mut Position, &mut Velocity, &mut Facing, &mut Grounded), With<PlayerControlled>>,
    mut errors: EventWriter<GameError>,
) {
    let (mut position, mut velocity, mut facing, mut grounded) = match players.single_mut() {
        Ok(tuple) => tuple,
        Err(e) => {
            errors.write(GameError::InvalidState(format!(
                "No/multiple entities queried for player control: {}",
                e
            )));
            return;
        }
    };

    if input.held.contains(MoveButtons::LEFT) {
        position.0.x -= mechanics::RUN_SPEED;
        *facing = Facing::Left;
    }
    if input.held.contains(MoveButtons::RIGHT) {
        position.0.x += mechanics::RUN_SPEED;
        *facing = Facing::Right;
        // Distance tracks rightward progress only, not total displacement.
        stats.distance += mechanics::DISTANCE_PER_TICK;
    }

    if input.jump_requested && grounded.0 {
        velocity.y = mechanics::JUMP_POWER;
        grounded.0 = false;
        trace!(x = position.0.x, "Player jumped");
    }
}
