use bevy_ecs::{
    query::{With, Without},
    system::Query,
};

use crate::constants::mechanics;
use crate::systems::{BodySize, Grounded, PlayerControlled, Position, Velocity};
use crate::world::Platform;

/// Gravity integration and platform landing resolution.
///
/// Gravity accelerates the player unconditionally every tick; the landing
/// pass afterwards may zero the velocity again. `grounded` is cleared before
/// the pass, so staying airborne is the default and only a confirmed support
/// sets it.
///
/// A landing happens when the player's horizontal extent overlaps a
/// platform's, their feet are inside the platform's top band, and they are
/// falling; rising players pass through from below. Overlapping platforms
/// resolve independently in iteration order with the last write winning,
/// not by closest support; games of this kind tolerate the rare artifact.
pub fn movement_system(
    mut players: Query<(&mut Position, &mut Velocity, &mut Grounded, &BodySize), With<PlayerControlled>>,
    platforms: Query<(&Position, &BodySize), (With<Platform>, Without<PlayerControlled>)>,
) {
    let Ok((mut position, mut velocity, mut grounded, size)) = players.single_mut() else {
        return;
    };

    velocity.y += mechanics::GRAVITY;
    position.0.y += velocity.y;

    grounded.0 = false;
    for (platform_pos, platform_size) in platforms.iter() {
        let overlaps_x = position.0.x + size.0.x > platform_pos.0.x
            && position.0.x < platform_pos.0.x + platform_size.0.x;
        let feet = position.0.y + size.0.y;
        let in_band = feet > platform_pos.0.y && feet < platform_pos.0.y + mechanics::LANDING_BAND;

        if overlaps_x && in_band && velocity.y > 0.0 {
            position.0.y = platform_pos.0.y - size.0.y;
            velocity.y = 0.0;
            grounded.0 = true;
        }
    }
}
