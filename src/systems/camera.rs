use bevy_ecs::{
    query::With,
    system::{Query, Res, ResMut},
};

use crate::systems::{CameraState, PlayerControlled, Position, Viewport};

/// Stateless horizontal follow: once the player passes the viewport
/// midpoint the camera locks to them rigidly (no smoothing), and it never
/// shows negative world space.
pub fn camera_system(
    viewport: Res<Viewport>,
    mut camera: ResMut<CameraState>,
    players: Query<&Position, With<PlayerControlled>>,
) {
    if let Ok(position) = players.single() {
        camera.offset_x = (position.0.x - viewport.size.x / 2.0).max(0.0);
    }
}

/// Clamps the player to the camera's left edge so they can never back off
/// the visible world. Runs at the end of the update chain, after every
/// other system that moves the player.
pub fn boundary_system(camera: Res<CameraState>, mut players: Query<&mut Position, With<PlayerControlled>>) {
    if let Ok(mut position) = players.single_mut() {
        if position.0.x < camera.offset_x {
            position.0.x = camera.offset_x;
        }
    }
}
