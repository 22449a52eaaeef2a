use bevy_ecs::{
    event::EventWriter,
    query::{With, Without},
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::debug;

use crate::constants::interaction;
use crate::events::UiRequest;
use crate::systems::{input::InputState, state::ActivePanel, BodySize, Grounded, PlayerControlled, Position};
use crate::world::Platform;

/// True when the player's horizontal center is inside the platform's span
/// and their feet are level with its top edge. Shared by the interact check
/// and the snapshot's "press E" prompt so the two can never disagree.
pub fn door_in_reach(player_pos: Vec2, player_size: Vec2, platform_pos: Vec2, platform_size: Vec2) -> bool {
    let center = player_pos.x + player_size.x / 2.0;
    let feet = player_pos.y + player_size.y;
    center > platform_pos.x
        && center < platform_pos.x + platform_size.x
        && (feet - platform_pos.y).abs() < interaction::DOOR_BAND
}

/// Panel toggling. With a panel open, an interact request closes it
/// no matter where the player stands; otherwise a grounded player standing
/// on a door platform opens that door's panel. Airborne requests and
/// requests with no door underfoot are dropped silently.
pub fn interact_system(
    input: Res<InputState>,
    mut panel: ResMut<ActivePanel>,
    players: Query<(&Position, &BodySize, &Grounded), With<PlayerControlled>>,
    platforms: Query<(&Platform, &Position, &BodySize), Without<PlayerControlled>>,
    mut ui: EventWriter<UiRequest>,
) {
    if !input.interact_requested {
        return;
    }

    if panel.0.take().is_some() {
        ui.write(UiRequest::ClosePanel);
        debug!("Info panel closed");
        return;
    }

    let Ok((position, size, grounded)) = players.single() else {
        return;
    };
    if !grounded.0 {
        return;
    }

    let door = platforms.iter().find_map(|(platform, platform_pos, platform_size)| {
        platform
            .door
            .filter(|_| door_in_reach(position.0, size.0, platform_pos.0, platform_size.0))
    });

    if let Some(door) = door {
        panel.0 = Some(door);
        ui.write(UiRequest::OpenPanel(door));
        debug!(%door, "Info panel opened");
    }
}
