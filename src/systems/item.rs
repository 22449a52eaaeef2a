use bevy_ecs::{
    query::{With, Without},
    system::{Query, ResMut},
};
use tracing::trace;

use crate::systems::{aabb_overlap, BodySize, PlayerControlled, Position, RunStats};
use crate::world::Coin;

/// Marks coins the player touches as collected and tallies them.
///
/// Coins are never despawned (the render stage skips collected ones), and
/// the flag never reverts within a life, so the tally always equals the
/// number of collected coin entities.
pub fn item_system(
    mut stats: ResMut<RunStats>,
    players: Query<(&Position, &BodySize), With<PlayerControlled>>,
    mut coins: Query<(&mut Coin, &Position, &BodySize), Without<PlayerControlled>>,
) {
    let Ok((player_pos, player_size)) = players.single() else {
        return;
    };

    for (mut coin, coin_pos, coin_size) in coins.iter_mut() {
        if coin.collected {
            continue;
        }
        if aabb_overlap(player_pos.0, player_size.0, coin_pos.0, coin_size.0) {
            coin.collected = true;
            stats.coins += 1;
            trace!(x = coin_pos.0.x, total = stats.coins, "Coin collected");
        }
    }
}
