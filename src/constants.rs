//! This module contains all the constants used in the game.

use std::ops::Range;
use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Default viewport size, in world units (one unit = one CSS pixel on the
/// overlay canvas). Hosts with a different canvas call `Game::set_viewport`.
pub const VIEWPORT_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Player kinematics. All rates are per tick; one tick is one frame.
pub mod mechanics {
    use glam::Vec2;

    /// Fixed respawn point, in world coordinates (top-left anchored).
    pub const SPAWN_POSITION: Vec2 = Vec2::new(150.0, 300.0);
    pub const PLAYER_SIZE: Vec2 = Vec2::new(32.0, 48.0);

    /// Horizontal displacement per tick while a direction is held.
    pub const RUN_SPEED: f32 = 5.0;
    /// Downward acceleration applied every tick, grounded or not.
    pub const GRAVITY: f32 = 0.8;
    /// Initial vertical velocity of a jump (negative is up).
    pub const JUMP_POWER: f32 = -16.0;
    /// Distance credit per tick of rightward movement.
    pub const DISTANCE_PER_TICK: f32 = 0.1;

    /// Depth of the landing band below a platform's top edge. A falling
    /// player whose feet are inside the band snaps to the top; anything
    /// deeper passes through, so very fast falls can tunnel.
    pub const LANDING_BAND: f32 = 30.0;

    /// Peak rise of a full jump, from v²/2g. Coin placement must stay
    /// inside this arc to remain reachable.
    pub const fn jump_apex_height() -> f32 {
        (JUMP_POWER * JUMP_POWER) / (2.0 * GRAVITY)
    }
}

/// Randomized platform synthesis parameters: each step draws a gap, a
/// height and a width, then optionally seeds coins around the new platform.
pub mod generation {
    use std::ops::Range;

    use glam::Vec2;

    /// Horizontal gap between the frontier and the next platform.
    pub const GAP: Range<f32> = 100.0..200.0;
    /// Top edge of a generated platform.
    pub const PLATFORM_Y: Range<f32> = 350.0..470.0;
    pub const PLATFORM_WIDTH: Range<f32> = 90.0..160.0;
    pub const PLATFORM_HEIGHT: f32 = 30.0;

    /// How far past the camera's right edge the world must always extend.
    pub const MARGIN: f32 = 500.0;
    /// Randomized steps run eagerly when a life starts.
    pub const PREGENERATED_STEPS: usize = 50;

    pub const COIN_SIZE: Vec2 = Vec2::new(20.0, 20.0);
    /// Chance of a coin centered above a new platform, one jump-arc high.
    pub const COIN_ABOVE_CHANCE: f64 = 0.5;
    pub const COIN_ABOVE_RISE: f32 = 50.0;
    /// Chance of a coin at the gap midpoint, only when the gap is wide
    /// enough to need a mid-air pickup.
    pub const COIN_BETWEEN_CHANCE: f64 = 0.3;
    pub const COIN_BETWEEN_MIN_GAP: f32 = 120.0;
    pub const COIN_BETWEEN_RISE: f32 = 60.0;
    /// The between-coin's base height is capped so it stays in the arc even
    /// above low platforms.
    pub const COIN_BETWEEN_BASE_CAP: f32 = 400.0;

    /// Coins scattered over the opening stretch when a life starts.
    pub const SCATTERED_COIN_COUNT: usize = 30;
    pub const SCATTERED_COIN_SPACING: f32 = 250.0;
    pub const SCATTERED_COIN_LEAD: f32 = 200.0;
    pub const SCATTERED_COIN_JITTER: f32 = 100.0;
    pub const SCATTERED_COIN_Y: Range<f32> = 200.0..400.0;
}

/// The deterministic opening layout: an extended ground strip and the four
/// labelled door platforms, always reachable without practice.
pub mod tutorial {
    use glam::Vec2;

    pub const GROUND_POSITION: Vec2 = Vec2::new(0.0, 550.0);
    pub const GROUND_SIZE: Vec2 = Vec2::new(600.0, 50.0);

    /// Top edge shared by all four door platforms.
    pub const DOOR_Y: f32 = 480.0;
    /// Frontier after the tutorial row; randomized generation continues
    /// from here.
    pub const FRONTIER: f32 = 1000.0;
}

/// Decorative cloud generation. Clouds never collide or interact.
pub mod clouds {
    pub const INITIAL_COUNT: usize = 15;
    /// Minimum clouds on screen or ahead of the camera.
    pub const POOL: usize = 20;
    pub const SPACING: f32 = 300.0;
    pub const JITTER: f32 = 150.0;
    pub const Y_BASE: f32 = 50.0;
    pub const Y_SPREAD: f32 = 100.0;
    pub const WIDTH_BASE: f32 = 100.0;
    pub const WIDTH_SPREAD: f32 = 40.0;
    pub const HEIGHT_BASE: f32 = 40.0;
    pub const HEIGHT_SPREAD: f32 = 20.0;
    /// Replacement clouds spawn up to this far past the viewport's right edge.
    pub const AHEAD_LEAD: f32 = 200.0;
}

pub mod interaction {
    /// Vertical tolerance between the player's feet and a door platform's
    /// top for an interact request to count as "standing on it".
    pub const DOOR_BAND: f32 = 10.0;
}

pub mod death {
    /// Distance below the viewport's bottom edge that counts as falling out
    /// of the world.
    pub const FALL_MARGIN: f32 = 100.0;
    /// Score credit per collected coin.
    pub const COIN_VALUE: f32 = 50.0;

    /// Fixed pool the death screen message is drawn from, uniformly.
    pub const MESSAGES: [&str; 8] = [
        "GAME OVER!\nYou fell into the void!",
        "OOPS!\nWatch your step!",
        "OH NO!\nGravity wins!",
        "YIKES!\nThat's a long fall!",
        "WHOOPS!\nBetter luck next jump!",
        "UH OH!\nThe abyss got you!",
        "DANG IT!\nSo close!",
        "OUCH!\nThat had to hurt!",
    ];
}

/// Per-kind culling margins for the frame snapshot handed to the render
/// collaborator; entities outside the viewport plus margin are omitted.
pub mod view {
    pub const PLATFORM_MARGIN: f32 = 100.0;
    pub const COIN_MARGIN: f32 = 50.0;
    pub const CLOUD_MARGIN: f32 = 100.0;
}

/// Returns true when `value` lies inside the half-open range.
pub fn in_range(range: &Range<f32>, value: f32) -> bool {
    value >= range.start && value < range.end
}
