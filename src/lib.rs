//! Tank Frenzy - an aquarium eat-or-be-eaten arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, level progression)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Local leaderboard

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;
use rand::Rng;

/// Game configuration constants
pub mod consts {
    /// Simulation rate the tick-denominated constants below assume
    pub const TICK_RATE: u32 = 60;

    /// Gap kept between the movement bound and the tank edge
    pub const TANK_MARGIN: f32 = 20.0;
    /// Collision detection/resolution cadence (every Nth tick)
    pub const COLLISION_INTERVAL: u64 = 5;
    /// Damage cooldown after a losing encounter (3 seconds)
    pub const DAMAGE_DEBOUNCE_TICKS: u32 = 3 * TICK_RATE;
    /// Symmetric push applied to un-stick overlapping bodies
    pub const SEPARATION_PUSH: f32 = 4.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 10.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_LIVES: u8 = 3;

    /// Species base attributes
    pub const GENERIC_RADIUS: f32 = 30.0;
    pub const GENERIC_VALUE: u32 = 1;
    pub const LARGE_RADIUS: f32 = 60.0;
    pub const LARGE_VALUE: u32 = 5;
    pub const POWERUP_RADIUS: f32 = 25.0;

    /// Speed multiplier for the large/slow variant
    pub const LARGE_SPEED_FACTOR: f32 = 0.5;
    /// Speed multiplier for the fast/erratic variant
    pub const FAST_SPEED_FACTOR: f32 = 2.0;
    /// The fast variant picks a new heading with probability 1-in-this per tick
    pub const FAST_TURN_ODDS: u32 = 10;
    /// Zig-zag reverses its horizontal heading every this many ticks
    pub const ZIGZAG_FLIP_INTERVAL: u32 = 20;
    /// Zig-zag downward drift as a fraction of its speed
    pub const ZIGZAG_DRIFT: f32 = 0.6;

    /// Spawn speed range (inclusive)
    pub const SPAWN_SPEED_MIN: f32 = 1.0;
    pub const SPAWN_SPEED_MAX: f32 = 25.0;

    /// Power gained per collected power-up
    pub const POWER_INCREMENT: u32 = 1;
    /// Player speed gained per collected power-up
    pub const POWERUP_SPEED_BONUS: f32 = 2.0;
}

/// Draw a direction from the 8-neighborhood (components in {-1, 0, 1}),
/// normalized. The all-zero draw stays zero instead of dividing by zero.
#[inline]
pub fn octant_direction(rng: &mut impl Rng) -> Vec2 {
    let dx = rng.random_range(-1..=1) as f32;
    let dy = rng.random_range(-1..=1) as f32;
    Vec2::new(dx, dy).normalize_or_zero()
}
