//! Data-driven game balance
//!
//! Everything here defaults to the reference rules; the knobs exist so an
//! embedding application can rebalance without touching sim code. Values
//! round-trip through serde, so a balance file is just JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Collision detection/resolution runs every this many ticks
    pub collision_interval: u64,
    /// Damage cooldown in ticks after a losing encounter
    pub damage_debounce_ticks: u32,
    /// Separation impulse applied on a losing encounter
    pub separation_push: f32,
    /// Extra player speed per collected power-up
    pub powerup_speed_bonus: f32,
    /// When set, +1 power each time the score crosses a multiple of this.
    /// A rules variant kept from an older balance pass; off by default.
    pub power_milestone: Option<u32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            collision_interval: COLLISION_INTERVAL,
            damage_debounce_ticks: DAMAGE_DEBOUNCE_TICKS,
            separation_push: SEPARATION_PUSH,
            powerup_speed_bonus: POWERUP_SPEED_BONUS,
            power_milestone: None,
        }
    }
}
