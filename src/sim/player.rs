//! The player-controlled creature
//!
//! Movement is driven by the latest directional input; there is no AI.
//! Score, lives, power and the damage-debounce window live here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::creature::reflect;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Heading; unit length or zero
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Faces left when true
    pub flipped: bool,
    score: u64,
    lives: u8,
    power: u32,
    damage_debounce: u32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            dir: Vec2::ZERO,
            speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            flipped: false,
            score: 0,
            lives: PLAYER_LIVES,
            power: 1,
            damage_debounce: 0,
        }
    }

    /// Set the heading from raw input, normalized. The zero vector is
    /// legal and means "hold still".
    pub fn set_direction(&mut self, dx: f32, dy: f32) {
        self.dir = Vec2::new(dx, dy).normalize_or_zero();
        if self.dir.x != 0.0 {
            self.flipped = self.dir.x < 0.0;
        }
    }

    /// Per-tick update: wind the damage window down once, then move with
    /// the same boundary reflection rule as every other creature.
    pub fn update(&mut self, bound: Vec2) {
        if self.damage_debounce > 0 {
            self.damage_debounce -= 1;
        }
        self.pos += self.dir * self.speed;
        reflect(&mut self.pos, &mut self.dir, bound);
    }

    /// Weighted score credit for a consumed creature.
    pub fn add_score(&mut self, value: u32) {
        self.score += u64::from(value);
    }

    pub fn increase_power(&mut self, amount: u32) {
        self.power += amount;
    }

    /// Lose one life unless the damage window is still open, and start a
    /// fresh window. Returns whether a life was actually lost.
    pub fn take_damage(&mut self, debounce: u32) -> bool {
        if self.damage_debounce > 0 {
            return false;
        }
        self.lives = self.lives.saturating_sub(1);
        self.damage_debounce = debounce;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn damage_debounce(&self) -> u32 {
        self.damage_debounce
    }
}
