//! Scene controller: ties player, tank and levels into the tick sequence
//!
//! Every tick moves the player; every Nth tick the controller scans for a
//! collision, resolves the encounter, then advances the tank. Game over is
//! a cooperative signal carried in the last event, not a forced stop.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aquarium::{Aquarium, SetupError};
use super::collision::{first_collision, separate};
use super::creature::Species;
use super::player::Player;
use crate::consts::POWER_INCREMENT;
use crate::tuning::Tuning;

/// Discrete directional input: four directions plus neutral
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Neutral,
}

impl Direction {
    /// Unit vector in tank coordinates (y grows downward).
    pub fn as_vec(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
            Direction::Neutral => Vec2::ZERO,
        }
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest directional input; `None` keeps the current heading
    pub direction: Option<Direction>,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// Transient outcome value, read by the embedding application
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player overlapped a creature this tick
    Collision { target: u32, species: Species },
    /// Lives ran out; gameplay stops advancing
    GameOver { score: u64, culprit: Option<u32> },
}

#[derive(Debug, Clone)]
pub struct GameScene {
    pub player: Player,
    pub aquarium: Aquarium,
    tuning: Tuning,
    ticks: u64,
    phase: GamePhase,
    last_event: Option<GameEvent>,
}

impl GameScene {
    pub fn new(player: Player, aquarium: Aquarium, tuning: Tuning) -> Result<Self, SetupError> {
        if tuning.collision_interval == 0 {
            return Err(SetupError::ZeroCadence);
        }
        if tuning.power_milestone == Some(0) {
            return Err(SetupError::ZeroMilestone);
        }
        Ok(Self {
            player,
            aquarium,
            tuning,
            ticks: 0,
            phase: GamePhase::Playing,
            last_event: None,
        })
    }

    /// Advance one tick. After game over this is a no-op; the caller is
    /// expected to stop driving gameplay and present the terminal event.
    pub fn tick(&mut self, input: &TickInput) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.ticks += 1;

        if let Some(direction) = input.direction {
            let v = direction.as_vec();
            self.player.set_direction(v.x, v.y);
        }
        self.player.update(self.aquarium.bound());

        if self.ticks % self.tuning.collision_interval != 0 {
            return;
        }
        // Only the first overlap in container order is resolved per
        // throttled tick; simultaneous collisions wait for the next pass.
        if let Some(id) = first_collision(&self.player, &self.aquarium) {
            self.resolve(id);
        }
        if self.phase == GamePhase::Playing {
            self.aquarium.advance();
        }
    }

    /// Outcome priority: power-up, then damage, then eat.
    fn resolve(&mut self, id: u32) {
        let Some(target) = self.aquarium.get_by_id(id) else {
            return;
        };
        let species = target.species;
        let value = target.value;
        self.last_event = Some(GameEvent::Collision {
            target: id,
            species,
        });

        if species == Species::PowerUp {
            self.player.increase_power(POWER_INCREMENT);
            self.player.speed += self.tuning.powerup_speed_bonus;
            self.aquarium.remove(id);
            log::debug!("power-up collected, power now {}", self.player.power());
        } else if self.player.power() < value {
            if let Some(target) = self.aquarium.get_by_id_mut(id) {
                separate(&mut self.player, target, self.tuning.separation_push);
            }
            if self.player.take_damage(self.tuning.damage_debounce_ticks) {
                log::info!(
                    "hurt by a {} fish, {} lives left",
                    species.as_str(),
                    self.player.lives()
                );
            }
            if self.player.is_dead() {
                log::info!("game over at {} points", self.player.score());
                self.last_event = Some(GameEvent::GameOver {
                    score: self.player.score(),
                    culprit: Some(id),
                });
                self.phase = GamePhase::GameOver;
            }
        } else {
            let before = self.player.score();
            self.player.add_score(value);
            if let Some(step) = self.tuning.power_milestone {
                let step = u64::from(step);
                let crossed = self.player.score() / step - before / step;
                if crossed > 0 {
                    self.player.increase_power(crossed as u32);
                }
            }
            self.aquarium.remove(id);
        }
    }

    /// Window resize passthrough; keeps the player inside the new bound.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.aquarium.set_bounds(width, height);
        let bound = self.aquarium.bound();
        self.player.pos = self.player.pos.clamp(Vec2::ZERO, bound);
    }

    pub fn score(&self) -> u64 {
        self.player.score()
    }

    pub fn lives(&self) -> u8 {
        self.player.lives()
    }

    pub fn power(&self) -> u32 {
        self.player.power()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn last_event(&self) -> Option<&GameEvent> {
        self.last_event.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
