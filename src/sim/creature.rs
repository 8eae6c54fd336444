//! Creature entities and per-species movement policies
//!
//! Species behavior is dispatched through a single `advance` function keyed
//! on the `Species` tag; the set of variants is closed and there is no
//! trait-object layer.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::octant_direction;

/// Non-player species tag, also used for population accounting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Species {
    /// Baseline fish: fixed random heading, constant speed
    Generic,
    /// Slow heavyweight: half speed, big radius, high reward
    Large,
    /// Erratic speedster: double speed, random course changes
    Fast,
    /// Oscillates horizontally while drifting toward the floor
    ZigZag,
    /// Stationary collectible
    PowerUp,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Generic => "generic",
            Species::Large => "large",
            Species::Fast => "fast",
            Species::ZigZag => "zigzag",
            Species::PowerUp => "powerup",
        }
    }

    /// Collision radius
    pub fn radius(&self) -> f32 {
        match self {
            Species::Generic | Species::Fast | Species::ZigZag => GENERIC_RADIUS,
            Species::Large => LARGE_RADIUS,
            Species::PowerUp => POWERUP_RADIUS,
        }
    }

    /// Reward weight when consumed
    pub fn value(&self) -> u32 {
        match self {
            Species::Large => LARGE_VALUE,
            Species::PowerUp => 0,
            Species::Generic | Species::Fast | Species::ZigZag => GENERIC_VALUE,
        }
    }
}

/// Opaque handle into whatever sprite store the drawing layer keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteHandle(pub u32);

/// A non-player creature in the tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub species: Species,
    pub pos: Vec2,
    /// Heading; unit length or zero
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub value: u32,
    /// Faces left when true (sign of the horizontal heading)
    pub flipped: bool,
    /// Sprite slot for the drawing layer; opaque here
    pub sprite: Option<SpriteHandle>,
    /// Tick counter driving the zig-zag oscillation
    zig_ticks: u32,
}

impl Creature {
    /// Create a creature with a species-appropriate initial heading.
    pub fn spawn(id: u32, species: Species, pos: Vec2, speed: f32, rng: &mut impl Rng) -> Self {
        let dir = match species {
            Species::PowerUp => Vec2::ZERO,
            // The oscillation only needs a horizontal heading; the downward
            // drift lives in the movement policy, not the direction vector.
            Species::ZigZag => {
                let x = octant_direction(rng).x;
                Vec2::new(if x < 0.0 { -1.0 } else { 1.0 }, 0.0)
            }
            _ => octant_direction(rng),
        };
        Self {
            id,
            species,
            pos,
            dir,
            speed,
            radius: species.radius(),
            value: species.value(),
            flipped: dir.x < 0.0,
            sprite: None,
            zig_ticks: 0,
        }
    }

    /// Advance one tick, then apply the boundary reflection rule.
    pub fn advance(&mut self, bound: Vec2, rng: &mut impl Rng) {
        match self.species {
            Species::Generic => {
                self.pos += self.dir * self.speed;
            }
            Species::Large => {
                self.pos += self.dir * (self.speed * LARGE_SPEED_FACTOR);
            }
            Species::Fast => {
                self.pos += self.dir * (self.speed * FAST_SPEED_FACTOR);
                if rng.random_ratio(1, FAST_TURN_ODDS) {
                    self.dir = octant_direction(rng);
                }
            }
            Species::ZigZag => {
                self.zig_ticks += 1;
                if self.zig_ticks % ZIGZAG_FLIP_INTERVAL == 0 {
                    self.dir.x = -self.dir.x;
                }
                self.pos.x += self.dir.x * self.speed;
                self.pos.y += self.speed * ZIGZAG_DRIFT;
            }
            Species::PowerUp => {}
        }
        if self.species != Species::PowerUp {
            self.flipped = self.dir.x < 0.0;
        }
        reflect(&mut self.pos, &mut self.dir, bound);
    }
}

/// Boundary reflection: clamp the offending coordinate to `[0, bound]` and
/// invert the matching heading component.
pub fn reflect(pos: &mut Vec2, dir: &mut Vec2, bound: Vec2) {
    if pos.x < 0.0 {
        pos.x = 0.0;
        dir.x = -dir.x;
    } else if pos.x > bound.x {
        pos.x = bound.x;
        dir.x = -dir.x;
    }
    if pos.y < 0.0 {
        pos.y = 0.0;
        dir.y = -dir.y;
    } else if pos.y > bound.y {
        pos.y = bound.y;
        dir.y = -dir.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ALL_SPECIES: [Species; 5] = [
        Species::Generic,
        Species::Large,
        Species::Fast,
        Species::ZigZag,
        Species::PowerUp,
    ];

    #[test]
    fn test_powerup_is_stationary() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut c = Creature::spawn(1, Species::PowerUp, Vec2::new(100.0, 100.0), 12.0, &mut rng);
        for _ in 0..50 {
            c.advance(Vec2::new(500.0, 500.0), &mut rng);
        }
        assert_eq!(c.pos, Vec2::new(100.0, 100.0));
        assert_eq!(c.dir, Vec2::ZERO);
        assert_eq!(c.value, 0);
    }

    #[test]
    fn test_zero_heading_means_no_movement() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut c = Creature::spawn(1, Species::Generic, Vec2::new(50.0, 50.0), 10.0, &mut rng);
        c.dir = Vec2::ZERO;
        c.advance(Vec2::new(500.0, 500.0), &mut rng);
        assert_eq!(c.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_large_moves_at_half_speed() {
        let mut rng = Pcg32::seed_from_u64(3);
        let bound = Vec2::new(10_000.0, 10_000.0);
        let mut c = Creature::spawn(1, Species::Large, Vec2::new(5000.0, 5000.0), 10.0, &mut rng);
        c.dir = Vec2::new(1.0, 0.0);
        c.advance(bound, &mut rng);
        assert!((c.pos.x - 5005.0).abs() < 1e-4);
    }

    #[test]
    fn test_zigzag_reverses_every_flip_interval() {
        let mut rng = Pcg32::seed_from_u64(4);
        let bound = Vec2::new(100_000.0, 100_000.0);
        let mut c = Creature::spawn(1, Species::ZigZag, Vec2::new(50_000.0, 0.0), 2.0, &mut rng);
        let initial_x = c.dir.x;
        assert!(initial_x == 1.0 || initial_x == -1.0);
        for _ in 0..ZIGZAG_FLIP_INTERVAL {
            c.advance(bound, &mut rng);
        }
        assert_eq!(c.dir.x, -initial_x);
        for _ in 0..ZIGZAG_FLIP_INTERVAL {
            c.advance(bound, &mut rng);
        }
        assert_eq!(c.dir.x, initial_x);
    }

    #[test]
    fn test_zigzag_drifts_down_then_rides_the_floor() {
        let mut rng = Pcg32::seed_from_u64(5);
        let bound = Vec2::new(1000.0, 100.0);
        let mut c = Creature::spawn(1, Species::ZigZag, Vec2::new(500.0, 0.0), 10.0, &mut rng);
        c.advance(bound, &mut rng);
        assert!((c.pos.y - 6.0).abs() < 1e-4);
        for _ in 0..100 {
            c.advance(bound, &mut rng);
        }
        assert_eq!(c.pos.y, bound.y);
    }

    #[test]
    fn test_reflect_inverts_and_clamps() {
        let bound = Vec2::new(100.0, 100.0);
        let mut pos = Vec2::new(105.0, -3.0);
        let mut dir = Vec2::new(1.0, -1.0).normalize();
        reflect(&mut pos, &mut dir, bound);
        assert_eq!(pos, Vec2::new(100.0, 0.0));
        assert!(dir.x < 0.0);
        assert!(dir.y > 0.0);
    }

    #[test]
    fn test_flip_flag_tracks_heading() {
        let mut rng = Pcg32::seed_from_u64(6);
        let bound = Vec2::new(1000.0, 1000.0);
        let mut c = Creature::spawn(1, Species::Generic, Vec2::new(500.0, 500.0), 5.0, &mut rng);
        c.dir = Vec2::new(-1.0, 0.0);
        c.advance(bound, &mut rng);
        assert!(c.flipped);
        c.dir = Vec2::new(1.0, 0.0);
        c.advance(bound, &mut rng);
        assert!(!c.flipped);
    }

    proptest! {
        #[test]
        fn prop_positions_stay_in_bounds(seed in any::<u64>(), steps in 1usize..150) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let bound = Vec2::new(780.0, 580.0);
            for (i, species) in ALL_SPECIES.iter().enumerate() {
                let pos = Vec2::new(
                    rng.random_range(0.0..=bound.x),
                    rng.random_range(0.0..=bound.y),
                );
                let speed = rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX);
                let mut c = Creature::spawn(i as u32, *species, pos, speed, &mut rng);
                for _ in 0..steps {
                    c.advance(bound, &mut rng);
                    prop_assert!(c.pos.x >= 0.0 && c.pos.x <= bound.x);
                    prop_assert!(c.pos.y >= 0.0 && c.pos.y <= bound.y);
                }
            }
        }

        #[test]
        fn prop_heading_is_unit_or_zero(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for (i, species) in ALL_SPECIES.iter().enumerate() {
                let mut c = Creature::spawn(i as u32, *species, Vec2::new(400.0, 300.0), 5.0, &mut rng);
                for _ in 0..30 {
                    c.advance(Vec2::new(800.0, 600.0), &mut rng);
                    let len = c.dir.length();
                    prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-4);
                }
            }
        }
    }
}
