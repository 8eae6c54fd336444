//! The tank: creature container and level-progression driver
//!
//! The aquarium is the single owner of every live creature and of the
//! stage list. Everything else refers to creatures by their stable `u32`
//! id, never by aliased ownership, so removal can't dangle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use thiserror::Error;

use super::creature::{Creature, Species};
use super::level::Level;
use crate::consts::*;

/// Construction-time misconfiguration, rejected eagerly at setup.
#[derive(Debug, Error, PartialEq)]
pub enum SetupError {
    #[error("level list is empty")]
    NoLevels,
    #[error("level {0} has a zero target score")]
    ZeroTargetScore(usize),
    #[error("tank bounds {width}x{height} do not clear the margin")]
    DegenerateBounds { width: f32, height: f32 },
    #[error("collision cadence must be nonzero")]
    ZeroCadence,
    #[error("power milestone must be nonzero when set")]
    ZeroMilestone,
}

#[derive(Debug, Clone)]
pub struct Aquarium {
    creatures: Vec<Creature>,
    pub(crate) levels: Vec<Level>,
    /// Monotonic stage counter; indexes `levels` modulo the stage count
    current: usize,
    width: f32,
    height: f32,
    rng: Pcg32,
    next_id: u32,
}

impl Aquarium {
    /// Build a tank over a stage list. Misconfiguration is rejected here
    /// rather than surfacing mid-game.
    pub fn new(width: f32, height: f32, levels: Vec<Level>, seed: u64) -> Result<Self, SetupError> {
        if levels.is_empty() {
            return Err(SetupError::NoLevels);
        }
        if let Some(i) = levels.iter().position(|l| l.target_score == 0) {
            return Err(SetupError::ZeroTargetScore(i));
        }
        if width <= TANK_MARGIN || height <= TANK_MARGIN {
            return Err(SetupError::DegenerateBounds { width, height });
        }
        Ok(Self {
            creatures: Vec::new(),
            levels,
            current: 0,
            width,
            height,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        })
    }

    /// Movement bound per axis (tank dimensions minus the margin).
    pub fn bound(&self) -> Vec2 {
        Vec2::new(self.width - TANK_MARGIN, self.height - TANK_MARGIN)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Update the tank bounds (window resize). Creatures left outside the
    /// new bound are clamped back in.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        let bound = self.bound();
        for c in &mut self.creatures {
            c.pos = c.pos.clamp(Vec2::ZERO, bound);
        }
    }

    /// Allocate a stable creature id.
    pub fn next_creature_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add(&mut self, creature: Creature) {
        self.creatures.push(creature);
    }

    /// Spawn a creature of the given species at a random in-bounds
    /// position with a randomized speed.
    pub fn spawn(&mut self, species: Species) {
        let bound = self.bound();
        let pos = Vec2::new(
            self.rng.random_range(0.0..=bound.x),
            self.rng.random_range(0.0..=bound.y),
        );
        let speed = self.rng.random_range(SPAWN_SPEED_MIN..=SPAWN_SPEED_MAX);
        let id = self.next_creature_id();
        let creature = Creature::spawn(id, species, pos, speed, &mut self.rng);
        self.add(creature);
    }

    /// Remove a creature by id. The current level's consumption accounting
    /// is notified before the creature leaves the live list. Unknown ids
    /// return `None`.
    pub fn remove(&mut self, id: u32) -> Option<Creature> {
        let idx = self.creatures.iter().position(|c| c.id == id)?;
        let (species, value) = {
            let c = &self.creatures[idx];
            (c.species, c.value)
        };
        let level = self.current % self.levels.len();
        self.levels[level].consume(species, value);
        Some(self.creatures.remove(idx))
    }

    pub fn clear(&mut self) {
        self.creatures.clear();
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// Positional lookup used by the collision scan; out of range is `None`.
    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn get_by_id(&self, id: u32) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: u32) -> Option<&mut Creature> {
        self.creatures.iter_mut().find(|c| c.id == id)
    }

    /// Creatures in container (insertion) order.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.creatures.iter()
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current % self.levels.len()]
    }

    pub fn current_level_index(&self) -> usize {
        self.current % self.levels.len()
    }

    /// Stages completed so far, across cycles.
    pub fn stages_cleared(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Advance the tank one tick: move every creature, then run the
    /// repopulation pass. Movement never mutates the creature list, so
    /// the iteration is removal-safe by construction.
    pub fn advance(&mut self) {
        let bound = self.bound();
        for c in self.creatures.iter_mut() {
            c.advance(bound, &mut self.rng);
        }
        self.repopulate();
    }

    /// Swap stages when the current level completes, otherwise top every
    /// species up to quota.
    fn repopulate(&mut self) {
        let idx = self.current % self.levels.len();
        if self.levels[idx].is_completed() {
            log::info!(
                "level {} complete at {} points, moving on",
                idx,
                self.levels[idx].score
            );
            self.levels[idx].reset();
            self.current += 1;
            self.clear();
            return;
        }
        let batch = self.levels[idx].repopulate();
        if !batch.is_empty() {
            log::debug!("spawning {} creatures for level {}", batch.len(), idx);
        }
        for species in batch {
            self.spawn(species);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::{PopulationNode, reference_levels};

    fn small_levels() -> Vec<Level> {
        vec![
            Level::new(vec![PopulationNode::new(Species::Generic, 3)], 3),
            Level::new(vec![PopulationNode::new(Species::Large, 2)], 10),
        ]
    }

    #[test]
    fn test_empty_level_list_is_rejected() {
        let err = Aquarium::new(800.0, 600.0, Vec::new(), 1).unwrap_err();
        assert_eq!(err, SetupError::NoLevels);
    }

    #[test]
    fn test_zero_target_score_is_rejected() {
        let levels = vec![Level::new(vec![], 0)];
        let err = Aquarium::new(800.0, 600.0, levels, 1).unwrap_err();
        assert_eq!(err, SetupError::ZeroTargetScore(0));
    }

    #[test]
    fn test_degenerate_bounds_are_rejected() {
        let err = Aquarium::new(10.0, 600.0, small_levels(), 1).unwrap_err();
        assert!(matches!(err, SetupError::DegenerateBounds { .. }));
    }

    #[test]
    fn test_spawn_places_creatures_in_bounds() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        for _ in 0..50 {
            aq.spawn(Species::Fast);
        }
        let bound = aq.bound();
        for c in aq.creatures() {
            assert!(c.pos.x >= 0.0 && c.pos.x <= bound.x);
            assert!(c.pos.y >= 0.0 && c.pos.y <= bound.y);
            assert!(c.speed >= SPAWN_SPEED_MIN && c.speed <= SPAWN_SPEED_MAX);
        }
    }

    #[test]
    fn test_advance_fills_quotas() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        aq.advance();
        assert_eq!(aq.len(), 3);
        assert_eq!(aq.current_level().nodes[0].alive, 3);
        // Full tank: a second pass spawns nothing.
        aq.advance();
        assert_eq!(aq.len(), 3);
    }

    #[test]
    fn test_remove_notifies_consumption_accounting() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        aq.advance();
        let id = aq.get(0).map(|c| c.id).unwrap();
        let eaten = aq.remove(id).unwrap();
        assert_eq!(eaten.species, Species::Generic);
        assert_eq!(aq.current_level().nodes[0].alive, 2);
        assert_eq!(aq.current_level().score, 1);
        // A second removal of the same id is a no-op.
        assert!(aq.remove(id).is_none());
        assert_eq!(aq.current_level().score, 1);
    }

    #[test]
    fn test_out_of_range_lookup_is_none() {
        let aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        assert!(aq.get(0).is_none());
        assert!(aq.get_by_id(99).is_none());
    }

    #[test]
    fn test_completion_resets_clears_and_advances() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        aq.advance();
        // Eat the whole first stage (3 generics at value 1, target 3).
        let ids: Vec<u32> = aq.creatures().map(|c| c.id).collect();
        for id in ids {
            aq.remove(id);
        }
        assert!(aq.current_level().is_completed());
        aq.advance();
        assert_eq!(aq.current_level_index(), 1);
        assert_eq!(aq.stages_cleared(), 1);
        // The finished stage was reset for its next cycle.
        assert_eq!(aq.levels[0].score, 0);
        assert_eq!(aq.levels[0].nodes[0].alive, 0);
        // The tank was emptied; the next advance populates stage 1.
        assert!(aq.is_empty());
        aq.advance();
        assert_eq!(aq.len(), 2);
        assert!(aq.creatures().all(|c| c.species == Species::Large));
    }

    #[test]
    fn test_stage_index_wraps_modulo_stage_count() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        aq.levels[0].score = 3;
        aq.advance();
        assert_eq!(aq.current_level_index(), 1);
        aq.levels[1].score = 10;
        aq.advance();
        assert_eq!(aq.current_level_index(), 0);
        assert_eq!(aq.stages_cleared(), 2);
    }

    #[test]
    fn test_resize_clamps_existing_creatures() {
        let mut aq = Aquarium::new(800.0, 600.0, small_levels(), 42).unwrap();
        aq.advance();
        aq.set_bounds(200.0, 150.0);
        let bound = aq.bound();
        for c in aq.creatures() {
            assert!(c.pos.x <= bound.x && c.pos.y <= bound.y);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let mut a = Aquarium::new(800.0, 600.0, reference_levels(), 7).unwrap();
        let mut b = Aquarium::new(800.0, 600.0, reference_levels(), 7).unwrap();
        for _ in 0..100 {
            a.advance();
            b.advance();
        }
        assert_eq!(a.len(), b.len());
        for (ca, cb) in a.creatures().zip(b.creatures()) {
            assert_eq!(ca.id, cb.id);
            assert_eq!(ca.pos, cb.pos);
        }
    }
}
