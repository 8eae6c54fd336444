//! Level progression and per-species population accounting
//!
//! A level is a list of species quotas plus a target score. Stages cycle:
//! completing one resets it for a later replay and hands play to the next
//! stage in the list.

use serde::{Deserialize, Serialize};

use super::creature::Species;

/// Per-species quota record within a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationNode {
    pub species: Species,
    /// Target live population
    pub quota: u32,
    /// Currently live population (at most `quota` outside a repopulation pass)
    pub alive: u32,
}

impl PopulationNode {
    pub fn new(species: Species, quota: u32) -> Self {
        Self {
            species,
            quota,
            alive: 0,
        }
    }
}

/// One stage of the progression cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub nodes: Vec<PopulationNode>,
    /// Score accumulated while this stage is active
    pub score: u32,
    /// The stage completes once `score` reaches this
    pub target_score: u32,
}

impl Level {
    pub fn new(nodes: Vec<PopulationNode>, target_score: u32) -> Self {
        Self {
            nodes,
            score: 0,
            target_score,
        }
    }

    /// Complete exactly when the accumulated score reaches the target.
    pub fn is_completed(&self) -> bool {
        self.score >= self.target_score
    }

    /// Zero the score and every live count so the stage can be replayed on
    /// the next cycle through the stage list.
    pub fn reset(&mut self) {
        self.score = 0;
        for node in &mut self.nodes {
            node.alive = 0;
        }
    }

    /// Compute the spawn batch that brings every species up to quota, and
    /// mark those slots live. Emits nothing when the tank is already full.
    pub fn repopulate(&mut self) -> Vec<Species> {
        let mut batch = Vec::new();
        for node in &mut self.nodes {
            for _ in node.alive..node.quota {
                batch.push(node.species);
            }
            node.alive = node.quota;
        }
        batch
    }

    /// Record a consumed creature: free one live slot and credit the
    /// reward. An untracked species or an already-empty node is a no-op,
    /// never an underflow.
    pub fn consume(&mut self, species: Species, value: u32) {
        let Some(node) = self.nodes.iter_mut().find(|n| n.species == species) else {
            return;
        };
        if node.alive == 0 {
            return;
        }
        node.alive -= 1;
        self.score += value;
    }
}

/// The five reference stages, in play order.
pub fn reference_levels() -> Vec<Level> {
    vec![
        Level::new(vec![PopulationNode::new(Species::Generic, 10)], 10),
        Level::new(vec![PopulationNode::new(Species::Fast, 12)], 15),
        Level::new(
            vec![
                PopulationNode::new(Species::ZigZag, 18),
                PopulationNode::new(Species::PowerUp, 2),
            ],
            20,
        ),
        Level::new(
            vec![
                PopulationNode::new(Species::Fast, 20),
                PopulationNode::new(Species::Large, 10),
                PopulationNode::new(Species::PowerUp, 1),
            ],
            30,
        ),
        Level::new(
            vec![
                PopulationNode::new(Species::ZigZag, 25),
                PopulationNode::new(Species::PowerUp, 2),
                PopulationNode::new(Species::Large, 5),
            ],
            40,
        ),
    ]
}
