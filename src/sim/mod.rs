//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (one call, one step)
//! - Seeded RNG only
//! - Stable container order (creatures keep insertion order)
//! - No rendering or platform dependencies

pub mod aquarium;
pub mod collision;
pub mod creature;
pub mod level;
pub mod player;
pub mod scene;

pub use aquarium::{Aquarium, SetupError};
pub use collision::{circles_overlap, first_collision, separate};
pub use creature::{Creature, Species, SpriteHandle};
pub use level::{Level, PopulationNode, reference_levels};
pub use player::Player;
pub use scene::{Direction, GameEvent, GamePhase, GameScene, TickInput};
