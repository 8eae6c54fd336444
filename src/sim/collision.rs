//! Collision detection between the player and the tank population
//!
//! Plain circle overlap on squared distances. The scan is O(n) in
//! container order and runs on the throttled cadence, not every tick, so
//! no spatial index is warranted at tank scale.

use glam::Vec2;

use super::aquarium::Aquarium;
use super::creature::Creature;
use super::player::Player;

/// Circle overlap test; strict, so exact tangency does not collide.
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) < reach * reach
}

/// First creature (in container order) overlapping the player, if any.
pub fn first_collision(player: &Player, aquarium: &Aquarium) -> Option<u32> {
    aquarium
        .creatures()
        .find(|c| circles_overlap(player.pos, player.radius, c.pos, c.radius))
        .map(|c| c.id)
}

/// Push the two bodies apart symmetrically along their center line so a
/// losing encounter doesn't lock them in permanent overlap. Coincident
/// centers fall back to the +x axis.
pub fn separate(player: &mut Player, target: &mut Creature, push: f32) {
    let delta = player.pos - target.pos;
    let axis = if delta.length_squared() == 0.0 {
        Vec2::X
    } else {
        delta.normalize()
    };
    player.pos += axis * push;
    target.pos -= axis * push;
}
