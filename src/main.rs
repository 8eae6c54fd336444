//! Tank Frenzy entry point
//!
//! Headless driver: runs the reference tank with a simple chase policy
//! standing in for a human player and reports how the run went.
//!
//! Usage: tank-frenzy [seed] [ticks]

use glam::Vec2;

use tank_frenzy::Tuning;
use tank_frenzy::sim::{
    Aquarium, Direction, GameEvent, GamePhase, GameScene, Player, Species, TickInput,
    reference_levels,
};

/// Pick the input a greedy player would give: head for the best target the
/// player can eat (or any power-up), flee whatever outclasses it.
fn chase_policy(scene: &GameScene) -> Option<Direction> {
    let player = &scene.player;

    let edible = scene
        .aquarium
        .creatures()
        .filter(|c| c.species == Species::PowerUp || c.value <= player.power())
        .min_by(|a, b| {
            let da = a.pos.distance_squared(player.pos);
            let db = b.pos.distance_squared(player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });

    let heading = if let Some(target) = edible {
        target.pos - player.pos
    } else {
        // Nothing on the menu: keep away from the nearest threat.
        let threat = scene.aquarium.creatures().min_by(|a, b| {
            let da = a.pos.distance_squared(player.pos);
            let db = b.pos.distance_squared(player.pos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })?;
        player.pos - threat.pos
    };

    // Collapse to the dominant axis; input is four-way.
    let direction = if heading.x.abs() >= heading.y.abs() {
        if heading.x < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    } else if heading.y < 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(direction)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(36_000);

    let width = 1024.0;
    let height = 768.0;

    let aquarium = match Aquarium::new(width, height, reference_levels(), seed) {
        Ok(aq) => aq,
        Err(err) => {
            log::error!("bad setup: {err}");
            std::process::exit(1);
        }
    };
    let player = Player::new(Vec2::new(width / 2.0, height / 2.0));
    let mut scene = match GameScene::new(player, aquarium, Tuning::default()) {
        Ok(scene) => scene,
        Err(err) => {
            log::error!("bad setup: {err}");
            std::process::exit(1);
        }
    };

    log::info!("running seed {seed} for up to {max_ticks} ticks");

    let mut last_stage = 0;
    while scene.ticks() < max_ticks && scene.phase() == GamePhase::Playing {
        let input = TickInput {
            direction: chase_policy(&scene),
        };
        scene.tick(&input);

        let cleared = scene.aquarium.stages_cleared();
        if cleared != last_stage {
            last_stage = cleared;
            log::info!(
                "stage {} starts at tick {} (score {})",
                scene.aquarium.current_level_index(),
                scene.ticks(),
                scene.score()
            );
        }
    }

    let outcome = match scene.last_event() {
        Some(GameEvent::GameOver { .. }) => "game over",
        _ => "tick limit reached",
    };
    println!(
        "{outcome}: score {} | power {} | lives {} | level {} | stages cleared {} | ticks {}",
        scene.score(),
        scene.power(),
        scene.lives(),
        scene.aquarium.current_level_index(),
        scene.aquarium.stages_cleared(),
        scene.ticks()
    );
}
