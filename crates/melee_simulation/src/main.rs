//! Headless симуляция ближнего боя
//!
//! Игрок в центре, манекены разбросаны вокруг (seeded). Autopilot выбирает
//! ближайшую цель каждый tick; cooldown и дистанция решают, будет ли удар.
//!
//! Usage: `melee_simulation [combat.toml]`

use bevy::prelude::*;
use melee_simulation::autopilot::scatter_positions;
use melee_simulation::*;

const DUMMY_COUNT: usize = 5;
const SCATTER_RADIUS: f32 = 3.0;
const TICKS: usize = 1200; // 20 sec при 60Hz

fn main() {
    let seed = 42;
    println!("Starting melee headless simulation (seed: {})", seed);

    let config = match std::env::args().nth(1) {
        Some(path) => match CombatConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("ERROR: {err}");
                std::process::exit(1);
            }
        },
        None => CombatConfig::default(),
    };

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, AutopilotPlugin));

    let positions = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        scatter_positions(&mut rng.rng, Vec3::ZERO, SCATTER_RADIUS, DUMMY_COUNT)
    };

    let player = spawn_player(&mut app.world_mut().commands(), config, Vec3::ZERO);
    let dummies: Vec<Entity> = positions
        .iter()
        .map(|&position| spawn_target(&mut app.world_mut().commands(), position, Health::new(50.0)))
        .collect();
    app.world_mut().flush();

    for tick in 0..TICKS {
        app.update();

        if tick % 120 == 0 {
            let attacking = app
                .world()
                .get::<CombatController>(player)
                .is_some_and(|controller| controller.is_attacking());
            println!("Tick {}: player attacking = {}", tick, attacking);
        }
    }

    for (dummy, position) in dummies.iter().zip(&positions) {
        if let Some(health) = app.world().get::<Health>(*dummy) {
            println!(
                "Dummy {:?} at {:.2}m: {:.0}/{:.0} HP",
                dummy,
                position.length(),
                health.current,
                health.max
            );
        }
    }

    println!("Simulation complete!");
}
