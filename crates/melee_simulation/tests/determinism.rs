//! Тесты детерминизма
//!
//! Один seed → одинаковая расстановка манекенов и одинаковый исход боя

use bevy::prelude::*;
use melee_simulation::autopilot::scatter_positions;
use melee_simulation::{
    create_headless_app, spawn_player, spawn_target, world_snapshot, AutopilotPlugin,
    CombatConfig, DeterministicRng, Health, SimulationPlugin,
};

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 300;

    // Запускаем 3 раза — все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED, TICK_COUNT)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

/// Запускает бой с autopilot и возвращает snapshot здоровья целей
fn run_simulation(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, AutopilotPlugin));

    let positions = {
        let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
        scatter_positions(&mut rng.rng, Vec3::ZERO, 3.0, 8)
    };

    spawn_player(&mut app.world_mut().commands(), CombatConfig::default(), Vec3::ZERO);
    for position in positions {
        spawn_target(&mut app.world_mut().commands(), position, Health::new(30.0));
    }
    app.world_mut().flush();

    for _ in 0..tick_count {
        app.update();
    }

    world_snapshot::<Health>(app.world_mut())
}
