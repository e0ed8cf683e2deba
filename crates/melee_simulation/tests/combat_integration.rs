//! Combat integration test
//!
//! Полный headless App (MinimalPlugins + SimulationPlugin), ручное время:
//! один `app.update()` = один fixed tick (1/60 сек).
//!
//! Проверяем:
//! - удар в радиусе, отброс вне радиуса
//! - cooldown между ударами (по времени, без сигналов)
//! - Health инварианты на длинном прогоне с autopilot

use bevy::prelude::*;
use melee_simulation::*;

/// Ticks, которые точно покрывают cooldown 1 сек (61 tick + запас)
const COOLDOWN_TICKS: usize = 70;

/// Helper: создать полный combat App со всеми plugins
fn create_combat_app(seed: u64) -> App {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);
    // Первый update только запускает часы
    app.update();
    app
}

fn spawn(app: &mut App, config: CombatConfig, targets: &[(Vec3, Health)]) -> (Entity, Vec<Entity>) {
    let player = spawn_player(&mut app.world_mut().commands(), config, Vec3::ZERO);
    let targets = targets
        .iter()
        .map(|&(position, health)| spawn_target(&mut app.world_mut().commands(), position, health))
        .collect();
    app.world_mut().flush();
    (player, targets)
}

fn select(app: &mut App, target: Entity) {
    let target_position = app.world().get::<Transform>(target).unwrap().translation;
    app.world_mut().send_event(TargetSelected {
        target,
        target_position,
    });
}

fn health_of(app: &App, entity: Entity) -> f32 {
    app.world().get::<Health>(entity).unwrap().current
}

fn is_attacking(app: &App, player: Entity) -> bool {
    app.world()
        .get::<CombatController>(player)
        .unwrap()
        .is_attacking()
}

/// Test: три удара с паузами → 100 → 90 → 80 → 70
#[test]
fn test_three_strikes_with_cooldown() {
    let mut app = create_combat_app(42);
    let (player, targets) = spawn(
        &mut app,
        CombatConfig::default(),
        &[(Vec3::new(0.0, 0.0, -1.5), Health::new(100.0))],
    );
    let target = targets[0];

    let mut sequence = vec![health_of(&app, target)];
    for _ in 0..3 {
        select(&mut app, target);
        app.update();
        assert!(is_attacking(&app, player));
        sequence.push(health_of(&app, target));

        for _ in 0..COOLDOWN_TICKS {
            app.update();
        }
        assert!(!is_attacking(&app, player), "cooldown should expire without signals");
    }

    assert_eq!(sequence, vec![100.0, 90.0, 80.0, 70.0]);
}

/// Test: спам сигналами во время cooldown не даёт лишних ударов
#[test]
fn test_signal_spam_during_cooldown() {
    let mut app = create_combat_app(42);
    let (player, targets) = spawn(
        &mut app,
        CombatConfig::default(),
        &[(Vec3::new(1.0, 0.0, 0.0), Health::new(100.0))],
    );
    let target = targets[0];

    // ~0.5 сек: сигнал каждый tick
    for _ in 0..30 {
        select(&mut app, target);
        app.update();
    }

    assert_eq!(health_of(&app, target), 90.0);
    assert!(is_attacking(&app, player));

    // Ещё ~1 сек спама: ровно один дополнительный удар после cooldown
    for _ in 0..COOLDOWN_TICKS {
        select(&mut app, target);
        app.update();
    }
    assert_eq!(health_of(&app, target), 80.0);
}

/// Test: цель на 2.5м при дальности 2м
#[test]
fn test_out_of_range_target_untouched() {
    let mut app = create_combat_app(42);
    let (player, targets) = spawn(
        &mut app,
        CombatConfig::default(),
        &[(Vec3::new(2.5, 0.0, 0.0), Health::new(100.0))],
    );

    for _ in 0..10 {
        select(&mut app, targets[0]);
        app.update();
    }

    assert_eq!(health_of(&app, targets[0]), 100.0);
    assert!(!is_attacking(&app, player));
}

/// Test: последний удар по цели с 5 HP → 0, не отрицательное
#[test]
fn test_last_hit_clamps_to_zero() {
    let mut app = create_combat_app(42);
    let (_, targets) = spawn(
        &mut app,
        CombatConfig::default(),
        &[(Vec3::new(1.0, 0.0, 0.0), Health::with_current(100.0, 5.0))],
    );

    select(&mut app, targets[0]);
    app.update();

    assert_eq!(health_of(&app, targets[0]), 0.0);
    assert!(!app.world().get::<Health>(targets[0]).unwrap().is_alive());
}

/// Test: autopilot добивает ближнюю цель, дальнюю не трогает
#[test]
fn test_autopilot_run_keeps_invariants() {
    let mut app = create_combat_app(7);
    app.add_plugins(AutopilotPlugin);
    let (player, targets) = spawn(
        &mut app,
        CombatConfig::default(),
        &[
            (Vec3::new(1.0, 0.0, 0.0), Health::new(50.0)),
            (Vec3::new(0.0, 0.0, 5.0), Health::new(50.0)),
        ],
    );

    // 600 тиков = 10 сек, нужно 5 ударов
    for tick in 0..600 {
        app.update();

        let controller = app.world().get::<CombatController>(player).unwrap();
        assert!(
            (0.0..=controller.config().max_health).contains(&controller.current_health()),
            "Tick {}: player health invariant broken",
            tick
        );
        for &target in &targets {
            let health = app.world().get::<Health>(target).unwrap();
            assert!(
                health.current >= 0.0 && health.current <= health.max,
                "Tick {}: target {:?} health ({}) out of [0, {}]",
                tick,
                target,
                health.current,
                health.max
            );
        }
    }

    assert_eq!(health_of(&app, targets[0]), 0.0);
    assert_eq!(health_of(&app, targets[1]), 50.0);
}

/// Test: config из TOML доходит до контроллера
#[test]
fn test_config_from_toml_drives_strikes() {
    let config = CombatConfig::from_toml_str(
        r#"
        damage_per_hit = 35.0
        max_attack_range = 4.0
        "#,
    )
    .unwrap();

    let mut app = create_combat_app(42);
    let (_, targets) = spawn(
        &mut app,
        config,
        &[(Vec3::new(3.5, 0.0, 0.0), Health::new(100.0))],
    );

    select(&mut app, targets[0]);
    app.update();

    assert_eq!(health_of(&app, targets[0]), 65.0);
}
