//! Melee Simulation Core
//!
//! ECS-симуляция ближнего боя игрока на Bevy 0.16 (headless)
//!
//! HYBRID ARCHITECTURE:
//! - ECS = правила боя (cooldown, дистанция, урон, здоровье)
//! - Хост = pointer/raycast, анимации, рендер (через события)

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod autopilot;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;

// Re-export базовых типов для удобства
pub use autopilot::{AutopilotPlugin, select_nearest_target};
pub use combat::{
    AttackOutcome, AttackState, AttackTriggered, CombatController, CombatPlugin, CombatSystems,
    DamageDealt, Damageable, HealthDepleted, Strike, TargetSelected, ATTACK_TRIGGER,
};
pub use components::*;
pub use config::{CombatConfig, ConfigError, WeaponConfig};

/// Частота simulation tick (FixedUpdate)
pub const SIMULATION_HZ: f64 = 60.0;

/// Длительность одного fixed tick
pub fn fixed_timestep() -> Duration {
    Duration::from_secs_f64(1.0 / SIMULATION_HZ)
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed из create_headless_app не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(Time::<Fixed>::from_duration(fixed_timestep()))
            .add_plugins(CombatPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время ручное: каждый `app.update()` = ровно один fixed tick
/// (кроме самого первого, он только запускает часы).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_duration(fixed_timestep()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(fixed_timestep()));

    app
}

/// Spawn player-controlled melee actor
pub fn spawn_player(commands: &mut Commands, config: CombatConfig, position: Vec3) -> Entity {
    commands
        .spawn((
            Player,
            CombatController::new(config),
            Transform::from_translation(position),
        ))
        .id()
}

/// Spawn actor-цель (тренировочный манекен, враг)
pub fn spawn_target(commands: &mut Commands, position: Vec3, health: Health) -> Entity {
    commands
        .spawn((
            Actor::default(),
            health,
            Transform::from_translation(position),
        ))
        .id()
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
