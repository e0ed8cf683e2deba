//! Combat module: melee attack/cooldown state machine игрока
//!
//! ECS ответственность:
//! - Game state: CombatController (cooldown, собственное здоровье), Health целей
//! - Combat rules: range gate, cooldown gate, clamped damage
//! - Events: TargetSelected → AttackTriggered / DamageDealt / HealthDepleted
//!
//! Хост ответственность (вне crate):
//! - Pointer/raycast: превращает клик во `TargetSelected`
//! - Animation controller: слушает `AttackTriggered`
//! - Rendering: читает Transform после разворота к цели

use bevy::prelude::*;

pub mod controller;
pub mod damageable;
pub mod events;
pub mod systems;


// Re-export основных типов
pub use controller::{AttackOutcome, AttackState, CombatController, Strike, ATTACK_TRIGGER};
pub use damageable::Damageable;
pub use events::{AttackTriggered, DamageDealt, HealthDepleted, TargetSelected};
pub use systems::{clear_finished_attacks, process_targeting_signals};

/// System set всех combat систем (для ordering снаружи, например autopilot)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CombatSystems;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate.
///
/// Порядок выполнения:
/// 1. clear_finished_attacks — cooldown tick (Attacking → Idle)
/// 2. process_targeting_signals — TargetSelected → strike
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<TargetSelected>()
            .add_event::<AttackTriggered>()
            .add_event::<DamageDealt>()
            .add_event::<HealthDepleted>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (clear_finished_attacks, process_targeting_signals)
                .chain() // Последовательное выполнение
                .in_set(CombatSystems),
        );
    }
}
