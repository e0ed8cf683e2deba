//! Combat events (inbound targeting signal + outbound side effects)

use bevy::prelude::*;

/// Inbound: игрок выбрал цель (pointer/selection subsystem → ECS)
///
/// Сигнал не несёт attacker: его получают все `Player` с `CombatController`.
/// Entity без `Health` (или уже despawned) — невалидный сигнал, отбрасывается.
#[derive(Event, Debug, Clone, Copy)]
pub struct TargetSelected {
    pub target: Entity,
    /// World position цели в момент выбора (от неё считается дистанция)
    pub target_position: Vec3,
}

/// Outbound: атака состоялась, нужно проиграть анимацию
///
/// Потребитель — animation controller хоста. `trigger` всегда
/// [`ATTACK_TRIGGER`](crate::combat::ATTACK_TRIGGER), `clip` — override клипа
/// из экипированного оружия.
#[derive(Event, Debug, Clone)]
pub struct AttackTriggered {
    pub attacker: Entity,
    pub target: Entity,
    pub trigger: &'static str,
    pub clip: Option<String>,
}

/// Outbound: урон нанесен (UI, health bars, звуки)
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
    pub health_fraction: f32,
}

/// Outbound: здоровье цели дошло до 0
///
/// Death handling вне этого crate — только факт.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealthDepleted {
    pub entity: Entity,
    pub killer: Option<Entity>,
}
