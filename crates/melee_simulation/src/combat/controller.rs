//! CombatController — attack/cooldown/damage state machine игрока
//!
//! # Attack Flow
//!
//! ```text
//! TargetSelected (pointer subsystem)
//!   ↓
//! target resolved? ── no ──→ NoTarget (dropped)
//!   ↓
//! distance ≤ max_attack_range? ── no ──→ OutOfRange (dropped)
//!   ↓
//! Idle? ── no ──→ OnCooldown (dropped)
//!   ↓
//! take_damage + look_at + "Attack" trigger + last_hit_time = now → Attacking
//!   ↓
//! tick: now - last_hit_time > min_time_between_hits → Idle
//! ```
//!
//! Контроллер не знает про ECS queries: позиция актора приходит как
//! `&mut Transform`, цель как `&mut impl Damageable`. Bevy системы
//! (`combat::systems::attack`) только раздают ссылки и пишут события.

use bevy::prelude::*;

use crate::combat::damageable::{apply_clamped_damage, Damageable};
use crate::components::Health;
use crate::config::CombatConfig;

/// Animation trigger fired on every successful strike.
pub const ATTACK_TRIGGER: &str = "Attack";

/// Attack state (derived from `is_attacking`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Reflect)]
pub enum AttackState {
    Idle,
    Attacking,
}

/// Result of one targeting decision.
///
/// Only `Struck` changes anything. The other variants are the silent drops:
/// they exist for callers that want feedback, never as errors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttackOutcome {
    Struck(Strike),
    /// Signal without a resolvable Damageable target
    NoTarget,
    OutOfRange { distance: f32 },
    /// Previous strike still in its cooldown window
    OnCooldown,
}

impl AttackOutcome {
    pub fn is_struck(&self) -> bool {
        matches!(self, AttackOutcome::Struck(_))
    }
}

/// A successful strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Strike {
    pub damage: f32,
    pub distance: f32,
    /// Target health fraction right after the hit
    pub target_health_fraction: f32,
    /// Animation trigger to fire (always [`ATTACK_TRIGGER`])
    pub trigger: &'static str,
}

/// Melee combat controller of one actor.
///
/// Создаётся один раз при spawn актора и живёт вместе с ним.
/// Config неизменяем; `health` меняется только через `take_damage`,
/// `last_hit_time`/`is_attacking` только через `request_attack`/`tick`.
#[derive(Component, Clone, Debug, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct CombatController {
    config: CombatConfig,
    health: Health,
    /// `None` = ещё не было ни одного удара
    last_hit_time: Option<f32>,
    is_attacking: bool,
}

impl Default for CombatController {
    fn default() -> Self {
        Self::new(CombatConfig::default())
    }
}

impl CombatController {
    /// Create a controller at full health.
    ///
    /// The config is expected to be validated by whoever loaded it.
    pub fn new(config: CombatConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "CombatController::new: invalid config {config:?}"
        );

        Self {
            health: Health::new(config.max_health),
            config,
            last_hit_time: None,
            is_attacking: false,
        }
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn current_health(&self) -> f32 {
        self.health.current
    }

    pub fn is_attacking(&self) -> bool {
        self.is_attacking
    }

    pub fn state(&self) -> AttackState {
        if self.is_attacking {
            AttackState::Attacking
        } else {
            AttackState::Idle
        }
    }

    pub fn last_hit_time(&self) -> Option<f32> {
        self.last_hit_time
    }

    /// Animation clip of the equipped weapon, if any.
    pub fn attack_animation(&self) -> Option<&str> {
        self.config
            .weapon
            .as_ref()
            .map(|weapon| weapon.attack_animation.as_str())
    }

    /// Process one targeting signal.
    ///
    /// `actor` is the attacker's transform (distance origin, rotated to face the
    /// target on a strike). `target` is `None` when the signal did not resolve
    /// to anything damageable.
    pub fn request_attack<D: Damageable + ?Sized>(
        &mut self,
        actor: &mut Transform,
        target: Option<&mut D>,
        target_position: Vec3,
        now: f32,
    ) -> AttackOutcome {
        let Some(target) = target else {
            return AttackOutcome::NoTarget;
        };

        let distance = actor.translation.distance(target_position);
        if distance > self.config.max_attack_range {
            return AttackOutcome::OutOfRange { distance };
        }

        if self.is_attacking {
            return AttackOutcome::OnCooldown;
        }

        // Один атомарный шаг: урон → разворот → trigger → таймер
        self.is_attacking = true;
        target.take_damage(self.config.damage_per_hit);
        actor.look_at(target_position, Vec3::Y);
        self.last_hit_time = Some(now);

        AttackOutcome::Struck(Strike {
            damage: self.config.damage_per_hit,
            distance,
            target_health_fraction: target.health_fraction(),
            trigger: ATTACK_TRIGGER,
        })
    }

    /// Periodic re-evaluation of the cooldown.
    ///
    /// Must run every tick. Returns `true` on the `Attacking → Idle` transition.
    pub fn tick(&mut self, now: f32) -> bool {
        if !self.is_attacking {
            return false;
        }

        let Some(last_hit_time) = self.last_hit_time else {
            return false;
        };

        if now - last_hit_time > self.config.min_time_between_hits {
            self.is_attacking = false;
            return true;
        }

        false
    }
}

impl Damageable for CombatController {
    fn take_damage(&mut self, amount: f32) {
        self.health.current = apply_clamped_damage(self.health.current, self.health.max, amount);
    }

    fn health_fraction(&self) -> f32 {
        self.health.health_fraction()
    }
}
