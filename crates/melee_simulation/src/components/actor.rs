//! Базовые компоненты акторов: Actor, Health

use bevy::prelude::*;

use crate::combat::damageable::{apply_clamped_damage, Damageable};

/// Актор (NPC, враг, тренировочный манекен) — цель для melee атак
///
/// Автоматически добавляет Health и Transform через Required Components.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Health, Transform)]
pub struct Actor {
    /// Stable ID фракции
    pub faction_id: u64,
}

/// Здоровье актора
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0) // Default 100 HP
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        debug_assert!(max > 0.0, "Health::new: max must be positive, got {max}");
        Self { current: max, max }
    }

    /// Health with an explicit starting value (clamped into `[0, max]`).
    pub fn with_current(max: f32, current: f32) -> Self {
        let mut health = Self::new(max);
        health.current = current.clamp(0.0, max);
        health
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }
}

impl Damageable for Health {
    fn take_damage(&mut self, amount: f32) {
        self.current = apply_clamped_damage(self.current, self.max, amount);
    }

    fn health_fraction(&self) -> f32 {
        self.current / self.max
    }
}
