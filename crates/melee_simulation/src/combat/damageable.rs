//! Damageable — capability для всего, что может получать урон
//!
//! Реализуют: `Health` (цели в ECS), `CombatController` (собственное здоровье
//! атакующего). Контроллер держит цель только на время одного решения
//! (`&mut`), никакого владения.

/// Anything that can receive damage and report normalized health.
pub trait Damageable {
    /// Reduce health by `amount`, clamped into `[0, max]`.
    ///
    /// Never fails. A negative amount can raise health but never above max.
    fn take_damage(&mut self, amount: f32);

    /// `current / max`, always within `[0, 1]`.
    fn health_fraction(&self) -> f32;
}

/// Clamped health arithmetic shared by every implementer.
///
/// NaN оставляет здоровье без изменений (иначе clamp вернул бы NaN).
pub(crate) fn apply_clamped_damage(current: f32, max: f32, amount: f32) -> f32 {
    if amount.is_nan() {
        return current;
    }
    (current - amount).clamp(0.0, max)
}
