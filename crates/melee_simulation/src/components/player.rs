//! Player control marker component
//!
//! Отмечает entity, которым управляет игрок (получает TargetSelected от input).

use bevy::prelude::Component;

/// Marker component для player-controlled entity
///
/// `process_targeting_signals` применяет `TargetSelected` только к акторам
/// с этим компонентом и `CombatController`.
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент:
/// сигнал выбора цели не несёт attacker, его получают все `Player`.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
