//! Melee attack systems (ECS обвязка вокруг CombatController).

use bevy::prelude::*;

use crate::combat::{
    AttackOutcome, AttackTriggered, CombatController, DamageDealt, HealthDepleted, TargetSelected,
};
use crate::components::{Health, Player};

/// System: periodic cooldown re-evaluation (Attacking → Idle).
///
/// Работает каждый fixed tick, независимо от наличия сигналов.
pub fn clear_finished_attacks(
    mut controllers: Query<(Entity, &mut CombatController)>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for (entity, mut controller) in controllers.iter_mut() {
        // Не трогаем Idle контроллеры (change detection)
        if !controller.is_attacking() {
            continue;
        }

        if controller.tick(now) {
            crate::logger::log(&format!(
                "✅ ECS: Attack cooldown finished (entity: {:?}, t: {:.3}s)",
                entity, now
            ));
        }
    }
}

/// System: process targeting signals (TargetSelected → strike).
///
/// Для каждого сигнала и каждого `Player`:
/// - цель без `Health` или сам атакующий → отброшен (NoTarget)
/// - дальше `max_attack_range` → отброшен (OutOfRange)
/// - идёт cooldown → отброшен (OnCooldown)
/// - иначе удар: `take_damage`, разворот к цели, `AttackTriggered`, `DamageDealt`
///
/// Отброшенные сигналы не ошибки: только DEBUG лог.
pub fn process_targeting_signals(
    mut signals: EventReader<TargetSelected>,
    mut players: Query<(Entity, &mut CombatController, &mut Transform), With<Player>>,
    mut targets: Query<&mut Health>,
    time: Res<Time<Fixed>>,
    mut attack_events: EventWriter<AttackTriggered>,
    mut damage_events: EventWriter<DamageDealt>,
    mut depleted_events: EventWriter<HealthDepleted>,
) {
    let now = time.elapsed_secs();

    for signal in signals.read() {
        for (attacker, mut controller, mut transform) in players.iter_mut() {
            // Skip self-targeting
            let mut target = if signal.target == attacker {
                None
            } else {
                targets.get_mut(signal.target).ok()
            };
            let was_alive = target.as_ref().is_some_and(|health| health.is_alive());

            let outcome = controller.request_attack(
                &mut transform,
                target.as_deref_mut(),
                signal.target_position,
                now,
            );

            match outcome {
                AttackOutcome::Struck(strike) => {
                    let is_alive = target.as_ref().is_some_and(|health| health.is_alive());

                    crate::logger::log_info(&format!(
                        "⚔️ ECS: {:?} hit {:?} for {:.1} (distance: {:.2}m, target health: {:.0}%)",
                        attacker,
                        signal.target,
                        strike.damage,
                        strike.distance,
                        strike.target_health_fraction * 100.0
                    ));

                    attack_events.write(AttackTriggered {
                        attacker,
                        target: signal.target,
                        trigger: strike.trigger,
                        clip: controller.attack_animation().map(str::to_owned),
                    });

                    damage_events.write(DamageDealt {
                        attacker,
                        target: signal.target,
                        damage: strike.damage,
                        health_fraction: strike.target_health_fraction,
                    });

                    if was_alive && !is_alive {
                        depleted_events.write(HealthDepleted {
                            entity: signal.target,
                            killer: Some(attacker),
                        });

                        crate::logger::log_info(&format!(
                            "💀 ECS: {:?} health depleted (by {:?})",
                            signal.target, attacker
                        ));
                    }
                }
                AttackOutcome::NoTarget => {
                    crate::logger::log(&format!(
                        "ECS: Targeting signal dropped, {:?} is not damageable (attacker: {:?})",
                        signal.target, attacker
                    ));
                }
                AttackOutcome::OutOfRange { distance } => {
                    crate::logger::log(&format!(
                        "ECS: Targeting signal dropped, {:?} out of range ({:.2}m > {:.2}m)",
                        signal.target,
                        distance,
                        controller.config().max_attack_range
                    ));
                }
                AttackOutcome::OnCooldown => {
                    crate::logger::log(&format!(
                        "ECS: Targeting signal dropped, {:?} still attacking",
                        attacker
                    ));
                }
            }
        }
    }
}
