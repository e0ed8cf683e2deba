//! Autopilot — headless замена pointer subsystem
//!
//! В игре `TargetSelected` приходит от клика мышью. В headless прогонах
//! (demo binary, интеграционные тесты) этот модуль каждый tick выбирает
//! ближайшего живого актора для каждого игрока.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::{CombatController, CombatSystems, TargetSelected};
use crate::components::{Actor, Health, Player};

pub struct AutopilotPlugin;

impl Plugin for AutopilotPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, select_nearest_target.before(CombatSystems));
    }
}

/// System: emit `TargetSelected` for the nearest living actor of every player.
pub fn select_nearest_target(
    players: Query<&Transform, (With<Player>, With<CombatController>)>,
    targets: Query<(Entity, &Transform, &Health), (With<Actor>, Without<Player>)>,
    mut signals: EventWriter<TargetSelected>,
) {
    for player_transform in players.iter() {
        let origin = player_transform.translation;

        let nearest = targets
            .iter()
            .filter(|(_, _, health)| health.is_alive())
            .map(|(entity, transform, _)| (entity, transform.translation))
            .min_by(|(_, a), (_, b)| {
                a.distance_squared(origin).total_cmp(&b.distance_squared(origin))
            });

        if let Some((target, target_position)) = nearest {
            signals.write(TargetSelected {
                target,
                target_position,
            });
        }
    }
}

/// Random positions on the ground plane within `radius` of `center`.
pub fn scatter_positions(rng: &mut impl Rng, center: Vec3, radius: f32, count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let distance = rng.gen_range(0.0..=radius);
            center + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
        })
        .collect()
}
