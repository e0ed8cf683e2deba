//! ECS Components для игровых entity
//!
//! - actor: цели атак (Actor, Health)
//! - player: player control marker (Player)
//!
//! Сам CombatController живёт в `crate::combat` (он же Component).

pub mod actor;
pub mod player;

// Re-exports для удобного импорта
pub use actor::*;
pub use player::*;
