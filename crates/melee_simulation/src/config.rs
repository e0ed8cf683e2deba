//! Combat configuration (загружается извне, неизменяема в runtime)
//!
//! Defaults совпадают со статами игрока из прототипа:
//! 100 HP, 10 урона за удар, 1 сек между ударами, 2м дистанция.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;

/// Errors that can occur while loading a [`CombatConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read combat config '{0}': {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse combat config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid combat config: `{field}` {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Weapon reference. Cosmetic only: the weapon never changes damage or range.
#[derive(Debug, Clone, PartialEq, Deserialize, Reflect)]
pub struct WeaponConfig {
    pub name: String,
    /// Animation clip played for the "Attack" trigger while this weapon is held.
    pub attack_animation: String,
}

/// Combat stats of a melee actor.
///
/// ```toml
/// max_health = 100.0
/// damage_per_hit = 10.0
/// min_time_between_hits = 1.0
/// max_attack_range = 2.0
///
/// [weapon]
/// name = "Sword"
/// attack_animation = "SwordSlash"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Reflect)]
#[serde(default)]
pub struct CombatConfig {
    /// Максимальное здоровье (> 0)
    pub max_health: f32,
    /// Урон одного удара (≥ 0)
    pub damage_per_hit: f32,
    /// Cooldown между успешными ударами, секунды (> 0)
    pub min_time_between_hits: f32,
    /// Дистанция атаки, метры (≥ 0). Граница включительно.
    pub max_attack_range: f32,
    pub weapon: Option<WeaponConfig>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            damage_per_hit: 10.0,
            min_time_between_hits: 1.0,
            max_attack_range: 2.0,
            weapon: None,
        }
    }
}

impl CombatConfig {
    /// Parse and validate a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&source)?;

        crate::logger::log_info(&format!(
            "Combat config loaded from {} (hp: {}, dmg: {}, cooldown: {}s, range: {}m)",
            path.display(),
            config.max_health,
            config.damage_per_hit,
            config.min_time_between_hits,
            config.max_attack_range
        ));

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_health.is_finite() && self.max_health > 0.0) {
            return Err(invalid("max_health", "must be a positive finite number"));
        }
        if !(self.damage_per_hit >= 0.0) {
            return Err(invalid("damage_per_hit", "must not be negative"));
        }
        if !(self.min_time_between_hits > 0.0) {
            return Err(invalid("min_time_between_hits", "must be positive"));
        }
        if !(self.max_attack_range >= 0.0) {
            return Err(invalid("max_attack_range", "must not be negative"));
        }
        Ok(())
    }

    pub fn with_weapon(mut self, name: impl Into<String>, attack_animation: impl Into<String>) -> Self {
        self.weapon = Some(WeaponConfig {
            name: name.into(),
            attack_animation: attack_animation.into(),
        });
        self
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
