//=========================================================================
// Level Configuration
//=========================================================================
//
// TOML-backed settings for a run. Every field has a default, so an empty
// file (or no file) yields the stock level.
//
//   win_rule = "simultaneous"      # or "sticky_arrival"
//   layout = "phase_obstacle"      # or "double_jump"
//
//   [abilities]                    # per-character overrides
//   sam = "phase_through"          # none | phase_through | double_jump
//
//   [physics]
//   gravity = 500.0
//
//   [engine]
//   tps = 60.0
//
//=========================================================================

//=== Standard Library ====================================================

use std::fs;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::level::{Ability, CharacterId, LayoutRevision, WinRule};

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value: {0}")]
    Invalid(String),
}

//=== Sections ============================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AbilityOverrides {
    pub sam: Option<Ability>,
    pub sadie: Option<Ability>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicsConfig {
    /// Downward acceleration, units/s².
    pub gravity: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 500.0,
            world_width: 800.0,
            world_height: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub tps: f64,
    pub channel_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }
}

//=== LevelConfig =========================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelConfig {
    pub win_rule: WinRule,
    pub layout: LayoutRevision,
    pub abilities: AbilityOverrides,
    pub physics: PhysicsConfig,
    pub engine: EngineConfig,
}

impl LevelConfig {
    /// Reads and validates a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.engine.tps.is_finite() || self.engine.tps <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "engine.tps must be positive, got {}",
                self.engine.tps
            )));
        }
        if self.engine.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "engine.channel_capacity must be positive".to_string(),
            ));
        }
        // Frame buffer needs at least one whole pixel per axis
        let (width, height) = (self.physics.world_width, self.physics.world_height);
        if !(width.is_finite() && height.is_finite() && width >= 1.0 && height >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "world size must be at least 1x1, got {}x{}",
                self.physics.world_width, self.physics.world_height
            )));
        }
        if !self.physics.gravity.is_finite() {
            return Err(ConfigError::Invalid("physics.gravity must be finite".to_string()));
        }
        Ok(())
    }

    /// Override if configured, otherwise the layout's default.
    pub fn ability(&self, id: CharacterId) -> Ability {
        let overridden = match id {
            CharacterId::Sam => self.abilities.sam,
            CharacterId::Sadie => self.abilities.sadie,
        };
        overridden.unwrap_or_else(|| self.layout.default_ability(id))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = LevelConfig::from_toml_str("").unwrap();
        assert_eq!(config, LevelConfig::default());
        assert_eq!(config.win_rule, WinRule::Simultaneous);
        assert_eq!(config.layout, LayoutRevision::PhaseObstacle);
        assert_eq!(config.engine.tps, 60.0);
        assert_eq!(config.physics.gravity, 500.0);
    }

    #[test]
    fn full_document_parses() {
        let config = LevelConfig::from_toml_str(
            r#"
            win_rule = "sticky_arrival"
            layout = "double_jump"

            [abilities]
            sam = "phase_through"

            [physics]
            gravity = 450.0

            [engine]
            tps = 120.0
            channel_capacity = 64
            "#,
        )
        .unwrap();

        assert_eq!(config.win_rule, WinRule::StickyArrival);
        assert_eq!(config.layout, LayoutRevision::DoubleJump);
        assert_eq!(config.abilities.sam, Some(Ability::PhaseThrough));
        assert_eq!(config.abilities.sadie, None);
        assert_eq!(config.physics.gravity, 450.0);
        assert_eq!(config.physics.world_width, 800.0);
        assert_eq!(config.engine.tps, 120.0);
        assert_eq!(config.engine.channel_capacity, 64);
    }

    #[test]
    fn abilities_fall_back_to_layout() {
        let config = LevelConfig::from_toml_str(
            r#"
            layout = "double_jump"
            [abilities]
            sam = "phase_through"
            "#,
        )
        .unwrap();

        assert_eq!(config.ability(CharacterId::Sam), Ability::PhaseThrough);
        assert_eq!(config.ability(CharacterId::Sadie), Ability::DoubleJump);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = LevelConfig::from_toml_str("wind = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = LevelConfig::from_toml_str(r#"win_rule = "first_past_the_post""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for doc in [
            "[engine]\ntps = 0.0",
            "[engine]\nchannel_capacity = 0",
            "[physics]\nworld_width = -1.0",
        ] {
            let err = LevelConfig::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{}", doc);
        }
    }

    #[test]
    fn non_finite_or_subpixel_sizes_are_rejected() {
        for doc in [
            "[physics]\nworld_width = nan",
            "[physics]\nworld_height = 0.5",
            "[physics]\nworld_width = inf",
            "[engine]\ntps = nan",
            "[engine]\ntps = inf",
        ] {
            let err = LevelConfig::from_toml_str(doc).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{}", doc);
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LevelConfig::load(Path::new("/nonexistent/level.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/level.toml"));
    }
}
