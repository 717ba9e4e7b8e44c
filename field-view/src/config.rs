//! Viewer configuration.
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FIELD_SECTION__KEY`)

use field_core::config::{FieldTuning, RevealTuning, TrailTuning};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window configuration.
    pub window: WindowConfig,
    /// Particle field tuning.
    pub field: FieldTuning,
    /// Cursor trail tuning.
    pub trail: TrailTuning,
    /// Scroll-reveal tuning.
    pub reveal: RevealTuning,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            field: FieldTuning::default(),
            trail: TrailTuning::default(),
            reveal: RevealTuning::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default locations.
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FIELD_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory.
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything:
        // FIELD_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("FIELD_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Particle Field".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Configuration error.
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_the_reference_tuning() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.particle_count, 60);
        assert_eq!(config.trail.cursor_smoothing, 0.15);
        assert_eq!(config.reveal.visible_ratio, 0.2);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("particle_count"));
        assert!(toml.contains("visible_ratio"));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults_per_field() {
        let figment = Figment::new().merge(Toml::string(
            r#"
            [field]
            particle_count = 10

            [window]
            title = "Test"
            "#,
        ));

        let config: AppConfig = figment.extract().unwrap();
        assert_eq!(config.field.particle_count, 10);
        assert_eq!(config.window.title, "Test");
        // Everything not mentioned keeps its default.
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.field.link_distance, 120.0);
        assert_eq!(config.trail.halo_smoothing, 0.08);
    }

    #[test]
    fn missing_config_dir_yields_defaults() {
        let config = AppConfig::load_from("definitely/not/a/config/dir").unwrap();
        assert_eq!(config.field.particle_count, 60);
    }
}
