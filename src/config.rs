use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ui::text::Locale;

/// Longest reveal pause accepted from a config file.
const MAX_REVEAL_DELAY_MS: u64 = 10_000;

/// Game rules and defaults.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Name used when the first player leaves the welcome field blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player1_name: Option<String>,
    /// Name used when the second player leaves the welcome field blank
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2_name: Option<String>,
    /// Pause between the scale tilting and the result being shown
    pub reveal_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player1_name: None,
            player2_name: None,
            reveal_delay_ms: 1_000,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub locale: Locale,
    /// How long the event loop waits for a key before ticking
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            locale: Locale::default(),
            tick_rate_ms: 100,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; nothing is logged when unset since the terminal is taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "game.reveal_delay_ms must be <= {MAX_REVEAL_DELAY_MS}"
            )));
        }
        for (key, name) in [
            ("game.player1_name", &self.game.player1_name),
            ("game.player2_name", &self.game.player2_name),
        ] {
            if name.as_deref().is_some_and(|n| n.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "{key} must not be blank"
                )));
            }
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.tick_rate_ms must be > 0".into(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
