use std::path::Path;

use crate::error::ConfigError;

/// Board dimensions.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: u32,
    pub cols: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 3, cols: 3 }
    }
}

/// Post-game reset behavior.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ResetConfig {
    /// Seconds to wait after a game ends before the board clears.
    pub delay_secs: f32,
}

impl Default for ResetConfig {
    fn default() -> Self {
        ResetConfig { delay_secs: 5.0 }
    }
}

/// Win-scan parallelism.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub num_threads: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig { num_threads: 4 }
    }
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub reset: ResetConfig,
    pub scan: ScanConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows < 2 {
            return Err(ConfigError::Validation("board.rows must be >= 2".into()));
        }
        if self.board.cols < 2 {
            return Err(ConfigError::Validation("board.cols must be >= 2".into()));
        }
        if self.reset.delay_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "reset.delay_secs must be > 0".into(),
            ));
        }
        if self.scan.num_threads == 0 {
            return Err(ConfigError::Validation(
                "scan.num_threads must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
