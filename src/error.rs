use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Error for coordinate queries outside the grid.
///
/// Out-of-range lookups fail loudly; there is deliberately no fallback cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
pub struct BoundsError {
    pub row: i32,
    pub col: i32,
    pub rows: u32,
    pub cols: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.rows must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.rows must be >= 2"
        );
    }

    #[test]
    fn test_bounds_error_display() {
        let err = BoundsError {
            row: 5,
            col: -1,
            rows: 3,
            cols: 3,
        };
        assert_eq!(err.to_string(), "cell (5, -1) is outside the 3x3 grid");
    }
}
