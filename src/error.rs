use thiserror::Error;

/// Errors produced while parsing a `#rrggbb` / `#rgb` color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color string is empty")]
    Empty,

    #[error("color {0:?} must start with '#'")]
    MissingHash(String),

    #[error("color {0:?} must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("color {input:?} contains a non-hex digit {digit:?}")]
    BadDigit { input: String, digit: char },
}

/// Errors that can occur while loading or validating a session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid color in configuration: {0}")]
    Color(#[from] ColorError),

    #[error("Configuration offers no tools")]
    NoTools,

    #[error("Tool {0:?} is listed more than once")]
    DuplicateTool(crate::tools::ToolMode),

    #[error("Width {width} is outside 1..={max}")]
    WidthOutOfRange { width: u32, max: u32 },

    #[error("Invalid font limits: {0}")]
    FontLimits(String),

    #[error("{0}")]
    Inconsistent(&'static str),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
