//! Error types
//!
//! The simulation itself has no recoverable failures. Errors only come from
//! building things with bad parameters: bricks outside the colour palette,
//! or settings that cannot describe a playable field.

/// Construction and configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Brick hit count outside `1..=BRICK_MAX_HITS`
    InvalidHitCount(u8),
    /// Settings that fail validation
    InvalidSettings(String),
    /// Settings JSON that could not be parsed or read
    Parse(String),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHitCount(hits) => {
                write!(
                    f,
                    "Invalid brick hit count {} (expected 1..={})",
                    hits,
                    crate::consts::BRICK_MAX_HITS
                )
            }
            Self::InvalidSettings(msg) => write!(f, "Invalid settings: {}", msg),
            Self::Parse(msg) => write!(f, "Settings parse error: {}", msg),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
