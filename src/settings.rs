//! Game settings
//!
//! Defaults match the constants in `consts`. Loaded from LocalStorage on the
//! web and from an optional JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};
use crate::sim::BallEffect;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub play_width: f32,
    pub play_height: f32,

    // === Timing ===
    /// Scheduler period while the ball is in play
    pub tick_ms: u32,
    /// Pause after a lost life before the next serve
    pub life_lost_delay_ms: u32,

    // === Rules ===
    pub start_lives: i32,
    pub ball_start_speed: f32,
    /// Added to the ball speed on every level up
    pub ball_speed_increment: f32,
    /// Paddle travel per move event
    pub paddle_step: f32,

    // === Cosmetics ===
    pub effect: BallEffect,
    /// Seed for effect jitter
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_width: PLAY_WIDTH,
            play_height: PLAY_HEIGHT,

            tick_ms: TICK_MS,
            life_lost_delay_ms: LIFE_LOST_DELAY_MS,

            start_lives: START_LIVES,
            ball_start_speed: BALL_START_SPEED,
            ball_speed_increment: BALL_SPEED_INCREMENT,
            paddle_step: PADDLE_STEP,

            effect: BallEffect::Fire,
            seed: 0,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "brick_breaker_settings";

    /// Environment variable naming a JSON settings file (native only)
    pub const ENV_PATH: &'static str = "BRICK_BREAKER_SETTINGS";

    /// Parse and validate settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings that cannot describe a playable field
    pub fn validate(&self) -> Result<()> {
        let min_width = PADDLE_WIDTH.max(BRICK_WIDTH + 2.0 * BRICK_MARGIN);
        if self.play_width < min_width {
            return Err(GameError::InvalidSettings(format!(
                "play_width {} is narrower than {}",
                self.play_width, min_width
            )));
        }
        if self.play_height <= PADDLE_Y + PADDLE_HEIGHT {
            return Err(GameError::InvalidSettings(format!(
                "play_height {} leaves no room below the paddle",
                self.play_height
            )));
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidSettings("tick_ms must be positive".into()));
        }
        if self.start_lives < 0 {
            return Err(GameError::InvalidSettings(
                "start_lives must not be negative".into(),
            ));
        }
        if self.ball_start_speed <= 0.0 || self.ball_speed_increment < 0.0 {
            return Err(GameError::InvalidSettings(
                "ball speed must be positive and never decrease".into(),
            ));
        }
        if self.paddle_step <= 0.0 {
            return Err(GameError::InvalidSettings(
                "paddle_step must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GameError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load settings from the file named by `BRICK_BREAKER_SETTINGS`, or defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        let path = std::path::PathBuf::from(path);
        match Self::load_from_path(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} - falling back to default settings", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.start_lives, 3);
        assert_eq!(settings.tick_ms, 50);
        assert_eq!(settings.effect, BallEffect::Fire);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "effect": "snow", "start_lives": 5 }"#).unwrap();
        assert_eq!(settings.effect, BallEffect::Snow);
        assert_eq!(settings.start_lives, 5);
        assert_eq!(settings.play_width, PLAY_WIDTH);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            seed: 42,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        assert!(matches!(
            Settings::from_json(r#"{ "tick_ms": 0 }"#),
            Err(GameError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "play_width": 50.0 }"#),
            Err(GameError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "start_lives": -1 }"#),
            Err(GameError::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json("{ nope"),
            Err(GameError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = Settings::load_from_path(std::path::Path::new("/nonexistent/settings.json"));
        assert!(matches!(err, Err(GameError::Parse(_))));
    }
}
