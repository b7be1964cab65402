//! Runtime and presentation settings
//!
//! Loaded once at startup from an optional JSON file and handed to the host
//! loop and presenter. Nothing here is global.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TARGET_FPS;
use crate::renderer::Rgb;
use crate::tuning::{Tuning, TuningError};

/// Environment variable naming the settings file
pub const SETTINGS_ENV_VAR: &str = "FLAPPY_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
    #[error("target_fps must be between 1 and 1000 (got {0})")]
    TargetFps(u32),
}

/// Colors used by the scene painter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub sky_top: Rgb,
    pub sky_bottom: Rgb,
    pub cloud: Rgb,
    pub pipe: Rgb,
    pub pipe_dark: Rgb,
    pub bird_body: Rgb,
    pub bird_beak: Rgb,
    pub bird_eye: Rgb,
    pub eye_white: Rgb,
    pub ground: Rgb,
    pub ground_line: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky_top: Rgb(135, 206, 250),
            sky_bottom: Rgb(70, 130, 180),
            cloud: Rgb(255, 255, 255),
            pipe: Rgb(60, 180, 75),
            pipe_dark: Rgb(30, 90, 40),
            bird_body: Rgb(255, 200, 0),
            bird_beak: Rgb(255, 140, 0),
            bird_eye: Rgb(0, 0, 0),
            eye_white: Rgb(255, 255, 255),
            ground: Rgb(139, 69, 19),
            ground_line: Rgb(160, 82, 45),
            text: Rgb(0, 0, 0),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames (and ticks) per second
    pub target_fps: u32,
    /// Fixed RNG seed; random per launch when absent
    pub seed: Option<u64>,
    pub palette: Palette,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            seed: None,
            palette: Palette::default(),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `FLAPPY_SETTINGS`, or use defaults
    pub fn from_env() -> Result<Self, SettingsError> {
        match std::env::var_os(SETTINGS_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            Some(_) => {
                log::warn!("{} is set but empty; using default settings", SETTINGS_ENV_VAR);
                Ok(Self::default())
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=1000).contains(&self.target_fps) {
            return Err(SettingsError::TargetFps(self.target_fps));
        }
        self.tuning.validate()?;
        Ok(())
    }

    /// Wall time available to one frame
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_from_json_overrides_nested_fields() {
        let settings = Settings::from_json(
            r#"{ "seed": 7, "palette": { "pipe": [1, 2, 3] }, "tuning": { "gravity": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.palette.pipe, Rgb(1, 2, 3));
        assert_eq!(settings.palette.ground, Palette::default().ground);
        assert_eq!(settings.tuning.gravity, 0.5);
        assert_eq!(settings.target_fps, TARGET_FPS);
    }

    #[test]
    fn test_impossible_gap_is_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "pipe_gap": 450.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Tuning(TuningError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_overflowing_float_is_rejected() {
        // 1e39 does not fit in an f32 and parses as infinity
        let err = Settings::from_json(r#"{ "tuning": { "field_width": 1e39 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Tuning(TuningError::NotFinite {
                name: "field_width",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        let err = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::TargetFps(0)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            Settings::from_json("{ nope"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load(Path::new("/nonexistent/flappy.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
