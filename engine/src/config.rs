use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use crate::animator::{DEFAULT_AMPLITUDE_X, DEFAULT_AMPLITUDE_Y, Trajectory};
use crate::ui::UiOptions;

pub const DEFAULT_STEP_DELAY_MS: u64 = 30;
const MAX_STEP_DELAY_MS: u64 = 1_000;
const MAX_AMPLITUDE_X: u16 = 60;
const MAX_AMPLITUDE_Y: u16 = 20;

/// Contents of `~/.toss/config.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct TossConfig {
    pub app: Option<AppConfig>,
    pub animation: Option<AnimationConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Land coins without the sweep and open dialogs without effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

/// Coin animation tuning.
///
/// ```toml
/// [animation]
/// step_delay_ms = 30
/// amplitude_x = 12
/// amplitude_y = 4
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AnimationConfig {
    pub step_delay_ms: Option<u64>,
    /// Horizontal sweep radius, in cells.
    pub amplitude_x: Option<u16>,
    /// Vertical sweep radius, in cells.
    pub amplitude_y: Option<u16>,
}

/// Resolved animation parameters with defaults and clamps applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    pub step_delay: Duration,
    pub trajectory: Trajectory,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
            trajectory: Trajectory::default(),
        }
    }
}

impl AnimationConfig {
    #[must_use]
    pub fn resolve(&self) -> AnimationSettings {
        let delay_ms = self
            .step_delay_ms
            .unwrap_or(DEFAULT_STEP_DELAY_MS)
            .min(MAX_STEP_DELAY_MS);
        let amplitude_x = self
            .amplitude_x
            .unwrap_or(DEFAULT_AMPLITUDE_X)
            .min(MAX_AMPLITUDE_X);
        let amplitude_y = self
            .amplitude_y
            .unwrap_or(DEFAULT_AMPLITUDE_Y)
            .min(MAX_AMPLITUDE_Y);
        AnimationSettings {
            step_delay: Duration::from_millis(delay_ms),
            trajectory: Trajectory::new(amplitude_x, amplitude_y),
        }
    }
}

impl TossConfig {
    /// Load the config from its default location.
    ///
    /// A missing file (or an undeterminable home directory) is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn animation_settings(&self) -> AnimationSettings {
        self.animation
            .as_ref()
            .map(AnimationConfig::resolve)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".toss").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_empty_config() {
        let config: TossConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert!(config.animation.is_none());
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.animation_settings(), AnimationSettings::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
high_contrast = false
reduced_motion = true
";
        let config: TossConfig = toml::from_str(toml_str).unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(options.reduced_motion);
    }

    #[test]
    fn parse_animation_config() {
        let toml_str = r"
[animation]
step_delay_ms = 5
amplitude_x = 20
";
        let config: TossConfig = toml::from_str(toml_str).unwrap();
        let settings = config.animation_settings();
        assert_eq!(settings.step_delay, Duration::from_millis(5));
        assert_eq!(settings.trajectory.amplitude_x(), 20);
        assert_eq!(settings.trajectory.amplitude_y(), DEFAULT_AMPLITUDE_Y);
    }

    #[test]
    fn animation_values_are_clamped() {
        let config = AnimationConfig {
            step_delay_ms: Some(60_000),
            amplitude_x: Some(500),
            amplitude_y: Some(500),
        };
        let settings = config.resolve();
        assert_eq!(settings.step_delay, Duration::from_millis(MAX_STEP_DELAY_MS));
        assert_eq!(settings.trajectory.amplitude_x(), MAX_AMPLITUDE_X);
        assert_eq!(settings.trajectory.amplitude_y(), MAX_AMPLITUDE_Y);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: TossConfig = toml::from_str("[app]\n[animation]\n").unwrap();
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.animation_settings(), AnimationSettings::default());
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[animation]\nstep_delay_ms = 12").unwrap();
        let config = TossConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config.animation_settings().step_delay,
            Duration::from_millis(12)
        );
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[animation\nstep_delay_ms = ").unwrap();
        let err = TossConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
        assert!(err.to_string().starts_with("failed to parse config at"));
    }

    #[test]
    fn load_from_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = TossConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn config_path_lives_under_dot_toss() {
        if let Some(path) = config_path() {
            assert!(path.ends_with(".toss/config.toml"));
        }
    }
}
