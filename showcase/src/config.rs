//! Presentation settings loaded from `config.toml`.
//!
//! Every field is optional; a missing file yields the defaults. Nothing here
//! is written back, so application state still resets on every start.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use tuimotion::{Easing, TransitionConfig};

use crate::error::{Error, Result};
use crate::scale::Scale;

const MIN_FRAME_RATE: u32 = 1;
const MAX_FRAME_RATE: u32 = 240;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub frame_rate: u32,
    pub reduced_motion: bool,
    pub log_level: String,
    pub animation: AnimationConfig,
    pub scale: Scale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            reduced_motion: false,
            log_level: "info".to_string(),
            animation: AnimationConfig::default(),
            scale: Scale::default(),
        }
    }
}

/// Per-animator durations and a shared easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    pub visibility_ms: u64,
    pub alpha_ms: u64,
    pub size_ms: u64,
    pub padding_ms: u64,
    #[serde(deserialize_with = "deserialize_easing")]
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            visibility_ms: 300,
            alpha_ms: 300,
            size_ms: 300,
            padding_ms: 300,
            easing: Easing::EaseOut,
        }
    }
}

impl AnimationConfig {
    pub fn visibility(&self) -> TransitionConfig {
        TransitionConfig::millis(self.visibility_ms, self.easing)
    }

    pub fn alpha(&self) -> TransitionConfig {
        TransitionConfig::millis(self.alpha_ms, self.easing)
    }

    pub fn size(&self) -> TransitionConfig {
        TransitionConfig::millis(self.size_ms, self.easing)
    }

    pub fn padding(&self) -> TransitionConfig {
        TransitionConfig::millis(self.padding_ms, self.easing)
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn deserialize_easing<'de, D>(deserializer: D) -> std::result::Result<Easing, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl Config {
    /// Load from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        config.validated()
    }

    /// Parse from TOML text, applying the same validation as [`Config::load`].
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: "<inline>".into(),
            source: Box::new(source),
        })?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self> {
        self.frame_rate = self.frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE);

        if !is_positive(self.scale.dp_per_column) {
            return Err(Error::ConfigValue {
                key: "scale.dp_per_column",
                reason: format!("must be positive, got {}", self.scale.dp_per_column),
            });
        }
        if !is_positive(self.scale.dp_per_row) {
            return Err(Error::ConfigValue {
                key: "scale.dp_per_row",
                reason: format!("must be positive, got {}", self.scale.dp_per_row),
            });
        }

        self.level_filter()?;
        Ok(self)
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| Error::ConfigValue {
                key: "log_level",
                reason: format!("unknown level `{}`", self.log_level),
            })
    }

    /// Time between frames while an animation is running.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(MIN_FRAME_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            reduced_motion = true

            [animation]
            size_ms = 500
            easing = "ease-in-out"
            "#,
        )
        .unwrap();

        assert!(config.reduced_motion);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.animation.size_ms, 500);
        assert_eq!(config.animation.alpha_ms, 300);
        assert_eq!(config.animation.easing, Easing::EaseInOut);
        assert_eq!(
            config.animation.size(),
            TransitionConfig::millis(500, Easing::EaseInOut)
        );
    }

    #[test]
    fn frame_rate_is_clamped() {
        assert_eq!(Config::from_toml("frame_rate = 0").unwrap().frame_rate, 1);
        assert_eq!(Config::from_toml("frame_rate = 1000").unwrap().frame_rate, 240);
        assert_eq!(
            Config::default().frame_interval(),
            Duration::from_secs(1) / 60
        );
    }

    #[test]
    fn unknown_easing_is_rejected() {
        let err = Config::from_toml("[animation]\neasing = \"bounce\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("bounce"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("frame_rat = 30").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        let err = Config::from_toml("[scale]\ndp_per_row = 0.0").unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigValue {
                key: "scale.dp_per_row",
                ..
            }
        ));
    }

    #[test]
    fn log_level_must_parse() {
        assert_eq!(
            Config::from_toml("log_level = \"debug\"")
                .unwrap()
                .level_filter()
                .unwrap(),
            LevelFilter::Debug
        );
        assert!(matches!(
            Config::from_toml("log_level = \"loud\"").unwrap_err(),
            Error::ConfigValue {
                key: "log_level",
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_default() {
        let path = Path::new("/nonexistent/showcase/config.toml");
        assert_eq!(Config::load(path).unwrap(), Config::default());
    }
}
