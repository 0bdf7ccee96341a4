use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::core::Size;

/// Screen metrics supplied by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Width of the stack container in real pixels
    pub width_px: u32,
    /// Pixels per density-independent pixel
    pub density: f32,
}

impl ScreenMetrics {
    pub fn new(width_px: u32, density: f32) -> Self {
        Self { width_px, density }
    }

    /// Converts density-independent pixels to real pixels, rounded
    pub fn dp_to_px(&self, dp: f32) -> f32 {
        (dp * self.density).round()
    }
}

/// Resolved pixel layout of the stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub container_width: f32,
    pub card: Size,
    pub padding: f32,
}

/// User-facing configuration of the card stack
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackConfig {
    /// Duration of snap-back and fly-off animations
    pub animation_duration_ms: u64,
    /// Card tilt at a drag of one container width
    pub card_rotation_degrees: f32,
    /// Fixed tilt of the approve/delete badges when drawn
    pub badge_rotation_degrees: f32,
    /// Card padding, also used by the rotation pivot and badge alpha
    pub padding_dp: f32,
    /// Card height divided by card width
    pub card_aspect_ratio: f32,
}

impl StackConfig {
    pub const DEFAULT_DURATION_MS: u64 = 700;
    pub const MIN_DURATION_MS: u64 = 1;
    pub const MAX_DURATION_MS: u64 = 10_000;
    pub const DEFAULT_ROTATION: f32 = 40.0;
    pub const DEFAULT_BADGE_ROTATION: f32 = 15.0;
    pub const DEFAULT_PADDING_DP: f32 = 16.0;
    pub const DEFAULT_ASPECT_RATIO: f32 = 1.25;

    /// Parses and validates a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: StackConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_DURATION_MS..=Self::MAX_DURATION_MS).contains(&self.animation_duration_ms) {
            return Err(ConfigError::InvalidValue {
                field: "animation_duration_ms",
                reason: format!(
                    "must be between {} and {}",
                    Self::MIN_DURATION_MS,
                    Self::MAX_DURATION_MS
                ),
            });
        }
        if !self.card_rotation_degrees.is_finite() || !self.badge_rotation_degrees.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "card_rotation_degrees",
                reason: "rotations must be finite".to_string(),
            });
        }
        if !self.padding_dp.is_finite() || self.padding_dp < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "padding_dp",
                reason: "must be a non-negative number".to_string(),
            });
        }
        if !self.card_aspect_ratio.is_finite() || self.card_aspect_ratio <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "card_aspect_ratio",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    /// Resolves the pixel layout for a screen
    ///
    /// Cards span the full container width.
    pub fn layout(&self, metrics: &ScreenMetrics) -> Result<Layout, ConfigError> {
        self.validate()?;
        if metrics.width_px == 0 {
            return Err(ConfigError::InvalidMetrics {
                reason: "container width is zero".to_string(),
            });
        }
        if !metrics.density.is_finite() || metrics.density <= 0.0 {
            return Err(ConfigError::InvalidMetrics {
                reason: format!("density {} is not positive", metrics.density),
            });
        }

        let width = metrics.width_px as f32;
        Ok(Layout {
            container_width: width,
            card: Size::new(width, (width * self.card_aspect_ratio).round()),
            padding: metrics.dp_to_px(self.padding_dp),
        })
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            animation_duration_ms: Self::DEFAULT_DURATION_MS,
            card_rotation_degrees: Self::DEFAULT_ROTATION,
            badge_rotation_degrees: Self::DEFAULT_BADGE_ROTATION,
            padding_dp: Self::DEFAULT_PADDING_DP,
            card_aspect_ratio: Self::DEFAULT_ASPECT_RATIO,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse stack configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("Invalid screen metrics: {reason}")]
    InvalidMetrics { reason: String },
}
