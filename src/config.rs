//! Configuration constants and types for B-ENC.

use crate::encoding::Bar;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default key pattern.
pub const DEFAULT_KEY: &str = "101011";

/// Default bar field width in bits.
pub const DEFAULT_FIELD_WIDTH: u32 = 7;

/// Widest supported bar field.
pub const MAX_FIELD_WIDTH: u32 = 32;

/// Default rendered width of one bar, in pixels.
pub const DEFAULT_BAR_WIDTH: u32 = 4;

/// Default rendered image height, in pixels.
pub const DEFAULT_HEIGHT: u32 = 120;

/// Largest accepted bar width, in pixels.
pub const MAX_BAR_WIDTH: u32 = 256;

/// Largest accepted image height, in pixels or text lines.
pub const MAX_HEIGHT: u32 = 4096;

/// Largest rendered image width, in pixels or text columns.
pub const MAX_IMAGE_WIDTH: u32 = 65_536;

/// Shift parameters of the key-driven transform.
pub mod shift_params {
    /// Added for every `1` bit on encryption.
    pub const ONE_STEP: i64 = 3;

    /// Subtracted for every `0` bit on encryption.
    pub const ZERO_STEP: i64 = 1;
}

/// Top-level configuration, loadable from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BencConfig {
    /// Raw key string. Non-binary characters are dropped when parsed.
    pub key: String,

    /// Fail on codes outside the alphabet instead of dropping them.
    pub strict_decode: bool,

    /// Bar framing used for the encrypt path.
    pub framing: BarFraming,

    /// Rendering options.
    pub render: RenderConfig,
}

impl Default for BencConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            strict_decode: false,
            framing: BarFraming::default(),
            render: RenderConfig::default(),
        }
    }
}

impl BencConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: BencConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.framing.validate()?;
        self.render.validate()
    }
}

/// Fixed-width framing applied by the bar encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarFraming {
    /// Bits per value, most significant first.
    pub field_width: u32,

    /// Bar appended after every value.
    pub separator: Bar,
}

impl Default for BarFraming {
    fn default() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            separator: Bar::Zero,
        }
    }
}

impl BarFraming {
    /// Create a framing with a custom field width.
    pub fn new(field_width: u32, separator: Bar) -> Self {
        Self {
            field_width,
            separator,
        }
    }

    /// Largest value representable in the field.
    pub fn max_value(&self) -> u64 {
        1u64.checked_shl(self.field_width).map_or(u64::MAX, |v| v - 1)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.field_width == 0 || self.field_width > MAX_FIELD_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "Field width must be between 1 and {}, got {}",
                MAX_FIELD_WIDTH, self.field_width
            )));
        }
        Ok(())
    }
}

/// Available bar renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderBackend {
    /// Grayscale PNG image.
    #[default]
    Png,
    /// Block characters for a terminal.
    Text,
}

impl fmt::Display for RenderBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderBackend::Png => write!(f, "png"),
            RenderBackend::Text => write!(f, "text"),
        }
    }
}

impl FromStr for RenderBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(RenderBackend::Png),
            "text" => Ok(RenderBackend::Text),
            other => Err(Error::InvalidConfig(format!(
                "Unknown render backend '{}' (expected png or text)",
                other
            ))),
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Which renderer to use.
    pub backend: RenderBackend,

    /// Width of a single bar in pixels (PNG only).
    pub bar_width: u32,

    /// Image height in pixels, or line count for text.
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            backend: RenderBackend::default(),
            bar_width: DEFAULT_BAR_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl RenderConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.bar_width == 0 {
            return Err(Error::InvalidConfig(
                "Bar width must be greater than 0".to_string(),
            ));
        }
        if self.bar_width > MAX_BAR_WIDTH {
            return Err(Error::InvalidConfig(format!(
                "Bar width must be at most {}, got {}",
                MAX_BAR_WIDTH, self.bar_width
            )));
        }
        if self.height == 0 {
            return Err(Error::InvalidConfig(
                "Height must be greater than 0".to_string(),
            ));
        }
        if self.height > MAX_HEIGHT {
            return Err(Error::InvalidConfig(format!(
                "Height must be at most {}, got {}",
                MAX_HEIGHT, self.height
            )));
        }
        Ok(())
    }
}
