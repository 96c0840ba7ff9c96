//! Scaler configuration
//!
//! Read from `dpiscale.toml`, then overridden by environment variables:
//!
//! ```toml
//! height_axis = "vertical"      # or "horizontal"
//! rounding = "half_away_from_zero"  # or "half_even"
//!
//! [dpi]  # optional fixed reading, bypasses the display
//! x = 144.0
//! y = 144.0
//! ```
//!
//! | Variable | Example |
//! |---|---|
//! | `DPISCALE_HEIGHT_AXIS` | `horizontal` |
//! | `DPISCALE_ROUNDING` | `half_even` |
//! | `DPISCALE_DPI` | `144` or `144x120` |

use crate::{DisplayError, DisplayResult, Dpi};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "dpiscale.toml";

pub const ENV_HEIGHT_AXIS: &str = "DPISCALE_HEIGHT_AXIS";
pub const ENV_ROUNDING: &str = "DPISCALE_ROUNDING";
pub const ENV_DPI: &str = "DPISCALE_DPI";

/// Which factor scales heights
///
/// `Horizontal` scales heights by the horizontal factor, as older hosts
/// did. On displays with square pixels both choices agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightAxis {
    #[default]
    Vertical,
    Horizontal,
}

impl FromStr for HeightAxis {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(DisplayError::Config(format!("unknown height axis: {other}"))),
        }
    }
}

/// How a scaled value is rounded to whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfAwayFromZero,
    /// 2.5 -> 2, 3.5 -> 4 (banker's rounding)
    HalfEven,
}

impl Rounding {
    /// Round `value` to the nearest integer.
    ///
    /// Results outside the `i32` range saturate; NaN maps to 0.
    pub fn apply(self, value: f32) -> i32 {
        let rounded = match self {
            Self::HalfAwayFromZero => value.round(),
            Self::HalfEven => value.round_ties_even(),
        };
        rounded as i32
    }
}

impl FromStr for Rounding {
    type Err = DisplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "half_away_from_zero" | "away_from_zero" => Ok(Self::HalfAwayFromZero),
            "half_even" | "even" | "bankers" => Ok(Self::HalfEven),
            other => Err(DisplayError::Config(format!("unknown rounding mode: {other}"))),
        }
    }
}

/// Parse a DPI override: `"144"` for both axes or `"144x120"`.
pub fn parse_dpi(s: &str) -> DisplayResult<Dpi> {
    let invalid = || DisplayError::Config(format!("invalid DPI value: {s}"));
    let parse = |part: &str| part.trim().parse::<f32>().map_err(|_| invalid());

    let dpi = match s.split_once(['x', 'X']) {
        Some((x, y)) => Dpi::new(parse(x)?, parse(y)?),
        None => Dpi::uniform(parse(s)?),
    };
    if !(dpi.x.is_finite() && dpi.y.is_finite() && dpi.x > 0.0 && dpi.y > 0.0) {
        return Err(invalid());
    }
    Ok(dpi)
}

/// Settings for a [`DisplayScaler`](crate::DisplayScaler)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalerConfig {
    pub height_axis: HeightAxis,
    pub rounding: Rounding,
    /// Fixed DPI used instead of querying the display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dpi: Option<Dpi>,
}

impl ScalerConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DisplayResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DisplayError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> DisplayResult<Self> {
        toml::from_str(content)
            .map_err(|e| DisplayError::Config(format!("failed to parse config: {}", e)))
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> DisplayResult<String> {
        toml::to_string(self)
            .map_err(|e| DisplayError::Config(format!("failed to serialize config: {}", e)))
    }

    /// Load [`CONFIG_FILE`] from the working directory, or defaults if it
    /// is missing or unreadable.
    pub fn load_or_default() -> Self {
        match Self::load_from_file(CONFIG_FILE) {
            Ok(config) => config,
            Err(e) => {
                if Path::new(CONFIG_FILE).exists() {
                    warn!(error = %e, "ignoring {}", CONFIG_FILE);
                }
                Self::default()
            }
        }
    }

    /// Override settings from the process environment.
    ///
    /// Unparsable values are logged and leave the setting unchanged.
    pub fn merge_with_env(&mut self) {
        self.merge_with(|key| std::env::var(key).ok());
    }

    /// Override settings from an arbitrary variable lookup.
    pub fn merge_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_HEIGHT_AXIS) {
            match val.parse() {
                Ok(axis) => self.height_axis = axis,
                Err(e) => warn!(var = ENV_HEIGHT_AXIS, error = %e, "ignoring override"),
            }
        }
        if let Some(val) = lookup(ENV_ROUNDING) {
            match val.parse() {
                Ok(rounding) => self.rounding = rounding,
                Err(e) => warn!(var = ENV_ROUNDING, error = %e, "ignoring override"),
            }
        }
        if let Some(val) = lookup(ENV_DPI) {
            match parse_dpi(&val) {
                Ok(dpi) => self.dpi = Some(dpi),
                Err(e) => warn!(var = ENV_DPI, error = %e, "ignoring override"),
            }
        }
    }

    /// Load [`CONFIG_FILE`] (or defaults), then apply environment overrides.
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
