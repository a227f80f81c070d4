use serde::{Deserialize, Serialize};

use crate::colors::{Color, Palette};
use crate::error::ConfigError;

pub const DEFAULT_WIDTH: f64 = 960.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;
pub const DEFAULT_PROJECTION_SCALE: f64 = 1000.0;
pub const DEFAULT_DATA_URL: &str = "./map.json";
pub const DEFAULT_ATLAS_URL: &str = "https://cdn.jsdelivr.net/npm/us-atlas@3/states-10m.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Customer pin appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinStyle {
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for PinStyle {
    fn default() -> Self {
        Self {
            radius: 4.0,
            fill: Color::rgb(0xef, 0x44, 0x44),
            stroke: Color::rgb(0xff, 0xff, 0xff),
            stroke_width: 1.5,
            opacity: 0.8,
        }
    }
}

/// Tooltip placement relative to the pointer, per element kind.
/// Callout labels sit away from the state, so their tooltip is pushed further out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOffsets {
    pub state: (f64, f64),
    pub callout: (f64, f64),
}

impl Default for TooltipOffsets {
    fn default() -> Self {
        Self {
            state: (10.0, -10.0),
            callout: (18.0, -36.0),
        }
    }
}

/// Widget configuration. Every field is optional in JSON; missing fields keep defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub width: f64,
    pub height: f64,
    pub projection_scale: f64,
    pub data_url: String,
    pub atlas_url: String,
    pub palette: Palette,
    pub pin: PinStyle,
    pub tooltip: TooltipOffsets,
    pub log_filter: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            projection_scale: DEFAULT_PROJECTION_SCALE,
            data_url: DEFAULT_DATA_URL.to_string(),
            atlas_url: DEFAULT_ATLAS_URL.to_string(),
            palette: Palette::default(),
            pin: PinStyle::default(),
            tooltip: TooltipOffsets::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse host-page overrides.
    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(body)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::Viewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}
