//! Serializable loader preferences.

use serde::{Deserialize, Serialize};

use crate::color::{color32_to_hex, parse_hex_color};
use crate::error::Result;
use crate::indicator::{IndicatorKind, IndicatorStyle, DEFAULT_INDICATOR_COLOR, DEFAULT_INDICATOR_RADIUS};

/// How the loader should look and behave when shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    pub style: IndicatorStyle,
    /// Indicator color as a hex string
    pub color: String,
    pub radius: f32,
    pub allow_user_interaction: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            style: IndicatorStyle::Dots,
            color: color32_to_hex(DEFAULT_INDICATOR_COLOR),
            radius: DEFAULT_INDICATOR_RADIUS,
            allow_user_interaction: false,
        }
    }
}

impl LoaderSettings {
    /// Validates the color and combines everything into an indicator selector
    pub fn indicator_kind(&self) -> Result<IndicatorKind> {
        let color = parse_hex_color(&self.color)?;
        Ok(self.style.with(self.radius.max(0.0), color))
    }
}
