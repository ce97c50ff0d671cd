//! Indicator-type selectors and the factory mapping them to indicators.

use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use super::{DotIndicator, PlatformSpinner};
use crate::error::LoadButtonError;
use crate::traits::DynIndicator;

pub const DEFAULT_INDICATOR_RADIUS: f32 = 12.0;
pub const DEFAULT_INDICATOR_COLOR: Color32 = Color32::LIGHT_GRAY;

/// Selector for the indicator to show, carrying its parameters.
///
/// This is the extension point for new indicator shapes: add a variant here
/// and a matching `DynIndicator` variant. Callers that pass a kind to the
/// controller need no changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IndicatorKind {
    Dots { radius: f32, color: Color32 },
    Spinner { radius: f32, color: Color32 },
}

impl IndicatorKind {
    /// Builds a fresh indicator for this selector
    pub fn build(self) -> DynIndicator {
        match self {
            IndicatorKind::Dots { radius, color } => DynIndicator::Dots(DotIndicator::new(radius, color)),
            IndicatorKind::Spinner { radius, color } => {
                DynIndicator::Spinner(PlatformSpinner::new(radius, color))
            }
        }
    }

    pub fn style(&self) -> IndicatorStyle {
        match self {
            IndicatorKind::Dots { .. } => IndicatorStyle::Dots,
            IndicatorKind::Spinner { .. } => IndicatorStyle::Spinner,
        }
    }
}

/// Parameterless indicator selector, as used by the button wrapper and settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStyle {
    #[default]
    Dots,
    Spinner,
}

impl IndicatorStyle {
    pub const ALL: [IndicatorStyle; 2] = [IndicatorStyle::Dots, IndicatorStyle::Spinner];

    /// Combines the style with radius and color into a buildable kind
    pub fn with(self, radius: f32, color: Color32) -> IndicatorKind {
        match self {
            IndicatorStyle::Dots => IndicatorKind::Dots { radius, color },
            IndicatorStyle::Spinner => IndicatorKind::Spinner { radius, color },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorStyle::Dots => "dots",
            IndicatorStyle::Spinner => "spinner",
        }
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorStyle {
    type Err = LoadButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dots" => Ok(IndicatorStyle::Dots),
            "spinner" => Ok(IndicatorStyle::Spinner),
            _ => Err(LoadButtonError::UnknownIndicatorStyle(s.to_string())),
        }
    }
}
