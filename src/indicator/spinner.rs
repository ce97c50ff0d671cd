//! Wrapper that lets egui's built-in spinner act as an indicator.

use egui::{Color32, Vec2};

use super::layer::IndicatorLayer;
use crate::traits::Indicator;

/// Indeterminate spinner drawn by egui itself.
///
/// The radius is derived from the frame size, matching how a platform
/// activity view is sized.
#[derive(Debug, Clone)]
pub struct PlatformSpinner {
    frame_size: Vec2,
    color: Color32,
    is_animating: bool,
}

impl Default for PlatformSpinner {
    fn default() -> Self {
        Self::new(10.0, Color32::GRAY)
    }
}

impl PlatformSpinner {
    pub fn new(radius: f32, color: Color32) -> Self {
        Self {
            frame_size: Vec2::splat(2.0 * radius),
            color,
            is_animating: false,
        }
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    /// Builds the egui widget for the current frame size and color
    pub fn widget(&self) -> egui::Spinner {
        egui::Spinner::new().size(self.frame_size.x).color(self.color)
    }
}

impl Indicator for PlatformSpinner {
    fn radius(&self) -> f32 {
        self.frame_size.x / 2.0
    }

    fn set_radius(&mut self, radius: f32) {
        self.frame_size = Vec2::splat(2.0 * radius);
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    fn is_animating(&self) -> bool {
        self.is_animating
    }

    fn start_animating(&mut self) {
        self.is_animating = true;
    }

    fn stop_animating(&mut self) {
        self.is_animating = false;
    }

    // egui animates the spinner on its own.
    fn render(&self, _layer: &mut IndicatorLayer, _size: Vec2) {}
}
