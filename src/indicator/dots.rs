//! Three pulsing dots built from layer primitives.

use egui::{Color32, Vec2};

use super::layer::{IndicatorLayer, PulseAnimation, Sublayer};
use crate::traits::Indicator;

const DOT_COUNT: usize = 3;
const DOT_SPACING: f32 = 2.0;
const PULSE_DURATION: f64 = 0.75;
const BEGIN_TIMES: [f64; DOT_COUNT] = [0.12, 0.24, 0.36];

/// Dot-based indicator that owns its own rendering layer.
#[derive(Debug, Clone)]
pub struct DotIndicator {
    radius: f32,
    color: Color32,
    is_animating: bool,
    is_hidden: bool,
    layer: IndicatorLayer,
}

impl Default for DotIndicator {
    fn default() -> Self {
        Self::new(18.0, Color32::GRAY)
    }
}

impl DotIndicator {
    pub fn new(radius: f32, color: Color32) -> Self {
        Self {
            radius,
            color,
            is_animating: false,
            is_hidden: false,
            layer: IndicatorLayer::new(),
        }
    }

    /// Returns true while stopped after having animated
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn layer(&self) -> &IndicatorLayer {
        &self.layer
    }
}

impl Indicator for DotIndicator {
    fn radius(&self) -> f32 {
        self.radius
    }

    fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
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
        if self.is_animating {
            return;
        }
        self.is_hidden = false;
        self.is_animating = true;

        let mut layer = std::mem::take(&mut self.layer);
        layer.set_speed(1.0);
        self.render(&mut layer, Vec2::splat(2.0 * self.radius));
        self.layer = layer;
    }

    fn stop_animating(&mut self) {
        if !self.is_animating {
            return;
        }
        self.is_hidden = true;
        self.is_animating = false;
        self.layer.clear();
    }

    fn render(&self, layer: &mut IndicatorLayer, size: Vec2) {
        layer.clear();

        let dot_size = ((size.x - DOT_SPACING * (DOT_COUNT as f32 - 1.0)) / DOT_COUNT as f32).max(0.0);
        let step = dot_size + DOT_SPACING;
        // Offsets are relative to the indicator center; the middle dot sits on it.
        let first = -step * (DOT_COUNT as f32 - 1.0) / 2.0;

        for (i, begin_time) in BEGIN_TIMES.iter().enumerate() {
            layer.add_sublayer(Sublayer {
                offset: Vec2::new(first + step * i as f32, 0.0),
                radius: dot_size / 2.0,
                color: self.color,
                animation: PulseAnimation {
                    duration: PULSE_DURATION,
                    begin_time: *begin_time,
                    key_times: [0.0, 0.3, 1.0],
                    scales: [1.0, 0.3, 1.0],
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_builds_three_dots() {
        let mut dots = DotIndicator::new(12.0, Color32::RED);
        dots.start_animating();

        assert!(dots.is_animating());
        assert_eq!(dots.layer().len(), 3);

        // size 24, spacing 2 -> dot diameter (24 - 4) / 3
        let expected_radius = (24.0 - 4.0) / 3.0 / 2.0;
        for sub in dots.layer().sublayers() {
            assert!((sub.radius - expected_radius).abs() < 1e-4);
            assert_eq!(sub.color, Color32::RED);
        }
        assert_eq!(dots.layer().sublayers()[1].offset, Vec2::ZERO);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut dots = DotIndicator::default();
        dots.start_animating();
        dots.set_radius(4.0);
        dots.start_animating();

        // Second start does not rebuild with the new radius
        let first = &dots.layer().sublayers()[0];
        assert!(first.radius > 2.0);
        assert_eq!(dots.layer().len(), 3);
    }

    #[test]
    fn test_stop_clears_layer_and_hides() {
        let mut dots = DotIndicator::default();
        dots.stop_animating();
        assert!(!dots.is_hidden(), "stopping a stopped indicator is a no-op");

        dots.start_animating();
        dots.stop_animating();
        assert!(!dots.is_animating());
        assert!(dots.is_hidden());
        assert!(dots.layer().is_empty());

        dots.start_animating();
        assert!(!dots.is_hidden());
        assert_eq!(dots.layer().len(), 3);
    }
}
