//! Indicator rendering
//!
//! Paints a mounted indicator from its layer primitives, or through egui's
//! spinner widget for the platform variant.

use egui::{Pos2, Rect, Vec2};
use loadbutton::{faded, DynIndicator, Indicator, IndicatorLayer, MountedIndicator};

/// Renders a mounted indicator centered at `center`.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `center` - Indicator center in screen coordinates
/// * `mounted` - The mounted indicator
/// * `alpha` - Presentation opacity (already smoothed by the caller)
/// * `time` - Current frame time in seconds
pub fn render_indicator(ui: &mut egui::Ui, center: Pos2, mounted: &MountedIndicator, alpha: f32, time: f64) {
    if alpha <= 0.0 {
        return;
    }

    match mounted.indicator() {
        DynIndicator::Dots(dots) => {
            if dots.is_animating() {
                paint_layer(ui, center, dots.layer(), alpha, time);
            } else if !dots.is_hidden() {
                // Not started yet: show the first frame while fading in
                let mut preview = IndicatorLayer::new();
                dots.render(&mut preview, Vec2::splat(2.0 * dots.radius()));
                paint_layer(ui, center, &preview, alpha, 0.0);
            }
        }
        DynIndicator::Spinner(spinner) => {
            let rect = Rect::from_center_size(center, spinner.frame_size());
            ui.put(rect, spinner.widget().color(faded(spinner.color(), alpha)));
        }
    }
}

fn paint_layer(ui: &egui::Ui, center: Pos2, layer: &IndicatorLayer, alpha: f32, time: f64) {
    let painter = ui.painter();
    let local = layer.local_time(time);
    for sublayer in layer.sublayers() {
        painter.circle_filled(center + sublayer.offset, sublayer.radius_at(local), faded(sublayer.color, alpha));
    }
}
