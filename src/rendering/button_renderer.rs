//! Button rendering
//!
//! Draws the button surface: background, optional icon, title and the
//! mounted indicator. Presentation opacities follow the surface's model
//! values along the same transitions the controller runs.

use egui::{Align2, Color32, FontId, Id, Sense, Stroke, StrokeKind};
use loadbutton::{faded, ButtonSurface, ContentElement, LoadButton, Transition};

use crate::rendering::indicator_renderer;

const CORNER_RADIUS: f32 = 12.0;
const ICON: &str = "⬆";

/// Renders the button and returns its response.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `button` - The loading button to draw
/// * `fill` - Background color
pub fn render_button(ui: &mut egui::Ui, button: &LoadButton, fill: Color32) -> egui::Response {
    let (size, interactive, title, title_alpha, has_image, image_alpha) = {
        let surface = button.surface();
        (
            surface.size(),
            surface.is_user_interaction_enabled(),
            surface.title().unwrap_or_default(),
            surface.content_alpha(ContentElement::Title),
            surface.has_content(ContentElement::Image),
            surface.content_alpha(ContentElement::Image),
        )
    };

    let sense = if interactive { Sense::click() } else { Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    let ctx = ui.ctx().clone();
    let title_alpha = content_fade(&ctx, Id::new("loadbutton_title_alpha"), title_alpha > 0.5);
    let image_alpha = content_fade(&ctx, Id::new("loadbutton_image_alpha"), image_alpha > 0.5);

    let background = if response.hovered() && interactive { fill.gamma_multiply(1.15) } else { fill };
    let painter = ui.painter();
    painter.rect_filled(rect, CORNER_RADIUS, background);
    if !interactive {
        painter.rect_stroke(rect, CORNER_RADIUS, Stroke::new(1.0, Color32::DARK_GRAY), StrokeKind::Inside);
    }

    let text_color = Color32::WHITE;
    let font = FontId::proportional(18.0);
    let content_center = rect.center();
    if has_image {
        let icon_pos = content_center - egui::vec2(title.len() as f32 * 4.5 + 14.0, 0.0);
        painter.text(icon_pos, Align2::CENTER_CENTER, ICON, font.clone(), faded(text_color, image_alpha));
    }
    if !title.is_empty() {
        painter.text(content_center, Align2::CENTER_CENTER, &title, font, faded(text_color, title_alpha));
    }

    let indicator_id = Id::new("loadbutton_indicator_alpha");
    if let Some(mounted) = button.indicator() {
        let indicator_alpha = fade(&ctx, indicator_id, mounted.alpha() > 0.5, Transition::fade_out());
        let center = rect.min + mounted.center().to_vec2();
        let time = ui.input(|i| i.time);
        indicator_renderer::render_indicator(ui, center, &mounted, indicator_alpha, time);
    } else {
        // Unmounted indicators vanish at once; only the decay is tracked
        fade(&ctx, indicator_id, false, Transition::fade_out());
    }

    response
}

/// Content fades out on show and back in on hide.
fn content_fade(ctx: &egui::Context, id: Id, visible: bool) -> f32 {
    let transition = if visible { Transition::fade_in() } else { Transition::fade_out() };
    fade(ctx, id, visible, transition)
}

/// Animates an opacity toward `visible` along `transition`.
///
/// egui plays the easing backwards when the value falls, so falling values
/// use the reversed curve.
fn fade(ctx: &egui::Context, id: Id, visible: bool, transition: Transition) -> f32 {
    let curve = if visible { transition.curve } else { transition.curve.reversed() };
    ctx.animate_bool_with_time_and_easing(id, visible, transition.duration.as_secs_f32(), curve.easing())
}
