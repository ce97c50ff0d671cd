//! Status bar UI rendering
//!
//! Shows the loader phase and the most recent completion events.

use egui::RichText;

use crate::app::AppState;

/// Renders the status bar at the bottom of the window
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Phase: {:?}", state.button.phase())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format!("loading: {}", state.button.is_loading()));
        ui.label(RichText::new("|").strong());
        ui.label(format!("queued: {} | fading: {}", state.queue.len(), state.animator.in_flight()));
    });

    for entry in state.events.entries().iter().rev() {
        ui.label(RichText::new(entry).weak());
    }
}
