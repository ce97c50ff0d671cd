//! Panel orchestration and layout management.

use egui::Color32;

use crate::app::AppState;
use crate::rendering::button_renderer;
use crate::ui::{settings_panel, status_bar};

const BUTTON_FILL: Color32 = Color32::from_rgb(52, 101, 164);

/// Result of panel interactions that need to be handled by the demo coordinator.
pub enum PanelInteraction {
    /// The loading button itself was clicked
    ButtonClicked,
    ShowRequested,
    HideRequested,
    ColorSubmitted,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels and returns the interaction to handle, if any.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction = None;

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        egui::SidePanel::left("settings_panel").resizable(false).show(ctx, |ui| {
            ui.heading("Loader");
            ui.separator();
            if let Some(settings_interaction) = settings_panel::render_settings_panel(ui, state) {
                interaction = Some(match settings_interaction {
                    settings_panel::SettingsInteraction::ShowRequested => PanelInteraction::ShowRequested,
                    settings_panel::SettingsInteraction::HideRequested => PanelInteraction::HideRequested,
                    settings_panel::SettingsInteraction::ColorSubmitted => PanelInteraction::ColorSubmitted,
                });
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
            ui.vertical_centered(|ui| {
                let response = button_renderer::render_button(ui, &state.button, BUTTON_FILL);
                if response.clicked() {
                    interaction = Some(PanelInteraction::ButtonClicked);
                }
            });
        });

        interaction
    }
}
