//! Settings panel UI rendering
//!
//! Controls for the loader preferences plus explicit show/hide buttons.

use egui::RichText;
use loadbutton::IndicatorStyle;

use crate::app::AppState;

/// Result of user interaction with the settings panel
pub enum SettingsInteraction {
    ShowRequested,
    HideRequested,
    /// The color text field lost focus or Enter was pressed
    ColorSubmitted,
}

/// Renders the settings panel.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_settings_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<SettingsInteraction> {
    let mut interaction = None;

    egui::Grid::new("loader_settings").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
        ui.label("Indicator");
        egui::ComboBox::from_id_salt("indicator_style")
            .selected_text(state.settings.style.to_string())
            .show_ui(ui, |ui| {
                for style in IndicatorStyle::ALL {
                    ui.selectable_value(&mut state.settings.style, style, style.as_str());
                }
            });
        ui.end_row();

        ui.label("Radius");
        ui.add(egui::Slider::new(&mut state.settings.radius, 2.0..=40.0));
        ui.end_row();

        ui.label("Color");
        let response = ui.text_edit_singleline(&mut state.color_input);
        if response.lost_focus() {
            interaction = Some(SettingsInteraction::ColorSubmitted);
        }
        ui.end_row();

        ui.label("Interaction");
        ui.checkbox(&mut state.settings.allow_user_interaction, "allow clicks while loading");
        ui.end_row();
    });

    if let Some(error) = &state.error_message {
        ui.label(RichText::new(error).color(egui::Color32::LIGHT_RED));
    }

    ui.horizontal(|ui| {
        if ui.button("Show loader").clicked() {
            interaction = Some(SettingsInteraction::ShowRequested);
        }
        if ui.button("Hide loader").clicked() {
            interaction = Some(SettingsInteraction::HideRequested);
        }
    });

    interaction
}
