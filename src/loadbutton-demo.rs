//! Loading Button Demo
//!
//! Hosts a single loading button in an eframe window:
//! - Click the button (or "Show loader") to swap its content for an indicator
//! - Click again (or "Hide loader") to restore the content
//! - Indicator style, radius, color and interaction are persisted across sessions
//!
//! The application is organized like this:
//! - `app/` - Demo state, frame-driven coordination, settings persistence
//! - `ui/` - Settings panel, status bar and panel layout
//! - `rendering/` - Button and indicator painting

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod rendering;
mod ui;

use app::{AppState, DemoCoordinator, SettingsCoordinator, LOADER_SETTINGS_KEY};
use loadbutton::LoaderSettings;
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Initializes logging and launches the demo window.
fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loadbutton=info,loadbutton_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_title("Loading Button Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Loading Button Demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}

/// The demo application; delegates to `DemoCoordinator` and `PanelManager`.
struct DemoApp {
    state: AppState,
}

impl DemoApp {
    /// Creates the app with loader settings restored from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let settings = SettingsCoordinator::load_loader_settings(cc.storage).unwrap_or_else(|e| {
            warn!("falling back to default loader settings: {:#}", e);
            LoaderSettings::default()
        });
        info!(style = %settings.style, radius = settings.radius, "loader settings loaded");

        let ctx = cc.egui_ctx.clone();
        Self {
            state: AppState::new(settings, move || ctx.request_repaint()),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ButtonClicked => DemoCoordinator::toggle(&mut self.state),
            PanelInteraction::ShowRequested => DemoCoordinator::start_loading(&mut self.state),
            PanelInteraction::HideRequested => DemoCoordinator::stop_loading(&mut self.state),
            PanelInteraction::ColorSubmitted => DemoCoordinator::apply_color_input(&mut self.state),
        }
    }
}

impl eframe::App for DemoApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, LOADER_SETTINGS_KEY, &self.state.settings);
    }

    /// Main update loop:
    /// 1. Drain the UI queue and advance fades to the frame time
    /// 2. Render all panels
    /// 3. Handle panel interactions
    /// 4. Keep repainting while the loader has work in flight
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        DemoCoordinator::tick(&mut self.state, now);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }

        if self.state.needs_repaint() {
            ctx.request_repaint();
        }
    }
}
