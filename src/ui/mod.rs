//! UI panel rendering subsystem
//!
//! - Settings panel (indicator style, radius, color, interaction flag)
//! - Status bar (loader phase and recent events)
//! - Panel manager (panel orchestration and layout)

pub mod settings_panel;
pub mod status_bar;
pub mod panel_manager;
