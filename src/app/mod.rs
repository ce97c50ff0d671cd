//! Application-level modules for the loader demo.
//!
//! This module contains the demo state and the coordinators that drive it.

mod app_state;
mod demo_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use demo_coordinator::DemoCoordinator;
pub use settings_coordinator::{SettingsCoordinator, LOADER_SETTINGS_KEY};
