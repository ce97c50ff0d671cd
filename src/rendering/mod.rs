//! Rendering subsystem for drawing the loading button
//!
//! - Indicator rendering (dot layers and the egui spinner)
//! - Button rendering (background, title, icon, mounted indicator)

pub mod indicator_renderer;
pub mod button_renderer;
