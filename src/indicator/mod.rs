//! Loading indicators and the factory that builds them.
//!
//! - `layer` - rendering layer primitives filled by `Indicator::render`
//! - `dots` - three pulsing dots drawn from layer primitives
//! - `spinner` - wrapper around egui's built-in spinner
//! - `factory` - indicator-type selectors mapped to concrete indicators

mod layer;
mod dots;
mod spinner;
mod factory;

pub use layer::{IndicatorLayer, PulseAnimation, Sublayer};
pub use dots::DotIndicator;
pub use spinner::PlatformSpinner;
pub use factory::{IndicatorKind, IndicatorStyle, DEFAULT_INDICATOR_COLOR, DEFAULT_INDICATOR_RADIUS};
