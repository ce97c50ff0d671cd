pub mod traits;
pub mod animation;
pub mod executor;
pub mod scheduler;
pub mod indicator;
pub mod surface;
pub mod controller;
pub mod button;
pub mod color;
pub mod settings;
pub mod error;

// Export traits
pub use traits::{
    Animator, ButtonSurface, ContentElement, DynIndicator,
    ExecutionContext, Indicator, Job
};

// Export scheduling and animation
pub use animation::{Curve, InstantAnimator, TimelineAnimator, Transition, FADE_DURATION};
pub use executor::{ImmediateContext, MainQueue};
pub use scheduler::{CancellableTask, CancellationToken, TransitionScheduler};

// Export indicators
pub use indicator::{
    DotIndicator, IndicatorKind, IndicatorLayer, IndicatorStyle,
    PlatformSpinner, PulseAnimation, Sublayer,
    DEFAULT_INDICATOR_COLOR, DEFAULT_INDICATOR_RADIUS
};

// Export the controller and button
pub use controller::{HideCompletion, LoadingController, LoadingPhase, MountedIndicator, ShowCompletion};
pub use button::LoadButton;
pub use surface::SurfaceState;

// Export configuration support
pub use color::{color32_to_hex, faded, parse_hex_color};
pub use settings::LoaderSettings;
pub use error::LoadButtonError;
