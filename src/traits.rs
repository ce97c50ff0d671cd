use egui::{Color32, Pos2, Vec2};

use crate::animation::Transition;
use crate::indicator::{DotIndicator, IndicatorLayer, PlatformSpinner};

/// A deferred unit of work submitted to an [`ExecutionContext`].
pub type Job = Box<dyn FnOnce()>;

/// Capability contract every loading indicator satisfies.
///
/// The controller never inspects concrete indicator types; it only talks to
/// this trait through [`DynIndicator`].
pub trait Indicator {
    /// Returns the indicator radius
    fn radius(&self) -> f32;

    /// Sets the indicator radius
    fn set_radius(&mut self, radius: f32);

    /// Returns the indicator color
    fn color(&self) -> Color32;

    /// Sets the indicator color
    fn set_color(&mut self, color: Color32);

    /// Returns true while the indicator is animating
    fn is_animating(&self) -> bool;

    /// Starts the animation. Does nothing if already animating.
    fn start_animating(&mut self);

    /// Stops the animation and releases the rendering primitives.
    /// Does nothing if already stopped.
    fn stop_animating(&mut self);

    /// Builds the animation primitives for `size` into `layer`.
    ///
    /// Called by `start_animating`. Indicators whose animation is driven
    /// entirely by the platform implement this as a no-op.
    fn render(&self, layer: &mut IndicatorLayer, size: Vec2);
}

/// Content elements of a button that can be faded out while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentElement {
    Title,
    Image,
}

/// The visual container the loading controller reads from and writes to.
///
/// Implemented by whatever owns the real button (a plain in-memory
/// [`SurfaceState`](crate::SurfaceState) for egui painting and tests).
pub trait ButtonSurface {
    /// Returns the displayed title text
    fn title(&self) -> Option<String>;

    /// Replaces the displayed title text
    fn set_title(&mut self, title: Option<String>);

    /// Returns true if the surface has the given element at all
    fn has_content(&self, element: ContentElement) -> bool;

    /// Returns the opacity of a content element (0.0 - 1.0)
    fn content_alpha(&self, element: ContentElement) -> f32;

    /// Sets the opacity of a content element
    fn set_content_alpha(&mut self, element: ContentElement, alpha: f32);

    /// Returns the current size of the surface
    fn size(&self) -> Vec2;

    /// Returns the center of the surface in its own coordinate space
    fn center(&self) -> Pos2 {
        (self.size() / 2.0).to_pos2()
    }

    fn is_user_interaction_enabled(&self) -> bool;

    fn set_user_interaction_enabled(&mut self, enabled: bool);
}

/// The single UI execution queue all scheduled work runs on.
pub trait ExecutionContext {
    /// Submits `job` for execution. Implementations decide whether this
    /// runs later (the UI queue) or inline (test substitutes).
    fn dispatch(&self, job: Job);
}

/// Opaque animation primitive bridging to the rendering subsystem.
pub trait Animator {
    /// Applies `mutations` to observable properties over `transition`, then
    /// invokes `on_complete` with whether the animation ran to its end.
    fn animate(
        &self,
        transition: Transition,
        mutations: Box<dyn FnOnce()>,
        on_complete: Box<dyn FnOnce(bool)>,
    );
}

// ============================================================================
// Enum Dispatch Implementation
// ============================================================================

/// Closed set of indicator variants the factory can produce.
///
/// New variants are added here and in [`IndicatorKind`](crate::IndicatorKind);
/// callers of the controller are not affected.
#[derive(Debug, Clone)]
pub enum DynIndicator {
    Spinner(PlatformSpinner),
    Dots(DotIndicator),
}

impl DynIndicator {
    /// Returns the rendering layer, if the variant owns one
    pub fn layer(&self) -> Option<&IndicatorLayer> {
        match self {
            DynIndicator::Spinner(_) => None,
            DynIndicator::Dots(d) => Some(d.layer()),
        }
    }
}

impl Indicator for DynIndicator {
    #[inline]
    fn radius(&self) -> f32 {
        match self {
            DynIndicator::Spinner(i) => i.radius(),
            DynIndicator::Dots(i) => i.radius(),
        }
    }

    #[inline]
    fn set_radius(&mut self, radius: f32) {
        match self {
            DynIndicator::Spinner(i) => i.set_radius(radius),
            DynIndicator::Dots(i) => i.set_radius(radius),
        }
    }

    #[inline]
    fn color(&self) -> Color32 {
        match self {
            DynIndicator::Spinner(i) => i.color(),
            DynIndicator::Dots(i) => i.color(),
        }
    }

    #[inline]
    fn set_color(&mut self, color: Color32) {
        match self {
            DynIndicator::Spinner(i) => i.set_color(color),
            DynIndicator::Dots(i) => i.set_color(color),
        }
    }

    #[inline]
    fn is_animating(&self) -> bool {
        match self {
            DynIndicator::Spinner(i) => i.is_animating(),
            DynIndicator::Dots(i) => i.is_animating(),
        }
    }

    #[inline]
    fn start_animating(&mut self) {
        match self {
            DynIndicator::Spinner(i) => i.start_animating(),
            DynIndicator::Dots(i) => i.start_animating(),
        }
    }

    #[inline]
    fn stop_animating(&mut self) {
        match self {
            DynIndicator::Spinner(i) => i.stop_animating(),
            DynIndicator::Dots(i) => i.stop_animating(),
        }
    }

    #[inline]
    fn render(&self, layer: &mut IndicatorLayer, size: Vec2) {
        match self {
            DynIndicator::Spinner(i) => i.render(layer, size),
            DynIndicator::Dots(i) => i.render(layer, size),
        }
    }
}
