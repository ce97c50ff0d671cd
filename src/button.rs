//! Button-level entry points over the loading controller.
//!
//! Two calling conventions are offered on one core: `loader` (title only,
//! completion receives the loading flag) and `show_loader` /
//! `show_loader_with_image` (indicator style plus optional color and radius).

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use egui::{Color32, Vec2};

use crate::controller::{HideCompletion, LoadingController, LoadingPhase, MountedIndicator};
use crate::indicator::{IndicatorKind, IndicatorStyle, DEFAULT_INDICATOR_COLOR, DEFAULT_INDICATOR_RADIUS};
use crate::surface::SurfaceState;
use crate::traits::{Animator, ButtonSurface, ContentElement, ExecutionContext};

/// A button that can swap its content for a loading indicator.
pub struct LoadButton<S: ButtonSurface + 'static = SurfaceState> {
    controller: LoadingController<S>,
}

impl<S: ButtonSurface + 'static> std::fmt::Debug for LoadButton<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadButton")
            .field("controller", &self.controller)
            .finish()
    }
}

impl<S: ButtonSurface + 'static> LoadButton<S> {
    pub fn new(surface: S, context: Rc<dyn ExecutionContext>, animator: Rc<dyn Animator>) -> Self {
        Self {
            controller: LoadingController::new(Rc::new(RefCell::new(surface)), context, animator),
        }
    }

    /// Shows `kind` in place of the title.
    ///
    /// `completion` receives whether the button is still loading once the
    /// fade has finished.
    pub fn loader<F>(&self, kind: IndicatorKind, user_interaction: bool, completion: F)
    where
        F: FnOnce(bool) + 'static,
    {
        self.controller
            .show_loader(&[ContentElement::Title], kind, user_interaction, Box::new(completion));
    }

    /// Shows an indicator in place of both title and image.
    ///
    /// Color defaults to light gray and radius to 12.
    pub fn show_loader(
        &self,
        style: IndicatorStyle,
        color: Option<Color32>,
        radius: Option<f32>,
        user_interaction: bool,
        completion: Option<HideCompletion>,
    ) {
        let kind = Self::kind_for(style, color, radius);
        self.controller.show_loader(
            &[ContentElement::Title, ContentElement::Image],
            kind,
            user_interaction,
            Box::new(move |_| {
                if let Some(completion) = completion {
                    completion();
                }
            }),
        );
    }

    /// Shows an indicator in place of the title, leaving the image visible.
    pub fn show_loader_with_image(
        &self,
        style: IndicatorStyle,
        color: Option<Color32>,
        radius: Option<f32>,
        user_interaction: bool,
    ) {
        let kind = Self::kind_for(style, color, radius);
        self.controller
            .show_loader(&[ContentElement::Title], kind, user_interaction, Box::new(|_| {}));
    }

    pub fn hide_loader(&self, completion: Option<HideCompletion>) {
        self.controller.hide_loader(completion);
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn phase(&self) -> LoadingPhase {
        self.controller.phase()
    }

    pub fn indicator(&self) -> Option<Ref<'_, MountedIndicator>> {
        self.controller.indicator()
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.controller.surface()
    }

    pub fn controller(&self) -> &LoadingController<S> {
        &self.controller
    }

    fn kind_for(style: IndicatorStyle, color: Option<Color32>, radius: Option<f32>) -> IndicatorKind {
        style.with(
            radius.unwrap_or(DEFAULT_INDICATOR_RADIUS),
            color.unwrap_or(DEFAULT_INDICATOR_COLOR),
        )
    }
}

impl LoadButton<SurfaceState> {
    /// Applies a new size and re-lays out the indicator if it changed.
    ///
    /// Returns true if the size changed.
    pub fn resize(&self, size: Vec2) -> bool {
        let changed = self.controller.surface_handle().borrow_mut().set_size(size);
        if changed {
            self.controller.layout();
        }
        changed
    }
}
