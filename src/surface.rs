//! In-memory button surface.
//!
//! Holds the presentation values of a button (title, content opacity, size,
//! interaction flag) so they can be painted by egui and inspected in tests.

use egui::Vec2;

use crate::traits::{ButtonSurface, ContentElement};

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    title: Option<String>,
    title_alpha: f32,
    has_image: bool,
    image_alpha: f32,
    size: Vec2,
    user_interaction_enabled: bool,
    /// Set by style code once the drop shadow is drawn, to avoid drawing it twice
    pub shadow_added: bool,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self::new(Vec2::new(200.0, 48.0))
    }
}

impl SurfaceState {
    pub fn new(size: Vec2) -> Self {
        Self {
            title: None,
            title_alpha: 1.0,
            has_image: false,
            image_alpha: 1.0,
            size,
            user_interaction_enabled: true,
            shadow_added: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_image(mut self) -> Self {
        self.has_image = true;
        self
    }

    /// Sets the size and returns true if it changed
    pub fn set_size(&mut self, size: Vec2) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }
}

impl ButtonSurface for SurfaceState {
    fn title(&self) -> Option<String> {
        self.title.clone()
    }

    fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    fn has_content(&self, element: ContentElement) -> bool {
        match element {
            ContentElement::Title => true,
            ContentElement::Image => self.has_image,
        }
    }

    fn content_alpha(&self, element: ContentElement) -> f32 {
        match element {
            ContentElement::Title => self.title_alpha,
            ContentElement::Image => self.image_alpha,
        }
    }

    fn set_content_alpha(&mut self, element: ContentElement, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        match element {
            ContentElement::Title => self.title_alpha = alpha,
            ContentElement::Image => self.image_alpha = alpha,
        }
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    fn set_user_interaction_enabled(&mut self, enabled: bool) {
        self.user_interaction_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn test_defaults() {
        let surface = SurfaceState::new(Vec2::new(100.0, 40.0)).with_title("Go");
        assert_eq!(surface.title().as_deref(), Some("Go"));
        assert_eq!(surface.content_alpha(ContentElement::Title), 1.0);
        assert!(!surface.has_content(ContentElement::Image));
        assert!(surface.is_user_interaction_enabled());
        assert_eq!(surface.center(), Pos2::new(50.0, 20.0));
    }

    #[test]
    fn test_alpha_is_clamped() {
        let mut surface = SurfaceState::default().with_image();
        surface.set_content_alpha(ContentElement::Image, 1.5);
        assert_eq!(surface.content_alpha(ContentElement::Image), 1.0);
        surface.set_content_alpha(ContentElement::Image, -0.5);
        assert_eq!(surface.content_alpha(ContentElement::Image), 0.0);
    }

    #[test]
    fn test_set_size_reports_change() {
        let mut surface = SurfaceState::default();
        let size = surface.size();
        assert!(!surface.set_size(size));
        assert!(surface.set_size(Vec2::new(10.0, 10.0)));
    }
}
