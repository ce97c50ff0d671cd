//! Demo workflow coordination.
//!
//! Turns panel interactions into loader calls and drives the execution
//! queue and animator once per frame.

use tracing::{info, warn};

use crate::app::AppState;
use loadbutton::{parse_hex_color, LoadingPhase};

/// Coordinates the button, its queue and the animator.
pub struct DemoCoordinator;

impl DemoCoordinator {
    /// Runs queued work and completes fades that have elapsed by `now`.
    ///
    /// Called once per frame. Work queued by completions (a hide requested
    /// from a show completion) is drained in the same frame.
    pub fn tick(state: &mut AppState, now: f64) {
        state.queue.run_until_idle();
        if state.animator.advance_to(now) > 0 {
            state.queue.run_until_idle();
        }
    }

    /// Shows the loader using the current settings.
    pub fn start_loading(state: &mut AppState) {
        let kind = match state.settings.indicator_kind() {
            Ok(kind) => kind,
            Err(e) => {
                warn!(error = %e, "cannot show loader");
                state.error_message = Some(e.to_string());
                return;
            }
        };
        state.error_message = None;

        let events = state.events.clone();
        info!(style = %kind.style(), "loader requested");
        state.button.loader(kind, state.settings.allow_user_interaction, move |is_loading| {
            events.push(if is_loading { "loader shown" } else { "loader cancelled before it appeared" });
        });
    }

    /// Hides the loader.
    pub fn stop_loading(state: &mut AppState) {
        let events = state.events.clone();
        info!("hide requested");
        state
            .button
            .hide_loader(Some(Box::new(move || events.push("content restored"))));
    }

    /// Toggles between loading and idle, as a click on the button does.
    pub fn toggle(state: &mut AppState) {
        match state.button.phase() {
            LoadingPhase::Idle | LoadingPhase::Hiding => Self::start_loading(state),
            LoadingPhase::Showing | LoadingPhase::Loading => Self::stop_loading(state),
        }
    }

    /// Applies the color text field to settings if it parses.
    pub fn apply_color_input(state: &mut AppState) {
        match parse_hex_color(&state.color_input) {
            Ok(_) => {
                state.settings.color = state.color_input.trim().to_string();
                state.error_message = None;
            }
            Err(e) => state.error_message = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadbutton::{ButtonSurface, LoaderSettings};

    fn state() -> AppState {
        AppState::new(LoaderSettings::default(), || {})
    }

    #[test]
    fn test_full_cycle_through_ticks() {
        let mut state = state();

        DemoCoordinator::start_loading(&mut state);
        DemoCoordinator::tick(&mut state, 0.1);
        assert_eq!(state.button.phase(), LoadingPhase::Showing);

        DemoCoordinator::tick(&mut state, 0.7);
        assert_eq!(state.button.phase(), LoadingPhase::Loading);
        assert_eq!(state.events.entries(), vec!["loader shown".to_string()]);

        DemoCoordinator::stop_loading(&mut state);
        DemoCoordinator::tick(&mut state, 0.8);
        assert_eq!(state.button.phase(), LoadingPhase::Hiding);
        DemoCoordinator::tick(&mut state, 1.4);
        assert_eq!(state.button.phase(), LoadingPhase::Idle);
        assert_eq!(state.button.surface().title().as_deref(), Some("Submit"));
        assert_eq!(state.events.entries().last().map(String::as_str), Some("content restored"));
    }

    #[test]
    fn test_toggle_twice_in_one_frame_cancels_show() {
        let mut state = state();
        DemoCoordinator::toggle(&mut state);
        DemoCoordinator::toggle(&mut state);

        DemoCoordinator::tick(&mut state, 0.0);
        DemoCoordinator::tick(&mut state, 1.0);

        assert_eq!(state.button.phase(), LoadingPhase::Idle);
        assert!(!state.button.is_loading());
        assert_eq!(state.events.entries(), vec!["content restored".to_string()]);
    }

    #[test]
    fn test_invalid_color_blocks_loading() {
        let mut state = state();
        state.color_input = "not a color".to_string();
        DemoCoordinator::apply_color_input(&mut state);
        assert!(state.error_message.is_some());

        state.settings.color = "zzz".to_string();
        DemoCoordinator::start_loading(&mut state);
        DemoCoordinator::tick(&mut state, 0.0);
        assert!(!state.button.is_loading());
    }

    #[test]
    fn test_valid_color_is_applied() {
        let mut state = state();
        state.color_input = " #112233 ".to_string();
        DemoCoordinator::apply_color_input(&mut state);
        assert_eq!(state.settings.color, "#112233");
        assert!(state.error_message.is_none());
    }
}
