//! Demo screen state.
//!
//! Flat state for the single demo screen: widget focus, the transient
//! widget values (switch position, slider progress), the display values
//! derived through the dispatcher (text size, image alpha), drag gesture
//! tracking, and the active toast.

use std::time::Instant;

use wyre_core::WidgetId;

use crate::config::DemoConfig;
use crate::widgets::{WIDGETS, WidgetInfo};

/// Initial text-size slider position.
pub const INITIAL_TEXT_PROGRESS: u16 = 24;
/// Initial opacity slider position (fully opaque).
pub const INITIAL_OPACITY_PROGRESS: u16 = 100;

/// A transient notification, shown until it times out.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }
}

/// An in-progress slider drag gesture.
///
/// Terminals deliver key presses only, so release is inferred: the gesture
/// ends when focus leaves the slider or no adjustment arrives within the
/// configured idle interval.
#[derive(Debug, Clone, Copy)]
pub struct DragGesture {
    pub widget: WidgetId,
    pub last_input: Instant,
}

/// State for the demo screen.
pub struct AppState {
    /// Flag indicating the screen should close.
    pub should_quit: bool,
    /// Screen tunables.
    pub config: DemoConfig,
    /// Index into [`WIDGETS`] of the focused widget.
    pub focus: usize,
    /// Switch position.
    pub switch_on: bool,
    /// Text-size slider position, `0..=100`.
    pub text_progress: u16,
    /// Opacity slider position, `0..=100`.
    pub opacity_progress: u16,
    /// Sample text size in points, set via `SetTextSize`.
    pub text_size: u16,
    /// Image transparency, set via `SetImageAlpha`.
    pub image_alpha: f32,
    /// Active drag gesture, if any.
    pub drag: Option<DragGesture>,
    /// Active toast, if any.
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            should_quit: false,
            config,
            focus: 0,
            switch_on: false,
            text_progress: INITIAL_TEXT_PROGRESS,
            opacity_progress: INITIAL_OPACITY_PROGRESS,
            // Derived values are seeded through the dispatcher at startup;
            // these are only the pre-seed placeholders.
            text_size: INITIAL_TEXT_PROGRESS,
            image_alpha: 1.0,
            drag: None,
            toast: None,
        }
    }

    /// The currently focused widget.
    pub fn focused(&self) -> &'static WidgetInfo {
        &WIDGETS[self.focus]
    }

    /// Moves focus to the next widget in Tab order.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % WIDGETS.len();
    }

    /// Moves focus to the previous widget in Tab order.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + WIDGETS.len() - 1) % WIDGETS.len();
    }

    /// Shows a toast, replacing any active one.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drops the toast once it has been visible long enough.
    pub fn expire_toast(&mut self) {
        let duration = self.config.toast_duration();
        if let Some(toast) = &self.toast
            && toast.shown_at.elapsed() >= duration
        {
            self.toast = None;
        }
    }
}
