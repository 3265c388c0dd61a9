//! Display effect types.
//!
//! Effects are commands returned by callbacks that the host runtime
//! executes. They represent display mutations only; the dispatcher itself
//! never touches the screen.
//!
//! This keeps callbacks pure with respect to the host: a callback maps an
//! event to effects, and the runtime applies them to whatever display it
//! owns (a terminal screen in the demo).

/// Effects returned by a bound callback for the host runtime to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    /// Show a short transient text notification.
    ShowToast { message: String },

    /// Set the display size of the sample text, in points.
    SetTextSize { size: u16 },

    /// Set the image transparency, `0.0` (invisible) to `1.0` (opaque).
    SetImageAlpha { alpha: f32 },
}

impl UiEffect {
    /// Convenience constructor for toast effects.
    pub fn toast(message: impl Into<String>) -> Self {
        UiEffect::ShowToast {
            message: message.into(),
        }
    }
}
