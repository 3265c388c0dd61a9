//! Screen event types.
//!
//! All inputs to the demo screen are converted to `UiEvent` before being
//! processed by the reducer. Terminal input is translated into widget
//! events there; `Widget` also serves as the direct entry point for
//! programmatic dispatch (startup seeding, tests).

use crossterm::event::Event as CrosstermEvent;
use wyre_core::{WidgetEvent, WidgetId};

/// Unified event enum for the demo screen.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (toast expiry, drag release).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// A widget event to route through the dispatcher.
    Widget {
        widget: WidgetId,
        event: WidgetEvent,
    },
}
