//! Widget event types.
//!
//! `WidgetEvent` is the payload delivered to a bound callback; `EventKind`
//! is its discriminant and half of the registry key. The host runtime
//! converts raw input (key presses, in the demo) into these events before
//! handing them to the dispatcher.

/// Event kind — the registry key alongside the widget id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Widget was activated (button press).
    Click,
    /// Two-state widget flipped (switch toggle).
    CheckedChanged,
    /// Slider position moved.
    ProgressChanged,
    /// Slider drag gesture began.
    DragStart,
    /// Slider drag gesture ended.
    DragStop,
}

/// Event payload delivered to a callback.
///
/// Click and drag events carry no payload beyond the widget handle; the
/// callback decides its reaction by comparing widget identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    /// Widget was activated.
    Click,

    /// Two-state widget changed.
    CheckedChanged { is_checked: bool },

    /// Slider position changed.
    ProgressChanged {
        /// Position in `0..=100`.
        progress: u16,
        /// True when the change came from user input rather than
        /// programmatic seeding.
        from_user: bool,
    },

    /// Drag gesture began on a slider.
    DragStart,

    /// Drag gesture ended on a slider.
    DragStop,
}

impl WidgetEvent {
    /// Returns the kind used to look up the binding for this event.
    pub fn kind(&self) -> EventKind {
        match self {
            WidgetEvent::Click => EventKind::Click,
            WidgetEvent::CheckedChanged { .. } => EventKind::CheckedChanged,
            WidgetEvent::ProgressChanged { .. } => EventKind::ProgressChanged,
            WidgetEvent::DragStart => EventKind::DragStart,
            WidgetEvent::DragStop => EventKind::DragStop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_matches_payload() {
        assert_eq!(WidgetEvent::Click.kind(), EventKind::Click);
        assert_eq!(
            WidgetEvent::CheckedChanged { is_checked: true }.kind(),
            EventKind::CheckedChanged
        );
        assert_eq!(
            WidgetEvent::ProgressChanged {
                progress: 50,
                from_user: true
            }
            .kind(),
            EventKind::ProgressChanged
        );
        assert_eq!(WidgetEvent::DragStart.kind(), EventKind::DragStart);
        assert_eq!(WidgetEvent::DragStop.kind(), EventKind::DragStop);
    }
}
