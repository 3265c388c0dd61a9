//! The demo widget table.
//!
//! Fixed set of widgets hosted by the demo screen, in focus order. Ids are
//! assigned once here and never reused; everything else addresses widgets
//! through these constants.

use wyre_core::WidgetId;

/// Primary button, wired through the shared click handler.
pub const MY_BUTTON: WidgetId = WidgetId::new(1);
/// Second button, wired with an inline one-off closure.
pub const ANON_BUTTON: WidgetId = WidgetId::new(2);
/// Toggle switch.
pub const MY_SWITCH: WidgetId = WidgetId::new(3);
/// Slider controlling the sample text size.
pub const TEXT_SIZE_SLIDER: WidgetId = WidgetId::new(4);
/// Slider controlling the image opacity.
pub const OPACITY_SLIDER: WidgetId = WidgetId::new(5);

/// Description of a demo widget, for focus traversal and listings.
#[derive(Debug, Clone, Copy)]
pub struct WidgetInfo {
    pub id: WidgetId,
    /// Label shown on screen.
    pub label: &'static str,
    /// Short description for the `widgets` listing.
    pub description: &'static str,
    pub is_slider: bool,
}

/// All demo widgets, in focus (Tab) order.
pub const WIDGETS: &[WidgetInfo] = &[
    WidgetInfo {
        id: MY_BUTTON,
        label: "Tap me",
        description: "Button wired through the shared click handler",
        is_slider: false,
    },
    WidgetInfo {
        id: ANON_BUTTON,
        label: "One-shot",
        description: "Button wired with an inline anonymous handler",
        is_slider: false,
    },
    WidgetInfo {
        id: MY_SWITCH,
        label: "Switch",
        description: "Toggle reporting ON/OFF state changes",
        is_slider: false,
    },
    WidgetInfo {
        id: TEXT_SIZE_SLIDER,
        label: "Text size",
        description: "Slider setting the sample text size (min 10pt)",
        is_slider: true,
    },
    WidgetInfo {
        id: OPACITY_SLIDER,
        label: "Opacity",
        description: "Slider setting the image transparency",
        is_slider: true,
    },
];

/// Looks up the table entry for a widget id.
pub fn info(id: WidgetId) -> Option<&'static WidgetInfo> {
    WIDGETS.iter().find(|w| w.id == id)
}

/// Returns true if the widget is one of the two sliders.
pub fn is_slider(id: WidgetId) -> bool {
    info(id).is_some_and(|w| w.is_slider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_ids_are_unique() {
        for (i, a) in WIDGETS.iter().enumerate() {
            for b in &WIDGETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_slider_flags() {
        assert!(is_slider(TEXT_SIZE_SLIDER));
        assert!(is_slider(OPACITY_SLIDER));
        assert!(!is_slider(MY_BUTTON));
        assert!(!is_slider(MY_SWITCH));
    }
}
