//! Demo event bindings.
//!
//! Installs the callbacks for every demo widget into one teardown scope.
//! Mirrors the classic listener roles: one shared click handler comparing
//! widget identity, one inline anonymous click handler, a checked-change
//! handler on the switch, a single progress handler shared by both sliders,
//! and drag tracking that only announces itself for the text-size slider.

use wyre_core::{Dispatcher, EventKind, ScopeId, UiEffect, WidgetEvent, WidgetId};

use crate::widgets::{ANON_BUTTON, MY_BUTTON, MY_SWITCH, OPACITY_SLIDER, TEXT_SIZE_SLIDER};

/// Teardown scope owning all demo bindings.
pub const DEMO_SCOPE: ScopeId = ScopeId::new(1);

/// Minimum sample text size in points.
pub const MIN_TEXT_SIZE: u16 = 10;

pub const MSG_BUTTON_CLICKED: &str = "Button clicked!";
pub const MSG_ANON_CLICKED: &str = "Clicked with an anonymous handler!";
pub const MSG_SWITCH_ON: &str = "Switch is ON";
pub const MSG_SWITCH_OFF: &str = "Switch is OFF";
pub const MSG_DRAG_START: &str = "Started changing text size";
pub const MSG_DRAG_STOP: &str = "Stopped changing text size";

/// Installs all demo bindings under [`DEMO_SCOPE`].
pub fn install(dispatcher: &mut Dispatcher) {
    // Shared click handler: reacts only to the primary button, so binding
    // it elsewhere stays inert. The one-shot button instead gets its own
    // inline closure that fires unconditionally.
    let shared_click = |widget: WidgetId, _: &WidgetEvent| -> Vec<UiEffect> {
        if widget == MY_BUTTON {
            vec![UiEffect::toast(MSG_BUTTON_CLICKED)]
        } else {
            vec![]
        }
    };
    dispatcher.bind(DEMO_SCOPE, MY_BUTTON, EventKind::Click, shared_click);
    dispatcher.bind(DEMO_SCOPE, ANON_BUTTON, EventKind::Click, |_, _| {
        vec![UiEffect::toast(MSG_ANON_CLICKED)]
    });

    dispatcher.bind(
        DEMO_SCOPE,
        MY_SWITCH,
        EventKind::CheckedChanged,
        |widget, event| {
            if widget != MY_SWITCH {
                return vec![];
            }
            match event {
                WidgetEvent::CheckedChanged { is_checked } => {
                    let message = if *is_checked {
                        MSG_SWITCH_ON
                    } else {
                        MSG_SWITCH_OFF
                    };
                    vec![UiEffect::toast(message)]
                }
                _ => vec![],
            }
        },
    );

    // One progress handler for both sliders, disambiguated by identity.
    let shared_progress = |widget: WidgetId, event: &WidgetEvent| -> Vec<UiEffect> {
        let WidgetEvent::ProgressChanged { progress, .. } = event else {
            return vec![];
        };
        if widget == TEXT_SIZE_SLIDER {
            vec![UiEffect::SetTextSize {
                size: (*progress).max(MIN_TEXT_SIZE),
            }]
        } else if widget == OPACITY_SLIDER {
            // progress is 0-100, alpha needs 0.0-1.0
            vec![UiEffect::SetImageAlpha {
                alpha: f32::from(*progress) / 100.0,
            }]
        } else {
            vec![]
        }
    };
    dispatcher.bind(
        DEMO_SCOPE,
        TEXT_SIZE_SLIDER,
        EventKind::ProgressChanged,
        shared_progress,
    );
    dispatcher.bind(
        DEMO_SCOPE,
        OPACITY_SLIDER,
        EventKind::ProgressChanged,
        shared_progress,
    );

    // Drag tracking: only the text-size slider announces it.
    let drag_toast = |widget: WidgetId, event: &WidgetEvent| -> Vec<UiEffect> {
        if widget != TEXT_SIZE_SLIDER {
            return vec![];
        }
        match event {
            WidgetEvent::DragStart => vec![UiEffect::toast(MSG_DRAG_START)],
            WidgetEvent::DragStop => vec![UiEffect::toast(MSG_DRAG_STOP)],
            _ => vec![],
        }
    };
    for slider in [TEXT_SIZE_SLIDER, OPACITY_SLIDER] {
        dispatcher.bind(DEMO_SCOPE, slider, EventKind::DragStart, drag_toast);
        dispatcher.bind(DEMO_SCOPE, slider, EventKind::DragStop, drag_toast);
    }
}
