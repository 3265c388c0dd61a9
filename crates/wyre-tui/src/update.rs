//! Demo screen reducer.
//!
//! All state mutations happen here. The runtime calls `update` for each
//! collected event; terminal input is translated into widget events, routed
//! through the dispatcher, and the returned effects are applied to state.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wyre_core::{Dispatcher, UiEffect, WidgetEvent, WidgetId};

use crate::events::UiEvent;
use crate::state::{AppState, DragGesture};
use crate::widgets::{self, MY_SWITCH, OPACITY_SLIDER, TEXT_SIZE_SLIDER};

/// The main reducer function.
pub fn update(state: &mut AppState, dispatcher: &mut Dispatcher, event: UiEvent) {
    match event {
        UiEvent::Tick => {
            state.expire_toast();
            release_idle_drag(state, dispatcher);
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(state, dispatcher, key);
        }
        UiEvent::Terminal(_) => {}
        UiEvent::Widget { widget, event } => dispatch(state, dispatcher, widget, &event),
    }
}

/// Seeds both sliders through the dispatcher so the derived display values
/// are consistent from the first frame. Not user input, so no drag events
/// and `from_user` is false.
pub fn seed_sliders(state: &mut AppState, dispatcher: &mut Dispatcher) {
    for (widget, progress) in [
        (TEXT_SIZE_SLIDER, state.text_progress),
        (OPACITY_SLIDER, state.opacity_progress),
    ] {
        dispatch(
            state,
            dispatcher,
            widget,
            &WidgetEvent::ProgressChanged {
                progress,
                from_user: false,
            },
        );
    }
}

/// Routes one widget event and applies the returned effects.
fn dispatch(
    state: &mut AppState,
    dispatcher: &mut Dispatcher,
    widget: WidgetId,
    event: &WidgetEvent,
) {
    let effects = dispatcher.dispatch(widget, event);
    apply_effects(state, effects);
}

/// Applies display effects to screen state (the host-side execution of
/// toast/text-size/alpha primitives).
fn apply_effects(state: &mut AppState, effects: Vec<UiEffect>) {
    for effect in effects {
        match effect {
            UiEffect::ShowToast { message } => state.show_toast(message),
            UiEffect::SetTextSize { size } => state.text_size = size,
            UiEffect::SetImageAlpha { alpha } => state.image_alpha = alpha,
        }
    }
}

fn handle_key(state: &mut AppState, dispatcher: &mut Dispatcher, key: KeyEvent) {
    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        end_drag(state, dispatcher);
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            end_drag(state, dispatcher);
            state.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            end_drag(state, dispatcher);
            state.focus_prev();
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_focused(state, dispatcher),
        KeyCode::Left => adjust_focused_slider(state, dispatcher, -1),
        KeyCode::Right => adjust_focused_slider(state, dispatcher, 1),
        _ => {}
    }
}

/// Enter/Space on the focused widget: click a button, toggle the switch,
/// or release an active slider gesture.
fn activate_focused(state: &mut AppState, dispatcher: &mut Dispatcher) {
    let widget = state.focused().id;
    if widget == MY_SWITCH {
        state.switch_on = !state.switch_on;
        let is_checked = state.switch_on;
        dispatch(
            state,
            dispatcher,
            widget,
            &WidgetEvent::CheckedChanged { is_checked },
        );
    } else if widgets::is_slider(widget) {
        end_drag(state, dispatcher);
    } else {
        dispatch(state, dispatcher, widget, &WidgetEvent::Click);
    }
}

/// Left/Right on a focused slider: begin or extend the drag gesture and
/// dispatch the progress change when the position actually moved.
fn adjust_focused_slider(state: &mut AppState, dispatcher: &mut Dispatcher, direction: i32) {
    let widget = state.focused().id;
    if !widgets::is_slider(widget) {
        return;
    }

    begin_or_extend_drag(state, dispatcher, widget);

    let current = if widget == TEXT_SIZE_SLIDER {
        state.text_progress
    } else {
        state.opacity_progress
    };
    let step = i32::from(state.config.slider_step);
    let progress = (i32::from(current) + direction * step).clamp(0, 100) as u16;
    if progress == current {
        return;
    }

    if widget == TEXT_SIZE_SLIDER {
        state.text_progress = progress;
    } else {
        state.opacity_progress = progress;
    }
    dispatch(
        state,
        dispatcher,
        widget,
        &WidgetEvent::ProgressChanged {
            progress,
            from_user: true,
        },
    );
}

fn begin_or_extend_drag(state: &mut AppState, dispatcher: &mut Dispatcher, widget: WidgetId) {
    match &mut state.drag {
        Some(gesture) if gesture.widget == widget => gesture.last_input = Instant::now(),
        _ => {
            end_drag(state, dispatcher);
            dispatch(state, dispatcher, widget, &WidgetEvent::DragStart);
            state.drag = Some(DragGesture {
                widget,
                last_input: Instant::now(),
            });
        }
    }
}

/// Ends the active drag gesture, if any, dispatching `DragStop`.
fn end_drag(state: &mut AppState, dispatcher: &mut Dispatcher) {
    if let Some(gesture) = state.drag.take() {
        dispatch(state, dispatcher, gesture.widget, &WidgetEvent::DragStop);
    }
}

/// Releases a drag gesture that saw no input for the configured interval.
fn release_idle_drag(state: &mut AppState, dispatcher: &mut Dispatcher) {
    let released = state
        .drag
        .is_some_and(|gesture| gesture.last_input.elapsed() >= state.config.drag_release());
    if released {
        end_drag(state, dispatcher);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wyre_core::WidgetId;

    use super::*;
    use crate::bindings::{
        self, MSG_BUTTON_CLICKED, MSG_DRAG_START, MSG_DRAG_STOP, MSG_SWITCH_OFF, MSG_SWITCH_ON,
    };
    use crate::config::DemoConfig;
    use crate::widgets::{MY_BUTTON, WIDGETS};

    fn demo() -> (AppState, Dispatcher) {
        let mut state = AppState::new(DemoConfig::default());
        let mut dispatcher = Dispatcher::new();
        bindings::install(&mut dispatcher);
        seed_sliders(&mut state, &mut dispatcher);
        (state, dispatcher)
    }

    fn focus_on(state: &mut AppState, id: WidgetId) {
        state.focus = WIDGETS.iter().position(|w| w.id == id).unwrap();
    }

    fn press(state: &mut AppState, dispatcher: &mut Dispatcher, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        update(state, dispatcher, UiEvent::Terminal(Event::Key(key)));
    }

    fn toast_message(state: &AppState) -> Option<&str> {
        state.toast.as_ref().map(|t| t.message.as_str())
    }

    #[test]
    fn test_seeding_derives_display_values_without_toasts() {
        let (state, _) = demo();
        assert_eq!(state.text_size, 24);
        assert!((state.image_alpha - 1.0).abs() < f32::EPSILON);
        assert!(state.toast.is_none());
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let (mut state, mut dispatcher) = demo();
            press(&mut state, &mut dispatcher, code);
            assert!(state.should_quit);
        }

        let (mut state, mut dispatcher) = demo();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        update(&mut state, &mut dispatcher, UiEvent::Terminal(Event::Key(key)));
        assert!(state.should_quit);
    }

    #[test]
    fn test_enter_on_button_shows_click_toast() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, MY_BUTTON);
        press(&mut state, &mut dispatcher, KeyCode::Enter);
        assert_eq!(toast_message(&state), Some(MSG_BUTTON_CLICKED));
    }

    #[test]
    fn test_switch_toggle_round_trip() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, MY_SWITCH);

        press(&mut state, &mut dispatcher, KeyCode::Char(' '));
        assert!(state.switch_on);
        assert_eq!(toast_message(&state), Some(MSG_SWITCH_ON));

        press(&mut state, &mut dispatcher, KeyCode::Char(' '));
        assert!(!state.switch_on);
        assert_eq!(toast_message(&state), Some(MSG_SWITCH_OFF));
    }

    #[test]
    fn test_text_slider_adjustment_starts_drag_and_sets_size() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, TEXT_SIZE_SLIDER);

        press(&mut state, &mut dispatcher, KeyCode::Right);
        assert!(state.drag.is_some());
        assert_eq!(toast_message(&state), Some(MSG_DRAG_START));
        assert_eq!(state.text_progress, 29);
        assert_eq!(state.text_size, 29);
    }

    #[test]
    fn test_text_size_floors_at_minimum() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, TEXT_SIZE_SLIDER);

        // Walk the slider all the way down.
        for _ in 0..30 {
            press(&mut state, &mut dispatcher, KeyCode::Left);
        }
        assert_eq!(state.text_progress, 0);
        assert_eq!(state.text_size, bindings::MIN_TEXT_SIZE);
    }

    #[test]
    fn test_opacity_slider_drags_silently() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, OPACITY_SLIDER);

        // Already at 100: gesture starts, position does not move.
        press(&mut state, &mut dispatcher, KeyCode::Right);
        assert!(state.drag.is_some());
        assert!(state.toast.is_none());
        assert_eq!(state.opacity_progress, 100);

        press(&mut state, &mut dispatcher, KeyCode::Left);
        assert_eq!(state.opacity_progress, 95);
        assert!((state.image_alpha - 0.95).abs() < f32::EPSILON);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_focus_change_releases_drag() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, TEXT_SIZE_SLIDER);
        press(&mut state, &mut dispatcher, KeyCode::Right);
        assert!(state.drag.is_some());

        press(&mut state, &mut dispatcher, KeyCode::Tab);
        assert!(state.drag.is_none());
        assert_eq!(toast_message(&state), Some(MSG_DRAG_STOP));
    }

    #[test]
    fn test_idle_tick_releases_drag() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, TEXT_SIZE_SLIDER);
        press(&mut state, &mut dispatcher, KeyCode::Right);

        state.drag.as_mut().unwrap().last_input =
            Instant::now() - state.config.drag_release() - Duration::from_millis(1);
        update(&mut state, &mut dispatcher, UiEvent::Tick);
        assert!(state.drag.is_none());
        assert_eq!(toast_message(&state), Some(MSG_DRAG_STOP));
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, MY_BUTTON);
        press(&mut state, &mut dispatcher, KeyCode::Enter);
        assert!(state.toast.is_some());

        state.toast.as_mut().unwrap().shown_at =
            Instant::now() - state.config.toast_duration() * 2;
        update(&mut state, &mut dispatcher, UiEvent::Tick);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_arrow_keys_on_buttons_are_ignored() {
        let (mut state, mut dispatcher) = demo();
        focus_on(&mut state, MY_BUTTON);
        press(&mut state, &mut dispatcher, KeyCode::Right);
        assert!(state.drag.is_none());
        assert!(state.toast.is_none());
    }
}
