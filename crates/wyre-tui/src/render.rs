//! Pure view/render functions for the demo screen.
//!
//! Functions here take `&AppState` by immutable reference and draw to a
//! ratatui frame. Never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use unicode_width::UnicodeWidthStr;
use wyre_core::WidgetId;

use crate::state::AppState;
use crate::widgets::{ANON_BUTTON, MY_BUTTON, MY_SWITCH, OPACITY_SLIDER, TEXT_SIZE_SLIDER, info};

/// Height of the title line.
const TITLE_HEIGHT: u16 = 1;
/// Height of a bordered single-line widget row.
const ROW_HEIGHT: u16 = 3;
/// Height of the sample text pane.
const SAMPLE_HEIGHT: u16 = 5;
/// Height of the image placeholder pane.
const IMAGE_HEIGHT: u16 = 6;
/// Height of the key hint line.
const HINT_HEIGHT: u16 = 1;

const KEY_HINTS: &str =
    "Tab/↑↓ focus · Enter/Space activate · ←/→ adjust slider · q quit";

/// Renders the entire demo screen to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let [title, buttons, switch, sample, text_gauge, image, opacity_gauge, _, hints] =
        Layout::vertical([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(SAMPLE_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Length(IMAGE_HEIGHT),
            Constraint::Length(ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HINT_HEIGHT),
        ])
        .areas(area);

    render_title(frame, title);
    render_buttons(state, frame, buttons);
    render_switch(state, frame, switch);
    render_sample_text(state, frame, sample);
    render_slider(
        state,
        frame,
        text_gauge,
        TEXT_SIZE_SLIDER,
        state.text_progress,
    );
    render_image(state, frame, image);
    render_slider(
        state,
        frame,
        opacity_gauge,
        OPACITY_SLIDER,
        state.opacity_progress,
    );
    render_hints(frame, hints);

    if let Some(toast) = &state.toast {
        render_toast(&toast.message, frame, area);
    }
}

fn widget_block(state: &AppState, id: WidgetId) -> Block<'static> {
    let label = info(id).map_or("", |w| w.label);
    let style = if state.focused().id == id {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(label)
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("wyre — widget listeners demo")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_buttons(state: &AppState, frame: &mut Frame, area: Rect) {
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    for (id, area) in [(MY_BUTTON, left), (ANON_BUTTON, right)] {
        let label = info(id).map_or("", |w| w.label);
        let button = Paragraph::new(format!("[ {label} ]"))
            .alignment(Alignment::Center)
            .block(widget_block(state, id));
        frame.render_widget(button, area);
    }
}

fn render_switch(state: &AppState, frame: &mut Frame, area: Rect) {
    let (text, style) = if state.switch_on {
        ("ON ", Style::default().fg(Color::Green))
    } else {
        ("OFF", Style::default().fg(Color::Red))
    };
    let line = Line::from(vec![
        Span::raw("state: "),
        Span::styled(text, style.add_modifier(Modifier::BOLD)),
    ]);
    let switch = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(widget_block(state, MY_SWITCH));
    frame.render_widget(switch, area);
}

fn render_sample_text(state: &AppState, frame: &mut Frame, area: Rect) {
    // Terminals cannot scale glyphs; the size readout stands in for the
    // point size, with emphasis stepping up at larger values.
    let mut style = Style::default();
    if state.text_size >= 30 {
        style = style.add_modifier(Modifier::BOLD);
    }
    if state.text_size >= 70 {
        style = style.fg(Color::Yellow);
    }
    let lines = vec![
        Line::from(Span::styled("The quick brown fox jumps over the lazy dog", style)),
        Line::from(format!("size: {}pt", state.text_size)),
    ];
    let sample = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Sample text"));
    frame.render_widget(sample, area);
}

fn render_slider(state: &AppState, frame: &mut Frame, area: Rect, id: WidgetId, progress: u16) {
    let gauge = Gauge::default()
        .block(widget_block(state, id))
        .gauge_style(Style::default().fg(Color::Blue))
        .ratio(f64::from(progress) / 100.0)
        .label(format!("{progress}/100"));
    frame.render_widget(gauge, area);
}

fn render_image(state: &AppState, frame: &mut Frame, area: Rect) {
    // Transparency approximated by dimming the fill toward the background.
    let level = (state.image_alpha.clamp(0.0, 1.0) * 255.0) as u8;
    let fill_style = Style::default().fg(Color::Rgb(level, level, level));
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = (0..inner_height)
        .map(|_| Line::from(Span::styled("▓".repeat(inner_width), fill_style)))
        .collect();
    let image = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Image (alpha {:.2})", state.image_alpha)),
    );
    frame.render_widget(image, area);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(KEY_HINTS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, area);
}

/// Draws the transient toast in the bottom-right corner, above the hints.
fn render_toast(message: &str, frame: &mut Frame, area: Rect) {
    let padded = format!(" {message} ");
    let width = (padded.width() as u16).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.bottom().saturating_sub(HINT_HEIGHT + 1),
        width,
        height: 1,
    };
    let toast = Paragraph::new(padded).style(Style::default().fg(Color::Black).bg(Color::Yellow));
    frame.render_widget(toast, rect);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_render_smoke() {
        let mut state = AppState::new(DemoConfig::default());
        state.show_toast("Button clicked!");

        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(&state, frame)).unwrap();

        let dump = format!("{:?}", terminal.backend().buffer());
        assert!(dump.contains("Sample text"));
        assert!(dump.contains("Button clicked!"));
    }
}
