//! Layout components (content area, status bar)

use super::theme::Palette;
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the content column grows on large terminals
const CONTENT_MAX_WIDTH: u16 = 72;

/// Split off the bottom line for the status bar and center a content column
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(CONTENT_MAX_WIDTH);
    Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Request indicator
    if app.state.is_submitting() {
        spans.push(Span::styled(
            " ● ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::raw("   "));
    }

    spans.push(Span::raw(get_view_hints(app.state.current_view)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.status_bg).fg(palette.text));
    frame.render_widget(status, status_area);

    // Theme on the right
    let theme_hint = format!(" theme:{} ", app.state.theme.label().to_lowercase());
    let hint_width = theme_hint.len() as u16;
    let theme_area = Rect {
        x: area.width.saturating_sub(hint_width),
        y: area.height.saturating_sub(1),
        width: hint_width.min(area.width),
        height: 1,
    };
    let theme_widget =
        Paragraph::new(theme_hint).style(Style::default().bg(palette.status_bg).fg(palette.text));
    frame.render_widget(theme_widget, theme_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Landing => "Enter:get started  t:theme  q:quit".to_string(),
        View::Form => format!(
            "Tab/↑↓:move  Space:toggle  {SUBMIT_SHORTCUT}:submit  {THEME_SHORTCUT}:theme  Esc:back"
        ),
        View::Confirmation => "Any key:home".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_line() {
        let content = create_layout(Rect::new(0, 0, 40, 20));
        assert_eq!(content.height, 19);
        assert_eq!(content.width, 40);
    }

    #[test]
    fn test_layout_centers_on_wide_terminals() {
        let content = create_layout(Rect::new(0, 0, 200, 50));
        assert_eq!(content.width, CONTENT_MAX_WIDTH);
        assert_eq!(content.x, (200 - CONTENT_MAX_WIDTH) / 2);
    }

    #[test]
    fn test_form_hints_name_submit_shortcut() {
        assert!(get_view_hints(View::Form).contains(SUBMIT_SHORTCUT));
    }
}
