//! Registration form screen

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::RegistrationForm;
use crate::ui::components::{centered_button_area, render_button, BUTTON_HEIGHT};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const TITLE: &str = "Event Registration";
const SUBTITLE: &str = "Fill in your details to join this amazing event";

/// Label on the submit button for the current request state
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Submitting..."
    } else {
        "Submit Registration"
    }
}

/// Draw the registration form
pub fn draw_registration_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(form) = &app.state.form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields + submit
            Constraint::Length(1), // Back hint
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(palette.muted))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    draw_rows(frame, chunks[1], form, palette);

    let back = Paragraph::new(Span::styled(
        "← Esc: Back to Home",
        Style::default().fg(palette.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(back, chunks[2]);
}

/// Draw as many rows as fit, scrolled so the focused row is visible
fn draw_rows(frame: &mut Frame, area: Rect, form: &RegistrationForm, palette: &Palette) {
    let schema = form.schema();
    let controller = &form.controller;

    let mut heights: Vec<u16> = schema.fields.iter().map(field_height).collect();
    heights.push(BUTTON_HEIGHT);

    let first = first_visible_row(&heights, form.active_field_index, area.height);
    let bottom = area.y + area.height;
    let mut y = area.y;

    for (index, &height) in heights.iter().enumerate().skip(first) {
        if y + height > bottom {
            break;
        }
        let row = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        match schema.field(index) {
            Some(spec) => draw_field(
                frame,
                row,
                spec,
                form.value_of(&spec.name),
                controller.errors().get(&spec.name),
                index == form.active_field_index,
                palette,
            ),
            None => render_button(
                frame,
                centered_button_area(row, 28),
                submit_label(controller.is_submitting()),
                form.is_submit_row_active(),
                !controller.is_submitting(),
                palette,
            ),
        }
        y += height;
    }
}

/// First row to draw so rows `first..=active` fit in `available` lines
fn first_visible_row(heights: &[u16], active: usize, available: u16) -> usize {
    let active = active.min(heights.len().saturating_sub(1));
    let mut first = 0;
    while first < active && heights[first..=active].iter().sum::<u16>() > available {
        first += 1;
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_tracks_request() {
        assert_eq!(submit_label(false), "Submit Registration");
        assert_eq!(submit_label(true), "Submitting...");
    }

    #[test]
    fn test_first_visible_row_without_scroll() {
        assert_eq!(first_visible_row(&[4, 4, 4, 3], 3, 20), 0);
    }

    #[test]
    fn test_first_visible_row_scrolls_to_active() {
        // Rows 2..=3 need 7 lines; 0..=3 would need 15
        assert_eq!(first_visible_row(&[4, 4, 4, 3], 3, 8), 2);
    }

    #[test]
    fn test_first_visible_row_never_passes_active() {
        assert_eq!(first_visible_row(&[6, 6], 1, 2), 1);
    }
}
