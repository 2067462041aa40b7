//! Landing screen with the call to action

use super::components::{centered_button_area, render_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const BRAND: &str = "Wellness Immigration";
const SUBTITLE: &str = "We'd love to hear your thoughts! Take a moment to complete the form \
                        and let us know how we can make things even better.";

/// Length of one bob cycle for the decorative dots
const BOB_PERIOD: Duration = Duration::from_millis(1200);
const DOT_COUNT: usize = 3;

/// Draw the landing screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Top padding (flex)
            Constraint::Length(1),             // Brand
            Constraint::Length(1),             // Spacer
            Constraint::Length(2),             // Heading
            Constraint::Length(1),             // Spacer
            Constraint::Length(3),             // Subtitle
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Get Started
            Constraint::Length(1),             // Spacer
            Constraint::Length(2),             // Dots
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        BRAND,
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(brand, chunks[1]);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            "Share your experience",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "By filling this Form",
            Style::default().fg(palette.accent),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[3]);

    let subtitle = Paragraph::new(SUBTITLE)
        .style(Style::default().fg(palette.muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(subtitle, chunks[5]);

    render_button(
        frame,
        centered_button_area(chunks[7], 20),
        "Get Started →",
        true,
        true,
        palette,
    );

    draw_dots(frame, chunks[9], app.state.landing_since.elapsed(), palette);
}

/// Row offsets (0 or 1) for each dot at `elapsed`
fn dot_offsets(elapsed: Duration) -> [u16; DOT_COUNT] {
    let period = BOB_PERIOD.as_secs_f32();
    let mut offsets = [0; DOT_COUNT];
    for (i, offset) in offsets.iter_mut().enumerate() {
        // Each dot trails the previous by a sixth of a cycle
        let phase = (elapsed.as_secs_f32() / period + i as f32 / 6.0).fract();
        let half = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
        *offset = simple_easing::sine_in_out(half).round() as u16;
    }
    offsets
}

fn draw_dots(frame: &mut Frame, area: Rect, elapsed: Duration, palette: &Palette) {
    let width = (DOT_COUNT * 2 - 1) as u16;
    if area.height < 2 || area.width < width {
        return;
    }
    let x = area.x + area.width.saturating_sub(width) / 2;

    for (i, offset) in dot_offsets(elapsed).into_iter().enumerate() {
        let dot_area = Rect {
            x: x + i as u16 * 2,
            y: area.y + offset,
            width: 1,
            height: 1,
        };
        let dot = Paragraph::new(Span::styled("●", Style::default().fg(palette.confetti_color(i))));
        frame.render_widget(dot, dot_area);
    }
}
