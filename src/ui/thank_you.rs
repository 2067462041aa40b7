//! Confirmation screen shown after a successful registration

use super::theme::Palette;
use crate::app::App;
use crate::state::ConfirmationState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

const CARD_WIDTH: u16 = 60;
const CARD_HEIGHT: u16 = 14;

/// Countdown line under the message
pub fn redirect_line(remaining_secs: u64) -> String {
    let unit = if remaining_secs == 1 { "second" } else { "seconds" };
    format!("Redirecting to home page in {remaining_secs} {unit}...")
}

/// Draw the thank-you screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(confirmation) = &app.state.confirmation else {
        return;
    };

    draw_confetti(frame, frame.area(), confirmation, palette);

    let width = CARD_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let bold = Modifier::BOLD;
    let lines = vec![
        Line::from(Span::styled(
            "✓",
            Style::default().fg(palette.success).add_modifier(bold),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thank You!",
            Style::default().fg(palette.accent).add_modifier(bold),
        )),
        Line::from(Span::styled(
            "Thank you for filling the form!",
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thanks for sharing your feedback! We really value your thoughts and appreciate your time!",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Exciting news ahead! Watch your inbox for updates and important announcements.",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Registered at {}", confirmation.registered_at.format("%H:%M")),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            redirect_line(confirmation.remaining_secs()),
            Style::default().fg(palette.accent),
        )),
    ];

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines)
            .style(palette.base())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card,
    );
}

fn draw_confetti(
    frame: &mut Frame,
    area: Rect,
    confirmation: &ConfirmationState,
    palette: &Palette,
) {
    let pieces = confirmation.confetti(area.width, area.height.saturating_sub(1));
    let buffer = frame.buffer_mut();
    for piece in pieces {
        if let Some(cell) = buffer.cell_mut((area.x + piece.x, area.y + piece.y)) {
            cell.set_char(piece.glyph)
                .set_fg(palette.confetti_color(piece.color_index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_line_pluralizes() {
        assert_eq!(redirect_line(5), "Redirecting to home page in 5 seconds...");
        assert_eq!(redirect_line(1), "Redirecting to home page in 1 second...");
    }
}
