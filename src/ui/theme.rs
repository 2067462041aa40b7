//! Color palettes for the light and dark themes

use crate::state::Theme;
use ratatui::style::{Color, Style};

/// Colors used across every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub status_bg: Color,
    pub confetti: [Color; 5],
}

const DARK: Palette = Palette {
    background: Color::Black,
    text: Color::White,
    muted: Color::DarkGray,
    accent: Color::Rgb(0x63, 0x66, 0xf1),
    error: Color::Rgb(0xf4, 0x3f, 0x5e),
    success: Color::Rgb(0x10, 0xb9, 0x81),
    status_bg: Color::DarkGray,
    confetti: [
        Color::Rgb(0x63, 0x66, 0xf1),
        Color::Rgb(0xf4, 0x3f, 0x5e),
        Color::Rgb(0x8b, 0x5c, 0xf6),
        Color::Rgb(0x06, 0xb6, 0xd4),
        Color::Rgb(0x10, 0xb9, 0x81),
    ],
};

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted: Color::Gray,
    accent: Color::Rgb(0x3b, 0x82, 0xf6),
    error: Color::Rgb(0xef, 0x44, 0x44),
    success: Color::Rgb(0x10, 0xb9, 0x81),
    status_bg: Color::Gray,
    confetti: [
        Color::Rgb(0x3b, 0x82, 0xf6),
        Color::Rgb(0xef, 0x44, 0x44),
        Color::Rgb(0x8b, 0x5c, 0xf6),
        Color::Rgb(0x06, 0xb6, 0xd4),
        Color::Rgb(0x10, 0xb9, 0x81),
    ],
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            DARK
        } else {
            LIGHT
        }
    }

    /// Plain text on the page background
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn confetti_color(&self, index: usize) -> Color {
        self.confetti[index % self.confetti.len()]
    }
}
