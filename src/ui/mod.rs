//! UI module for rendering the TUI

mod components;
mod forms;
mod landing;
mod layout;
mod thank_you;
mod theme;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.state.theme);
    let area = frame.area();

    // Paint the theme background
    frame.render_widget(Block::default().style(palette.base()), area);

    let main_area = layout::create_layout(area);

    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app, &palette),
        View::Form => forms::draw_registration_form(frame, main_area, app, &palette),
        View::Confirmation => thank_you::draw(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, app, &palette);

    // Alerts sit above everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, &palette);
    }
}
