//! Form rendering module
//!
//! - `field_renderer`: floating-label field widget
//! - `registration_form`: the registration screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration_form;
