//! Application state definitions

use super::confirmation_state::ConfirmationState;
use super::forms::RegistrationForm;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Instant;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Entry screen with the call to action
    #[default]
    Landing,
    /// Registration form
    Form,
    /// Thank-you screen shown after a successful submission
    Confirmation,
}

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the terminal; resolves to dark
    #[default]
    System,
}

impl Theme {
    pub fn next(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Whether dark colors should be used
    pub fn is_dark(&self) -> bool {
        !matches!(self, Self::Light)
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub theme: Theme,
    /// Active form session, dropped when leaving the form
    pub form: Option<RegistrationForm>,
    /// Timing for the confirmation screen
    pub confirmation: Option<ConfirmationState>,
    /// When the landing screen was last entered, for its animation
    pub landing_since: Instant,
    /// Queue of alert messages shown one at a time in a modal dialog
    pub error_queue: VecDeque<String>,
    /// Transient status line message
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            theme: Theme::default(),
            form: None,
            confirmation: None,
            landing_since: Instant::now(),
            error_queue: VecDeque::new(),
            status_message: None,
        }
    }
}

impl AppState {
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Whether a registration request is in flight
    pub fn is_submitting(&self) -> bool {
        self.form
            .as_ref()
            .is_some_and(|f| f.controller.is_submitting())
    }
}
