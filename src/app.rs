//! Application state and core logic

use crate::client::{RegistrationApi, RegistrationClient, RegistrationReceipt, SubmitError};
use crate::config::AppConfig;
use crate::state::{
    AppState, Completion, ConfirmationState, Form, RegistrationForm, SubmissionTicket,
    SubmitAttempt, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type SubmissionResult = Result<RegistrationReceipt, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded configuration
    pub config: AppConfig,
    /// Where theme changes are persisted, if anywhere
    config_path: Option<PathBuf>,
    /// Registration endpoint
    api: Arc<dyn RegistrationApi>,
    /// Request tasks report back through this channel
    submission_tx: UnboundedSender<SubmissionResult>,
    submission_rx: UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App from the user's config file
    pub fn new() -> Result<Self> {
        let (config, config_path) = load_config(AppConfig::config_path());

        let client = RegistrationClient::new(config.endpoint())?;
        tracing::info!("Registration endpoint: {}", client.endpoint());

        Ok(Self::with_api(config, config_path, Arc::new(client)))
    }

    /// Create an App around an explicit registration API
    pub fn with_api(
        config: AppConfig,
        config_path: Option<PathBuf>,
        api: Arc<dyn RegistrationApi>,
    ) -> Self {
        let (submission_tx, submission_rx) = mpsc::unbounded_channel();
        let state = AppState {
            theme: config.theme(),
            ..Default::default()
        };

        Self {
            state,
            config,
            config_path,
            api,
            submission_tx,
            submission_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the current view animates and needs fast redraws
    pub fn is_animating(&self) -> bool {
        matches!(self.state.current_view, View::Landing | View::Confirmation)
            || self.state.is_submitting()
    }

    /// Per-frame housekeeping: collect finished submissions and run the
    /// confirmation countdown
    pub fn tick(&mut self) {
        while let Ok(result) = self.submission_rx.try_recv() {
            self.apply_submission_result(result);
        }

        let expired = self.state.confirmation.as_mut().is_some_and(|c| {
            c.update();
            c.is_complete()
        });
        if expired {
            self.navigate(View::Landing);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.state.status_message = None;

        match self.state.current_view {
            View::Landing => self.handle_landing_key(key),
            View::Form => self.handle_form_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
        Ok(())
    }

    /// Switch views, setting up or tearing down per-view state
    pub fn navigate(&mut self, view: View) {
        match view {
            View::Landing => {
                self.state.form = None;
                self.state.confirmation = None;
                self.state.landing_since = std::time::Instant::now();
            }
            View::Form => {
                self.state.form = Some(RegistrationForm::new(self.config.schema()));
            }
            View::Confirmation => {
                self.state.form = None;
                self.state.confirmation =
                    Some(ConfirmationState::new(self.config.confirmation_delay()));
            }
        }
        tracing::debug!("Navigating to {view:?}");
        self.state.current_view = view;
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('g') => self.navigate(View::Form),
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the registration form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_form(),
            KeyCode::Char('t') if ctrl => self.cycle_theme(),
            KeyCode::Enter
                if self
                    .state
                    .form
                    .as_ref()
                    .is_some_and(RegistrationForm::is_submit_row_active) =>
            {
                self.submit_form()
            }
            KeyCode::Esc => {
                if self.state.is_submitting() {
                    self.state.status_message = Some("Submission in progress".to_string());
                } else {
                    self.navigate(View::Landing);
                }
            }
            _ => {
                let Some(form) = self.state.form.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Tab | KeyCode::Down => form.next_field(),
                    KeyCode::BackTab | KeyCode::Up => form.prev_field(),
                    KeyCode::Enter => {
                        if !form.newline() {
                            form.next_field();
                        }
                    }
                    KeyCode::Char(c) if !ctrl => form.input_char(c),
                    KeyCode::Backspace => form.backspace(),
                    _ => {}
                }
            }
        }
    }

    fn handle_confirmation_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut confirmation) = self.state.confirmation {
            confirmation.skip();
        }
        self.navigate(View::Landing);
    }

    /// Validate the form and, when clean, send it in a background task
    fn submit_form(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        match form.controller.begin_submit() {
            SubmitAttempt::Invalid => form.focus_first_error(),
            SubmitAttempt::Busy => {}
            SubmitAttempt::Started(payload) => {
                tracing::debug!("Submitting registration with {} field(s)", payload.len());
                let ticket = SubmissionTicket::new(self.submission_tx.clone());
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let result = api.register(&payload).await;
                    ticket.complete(result);
                });
            }
        }
    }

    /// Leave the Submitting state and route the outcome
    fn apply_submission_result(&mut self, result: SubmissionResult) {
        let Some(form) = self.state.form.as_mut() else {
            tracing::warn!("Submission finished with no active form");
            return;
        };

        match form.controller.finish(result) {
            Completion::Confirmed => self.navigate(View::Confirmation),
            Completion::Failed(message) => self.push_error(message),
        }
    }

    fn cycle_theme(&mut self) {
        let theme = self.state.theme.next();
        self.state.theme = theme;
        self.config.theme = Some(theme);
        self.state.status_message = Some(format!("Theme: {}", theme.label()));

        if let Some(ref path) = self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save theme to {}: {e}", path.display());
            }
        }
    }
}

/// Load the config at `path`. An unreadable file is left alone: the app
/// runs on defaults and never saves over it.
fn load_config(path: Option<PathBuf>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = path else {
        return (AppConfig::default(), None);
    };
    match AppConfig::load_from(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config {}: {e}", path.display());
            (AppConfig::default(), None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockRegistrationApi, GENERIC_FAILURE};
    use crate::state::{FieldValue, Theme};
    use std::time::{Duration, Instant};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(api: MockRegistrationApi) -> App {
        App::with_api(AppConfig::default(), None, Arc::new(api))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Open the form and fill every field of the event layout
    fn fill_event_form(app: &mut App) {
        app.handle_key(key(KeyCode::Enter)).unwrap();
        type_text(app, "Ada Lovelace");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "555-123-4567");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(app, "Count me in");
    }

    async fn settle(app: &mut App) {
        let result = app.submission_rx.recv().await.unwrap();
        app.apply_submission_result(result);
    }

    fn form(app: &App) -> &RegistrationForm {
        app.state.form.as_ref().unwrap()
    }

    mod landing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_landing() {
            let app = app_with(MockRegistrationApi::new());
            assert_eq!(app.state.current_view, View::Landing);
            assert!(!app.should_quit());
        }

        #[test]
        fn test_enter_opens_fresh_form() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(form(&app).schema().len(), 4);
        }

        #[test]
        fn test_q_quits() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Char('q'))).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_t_cycles_theme() {
            let mut app = app_with(MockRegistrationApi::new());
            assert_eq!(app.state.theme, Theme::System);
            app.handle_key(key(KeyCode::Char('t'))).unwrap();
            assert_eq!(app.state.theme, Theme::Light);
            assert_eq!(app.config.theme, Some(Theme::Light));
        }

        #[test]
        fn test_theme_comes_from_config() {
            let config = AppConfig {
                theme: Some(Theme::Dark),
                ..Default::default()
            };
            let app = App::with_api(config, None, Arc::new(MockRegistrationApi::new()));
            assert_eq!(app.state.theme, Theme::Dark);
        }

        #[test]
        fn test_theme_change_keeps_malformed_config_intact() {
            let dir = std::env::temp_dir()
                .join(format!("register-tui-app-test-{}-malformed", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join("config.json");
            let original = r#"{"endpoint": "https://events.example.com/api/register", "theme": "dark",}"#;
            std::fs::write(&path, original).unwrap();

            let (config, config_path) = load_config(Some(path.clone()));
            assert_eq!(config_path, None);
            assert_eq!(config.theme, None);

            let mut app = App::with_api(config, config_path, Arc::new(MockRegistrationApi::new()));
            app.handle_key(key(KeyCode::Char('t'))).unwrap();
            assert_eq!(app.state.theme, Theme::Light);
            assert_eq!(std::fs::read_to_string(&path).unwrap(), original);

            std::fs::remove_dir_all(&dir).ok();
        }

        #[test]
        fn test_theme_change_saves_valid_config() {
            let dir = std::env::temp_dir()
                .join(format!("register-tui-app-test-{}-valid", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            let path = dir.join("config.json");
            std::fs::write(&path, r#"{"theme": "light"}"#).unwrap();

            let (config, config_path) = load_config(Some(path.clone()));
            assert_eq!(config_path.as_deref(), Some(path.as_path()));

            let mut app = App::with_api(config, config_path, Arc::new(MockRegistrationApi::new()));
            app.handle_key(key(KeyCode::Char('t'))).unwrap();
            assert_eq!(app.state.theme, Theme::Dark);
            assert_eq!(AppConfig::load_from(&path).unwrap().theme, Some(Theme::Dark));

            std::fs::remove_dir_all(&dir).ok();
        }
    }

    mod form_editing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(form(&app).controller.data().text("name"), "Ad");
        }

        #[test]
        fn test_typing_t_in_form_is_text_not_theme() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "t");
            assert_eq!(app.state.theme, Theme::System);
            assert_eq!(form(&app).controller.data().text("name"), "t");

            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.state.theme, Theme::Light);
        }

        #[test]
        fn test_enter_on_single_line_field_moves_on() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(form(&app).active_field_index, 1);
        }

        #[test]
        fn test_esc_returns_to_landing_and_discards_form() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Esc)).unwrap();

            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.state.form.is_none());

            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(form(&app).controller.data().text("name"), "");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_submit_empty_form_shows_errors_without_request() {
            let mut api = MockRegistrationApi::new();
            api.expect_register().times(0);
            let mut app = app_with(api);

            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            let form = form(&app);
            assert_eq!(form.controller.errors().len(), 4);
            assert!(!form.controller.is_submitting());
            assert_eq!(app.state.current_view, View::Form);
        }

        #[test]
        fn test_invalid_submit_focuses_first_error() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::BackTab)).unwrap(); // submit row
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(form(&app).active_spec().unwrap().name, "number");
        }

        #[test]
        fn test_editing_clears_only_that_error() {
            let mut app = app_with(MockRegistrationApi::new());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(ctrl('s')).unwrap();

            type_text(&mut app, "A");

            let errors = form(&app).controller.errors();
            assert!(!errors.contains("name"));
            assert_eq!(errors.len(), 3);
        }

        #[tokio::test]
        async fn test_success_navigates_to_confirmation() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .times(1)
                .returning(|_| Ok(RegistrationReceipt { status: 200, message: None }));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            assert!(app.state.is_submitting());

            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Confirmation);
            assert!(app.state.form.is_none());
            assert!(app.state.confirmation.is_some());
            assert!(!app.state.is_submitting());
        }

        #[tokio::test]
        async fn test_server_rejection_shows_alert_and_keeps_data() {
            let mut api = MockRegistrationApi::new();
            api.expect_register().times(1).returning(|_| {
                Err(SubmitError::Rejected {
                    status: 400,
                    message: Some("Email already registered".to_string()),
                })
            });
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Form);
            assert_eq!(app.state.current_error(), Some("Email already registered"));
            assert!(!app.state.is_submitting());
            assert_eq!(form(&app).controller.data().text("email"), "ada@example.com");

            // Alert is modal: typing does nothing until it is dismissed
            type_text(&mut app, "x");
            assert_eq!(form(&app).controller.data().text("message"), "Count me in");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_transport_failure_shows_generic_alert() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .times(1)
                .returning(|_| Err(SubmitError::Transport("connection refused".to_string())));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_error(), Some(GENERIC_FAILURE));
            assert!(!app.state.is_submitting());
        }

        #[tokio::test]
        async fn test_repeated_submit_sends_one_request() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .times(1)
                .returning(|_| Ok(RegistrationReceipt { status: 201, message: None }));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Confirmation);
        }

        #[tokio::test]
        async fn test_edits_while_in_flight_do_not_change_payload() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .withf(|payload| payload.text("message") == "Count me in")
                .times(1)
                .returning(|_| Err(SubmitError::Rejected { status: 500, message: None }));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            type_text(&mut app, "!");
            assert_eq!(
                form(&app).controller.data().get("message"),
                Some(&FieldValue::Text("Count me in!".to_string()))
            );

            settle(&mut app).await;
            assert_eq!(form(&app).controller.data().text("message"), "Count me in!");
        }

        #[tokio::test]
        async fn test_esc_is_ignored_while_submitting() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .returning(|_| Ok(RegistrationReceipt { status: 200, message: None }));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(key(KeyCode::Esc)).unwrap();

            assert_eq!(app.state.current_view, View::Form);
            assert!(app.state.status_message.is_some());
            settle(&mut app).await;
        }

        #[tokio::test]
        async fn test_tick_collects_finished_submission() {
            let mut api = MockRegistrationApi::new();
            api.expect_register()
                .returning(|_| Ok(RegistrationReceipt { status: 200, message: None }));
            let mut app = app_with(api);

            fill_event_form(&mut app);
            app.handle_key(ctrl('s')).unwrap();

            for _ in 0..100 {
                tokio::task::yield_now().await;
                app.tick();
                if app.state.current_view == View::Confirmation {
                    break;
                }
            }
            assert_eq!(app.state.current_view, View::Confirmation);
        }
    }

    mod confirmation {
        use super::*;
        use pretty_assertions::assert_eq;

        fn confirmed_app() -> App {
            let mut app = app_with(MockRegistrationApi::new());
            app.navigate(View::Confirmation);
            app
        }

        #[test]
        fn test_any_key_returns_to_landing() {
            let mut app = confirmed_app();
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.current_view, View::Landing);
            assert!(app.state.confirmation.is_none());
        }

        #[test]
        fn test_tick_before_delay_stays() {
            let mut app = confirmed_app();
            app.tick();
            assert_eq!(app.state.current_view, View::Confirmation);
        }

        #[test]
        fn test_tick_after_delay_returns_to_landing() {
            let mut app = confirmed_app();
            // Monotonic clock too young to go back 6s
            let Some(start) = Instant::now().checked_sub(Duration::from_secs(6)) else {
                return;
            };
            if let Some(ref mut c) = app.state.confirmation {
                c.start_time = start;
            }
            app.tick();
            assert_eq!(app.state.current_view, View::Landing);
        }
    }

    #[test]
    fn test_late_result_without_form_is_ignored() {
        let mut app = app_with(MockRegistrationApi::new());
        app.apply_submission_result(Err(SubmitError::Interrupted));
        assert!(!app.state.has_errors());
        assert_eq!(app.state.current_view, View::Landing);
    }

    #[test]
    fn test_is_animating() {
        let mut app = app_with(MockRegistrationApi::new());
        assert!(app.is_animating());
        app.navigate(View::Form);
        assert!(!app.is_animating());
    }
}
