use std::sync::mpsc::{channel, Receiver};

use tokio::runtime::Runtime;

use crate::egui_app::auth::{login, register, AuthState};
use crate::egui_app::http::{ApiClient, ApiError};
use crate::egui_app::Config;
use crate::shared::auth::AuthOutcome;
use crate::shared::error::ValidationErrors;
use crate::shared::routes::{History, View};
use crate::shared::validation::{LoginForm, RegisterForm};

/// Which form a pending result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Login,
    Register,
}

type AttemptResult = Result<AuthOutcome, String>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub client: ApiClient,
    pub history: History,
    pub auth_state: AuthState,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub field_errors: ValidationErrors,
    pending: Option<(Attempt, Receiver<AttemptResult>)>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config)?;
        let history = History::new(config.base_path());
        tracing::info!(api = config.server_url(), "AppState initialized");

        Ok(Self {
            config,
            client,
            history,
            auth_state: AuthState::new(),
            login_form: LoginForm::default(),
            register_form: RegisterForm::default(),
            field_errors: ValidationErrors::new(),
            pending: None,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a finished login or registration, if one is ready
    pub fn poll_pending(&mut self) {
        let Some((attempt, rx)) = self.pending.as_ref() else {
            return;
        };
        let Ok(result) = rx.try_recv() else {
            return;
        };
        let attempt = *attempt;
        self.pending = None;
        self.auth_state.loading = false;

        match result {
            Ok(Ok(_tokens)) => {
                tracing::info!(?attempt, "authentication succeeded");
                let message = match attempt {
                    Attempt::Login => "Signed in",
                    Attempt::Register => "Account created",
                };
                self.auth_state.set_message(message.to_string());
                self.login_form.password.clear();
                self.register_form.password.clear();
                self.history.navigate_to(View::Home);
            }
            Ok(Err(unrecognized)) => {
                tracing::warn!(?attempt, status = unrecognized.status, "unexpected response");
                self.auth_state.set_error(format!(
                    "Unexpected response from server ({})",
                    unrecognized.status
                ));
            }
            Err(e) => {
                tracing::error!(?attempt, error = %e, "authentication failed");
                self.auth_state.set_error(e);
            }
        }
    }

    pub fn submit_login(&mut self) {
        if self.is_pending() {
            return;
        }
        let payload = match self.login_form.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        let client = self.client.clone();
        self.spawn(Attempt::Login, async move {
            login(&client, &payload).await
        });
    }

    pub fn submit_register(&mut self) {
        if self.is_pending() {
            return;
        }
        let payload = match self.register_form.to_payload() {
            Ok(payload) => payload,
            Err(errors) => {
                self.field_errors = errors;
                return;
            }
        };

        let client = self.client.clone();
        self.spawn(Attempt::Register, async move {
            register(&client, &payload).await
        });
    }

    fn spawn<F>(&mut self, attempt: Attempt, call: F)
    where
        F: std::future::Future<Output = Result<AuthOutcome, ApiError>> + Send + 'static,
    {
        self.field_errors = ValidationErrors::new();
        self.auth_state.loading = true;
        self.auth_state.clear_error();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match Runtime::new() {
                Ok(rt) => rt.block_on(call).map_err(|e| e.to_string()),
                Err(e) => Err(format!("Failed to create runtime: {}", e)),
            };
            let _ = tx.send(result);
        });

        self.pending = Some((attempt, rx));
    }

    /// Switch screens, dropping stale form feedback
    pub fn navigate(&mut self, view: View) {
        if self.history.current().view == view {
            return;
        }
        self.history.navigate_to(view);
        self.reset_feedback();
    }

    pub fn back(&mut self) {
        if self.history.back().is_some() {
            self.reset_feedback();
        }
    }

    pub fn forward(&mut self) {
        if self.history.forward().is_some() {
            self.reset_feedback();
        }
    }

    fn reset_feedback(&mut self) {
        self.field_errors = ValidationErrors::new();
        self.auth_state.clear_error();
    }
}
