//! HTTP client for the registration endpoint
//!
//! Posts the form as a JSON object and maps the reply onto
//! [`RegistrationReceipt`] or [`SubmitError`].

use super::error::SubmitError;
use super::traits::RegistrationApi;
use crate::state::FormData;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Default registration endpoint
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/register";

/// What the server said when it accepted a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub status: u16,
    pub message: Option<String>,
}

/// Client for the remote registration API
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RegistrationClient {
    /// Create a client for the given endpoint. No request timeout is set.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SubmitError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(&self, payload: &FormData) -> Result<RegistrationReceipt, SubmitError> {
        tracing::debug!("Posting registration to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        interpret_reply(status.as_u16(), status.is_success(), &body)
    }
}

/// Map a status code and raw body onto the submission result.
///
/// The body must be JSON whatever the status. A body that does not parse,
/// or a `null` body on a failure status, is treated like a transport failure.
fn interpret_reply(
    status: u16,
    is_success: bool,
    body: &str,
) -> Result<RegistrationReceipt, SubmitError> {
    let value: Value = serde_json::from_str(body)?;

    if is_success {
        return Ok(RegistrationReceipt {
            status,
            message: reply_text(&value, "message"),
        });
    }

    // A null body has no `error` to read from
    if value.is_null() {
        return Err(SubmitError::InvalidResponse(format!(
            "null body with status {status}"
        )));
    }

    Err(SubmitError::Rejected {
        status,
        message: reply_text(&value, "error"),
    })
}

/// A scalar reply field rendered as alert text. Empty, zero, false and
/// non-scalar values count as absent.
fn reply_text(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}
