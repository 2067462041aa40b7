//! Trait abstraction for the registration endpoint to enable mocking in tests

use super::error::SubmitError;
use super::http::RegistrationReceipt;
use crate::state::FormData;
use async_trait::async_trait;

/// Remote registration API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit one registration. A single attempt, no retry.
    async fn register(&self, payload: &FormData) -> Result<RegistrationReceipt, SubmitError>;
}
