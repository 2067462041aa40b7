//! Registration submission workflow
//!
//! Idle → (validate) → Submitting → (response) → Idle. Errors found by
//! the validator keep the controller Idle with a non-empty error set.

use super::forms::{validate, FieldValue, FormData, FormErrors, FormSchema};
use crate::client::{RegistrationReceipt, SubmitError};
use tokio::sync::mpsc::UnboundedSender;

/// Result of a submit attempt, before any network traffic
#[derive(Debug, PartialEq)]
pub enum SubmitAttempt {
    /// Validation failed; errors are now set on the controller
    Invalid,
    /// A submission is already in flight
    Busy,
    /// Validation passed; the payload to send was captured
    Started(FormData),
}

/// How an in-flight submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Server accepted the registration; show the confirmation view
    Confirmed,
    /// Anything else; the message is shown to the user
    Failed(String),
}

/// Owns the form session: values, errors and the in-flight flag
#[derive(Debug, Clone)]
pub struct SubmissionController {
    schema: FormSchema,
    data: FormData,
    errors: FormErrors,
    submitting: bool,
}

impl SubmissionController {
    pub fn new(schema: FormSchema) -> Self {
        let data = FormData::from_schema(&schema);
        Self {
            schema,
            data,
            errors: FormErrors::new(),
            submitting: false,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace a field's value and drop its stale error, if any.
    /// The field is not re-validated.
    pub fn edit_field(&mut self, name: &str, value: FieldValue) {
        if self.data.set(name, value) {
            self.errors.clear_field(name);
        }
    }

    /// Apply an in-place change to a field, with the same error clearing
    pub fn update_field(&mut self, name: &str, change: impl FnOnce(&mut FieldValue)) {
        if let Some(mut value) = self.data.get(name).cloned() {
            change(&mut value);
            self.edit_field(name, value);
        }
    }

    /// Validate and, when clean, enter the Submitting state
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.submitting {
            return SubmitAttempt::Busy;
        }

        let errors = validate(&self.schema, &self.data);
        if !errors.is_empty() {
            tracing::debug!("Submission blocked by {} field error(s)", errors.len());
            self.errors = errors;
            return SubmitAttempt::Invalid;
        }

        self.errors.clear();
        self.submitting = true;
        SubmitAttempt::Started(self.data.clone())
    }

    /// Leave the Submitting state, whatever the outcome
    pub fn finish(&mut self, result: Result<RegistrationReceipt, SubmitError>) -> Completion {
        self.submitting = false;
        match result {
            Ok(receipt) => {
                tracing::info!(
                    status = receipt.status,
                    message = receipt.message.as_deref().unwrap_or_default(),
                    "Registration accepted"
                );
                Completion::Confirmed
            }
            Err(err) => {
                tracing::warn!("Registration failed: {err}");
                Completion::Failed(err.user_message())
            }
        }
    }
}

/// Delivers the result of one in-flight request back to the UI loop.
///
/// If the request task ends without calling [`SubmissionTicket::complete`]
/// (panic or abort), dropping the ticket reports an interrupted request so
/// the in-flight flag is always released.
#[derive(Debug)]
pub struct SubmissionTicket {
    tx: Option<UnboundedSender<Result<RegistrationReceipt, SubmitError>>>,
}

impl SubmissionTicket {
    pub fn new(tx: UnboundedSender<Result<RegistrationReceipt, SubmitError>>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn complete(mut self, result: Result<RegistrationReceipt, SubmitError>) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(result);
        }
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        if let Some(tx) = self.tx.take() {
            let _ = tx.send(Err(SubmitError::Interrupted));
        }
    }
}
