//! Client module for the remote registration endpoint

mod error;
mod http;
mod traits;

pub use error::{SubmitError, FALLBACK_FAILURE, GENERIC_FAILURE};
pub use http::{RegistrationClient, RegistrationReceipt, DEFAULT_ENDPOINT};
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
