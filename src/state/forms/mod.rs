//! Form domain layer
//!
//! Schema-driven form values, validation and focus handling for the
//! registration form.

mod data;
mod field;
mod form_state;
mod schema;
mod validate;

pub use data::{FormData, FormErrors};
pub use field::{FieldKind, FieldSpec, FieldValue};
pub use form_state::{Form, RegistrationForm};
pub use schema::{FormSchema, FormVariant};
pub use validate::validate;
