//! Form schemas
//!
//! The field set is configuration-driven: a schema is either one of the
//! built-in variants or a custom list of fields from the config file.

use super::field::{FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};

/// Built-in form layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// name / number / email / message
    #[default]
    Event,
    /// fullName / mobileNumber / emailId / address / referredBy / hasInterest
    Registration,
}

impl FormVariant {
    pub fn schema(self) -> FormSchema {
        match self {
            FormVariant::Event => FormSchema::event(),
            FormVariant::Registration => FormSchema::registration(),
        }
    }
}

/// Ordered list of fields making up a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn event() -> Self {
        Self::new(vec![
            FieldSpec::new("name", "Full Name", FieldKind::Text)
                .with_required_message("Full name is required"),
            FieldSpec::new("number", "Mobile Number", FieldKind::Phone)
                .with_required_message("Mobile number is required"),
            FieldSpec::new("email", "Email Address", FieldKind::Email)
                .with_required_message("Email address is required"),
            FieldSpec::new("message", "Message", FieldKind::Text).multiline(),
        ])
    }

    pub fn registration() -> Self {
        Self::new(vec![
            FieldSpec::new("fullName", "Full Name", FieldKind::Text)
                .with_required_message("Full name is required"),
            FieldSpec::new("mobileNumber", "Mobile Number", FieldKind::Phone)
                .with_required_message("Mobile number is required"),
            FieldSpec::new("emailId", "Email ID", FieldKind::Email)
                .with_required_message("Email address is required"),
            FieldSpec::new("address", "Address", FieldKind::Text).multiline(),
            FieldSpec::new("referredBy", "Referred By", FieldKind::Text).optional(),
            FieldSpec::new(
                "hasInterest",
                "Interested in future events",
                FieldKind::Flag,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&FieldSpec> {
        self.fields.get(index)
    }
}

impl Default for FormSchema {
    fn default() -> Self {
        FormVariant::default().schema()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(schema: &FormSchema) -> Vec<&str> {
        schema.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn spec<'a>(schema: &'a FormSchema, name: &str) -> Option<&'a FieldSpec> {
        schema.fields.iter().find(|f| f.name == name)
    }

    #[test]
    fn test_event_field_names() {
        assert_eq!(
            names(&FormSchema::event()),
            vec!["name", "number", "email", "message"]
        );
    }

    #[test]
    fn test_registration_field_names() {
        assert_eq!(
            names(&FormSchema::registration()),
            vec![
                "fullName",
                "mobileNumber",
                "emailId",
                "address",
                "referredBy",
                "hasInterest"
            ]
        );
    }

    #[test]
    fn test_registration_optional_fields() {
        let schema = FormSchema::registration();
        assert!(!spec(&schema, "referredBy").unwrap().required);
        assert!(!spec(&schema, "hasInterest").unwrap().required);
        assert!(spec(&schema, "address").unwrap().required);
    }

    #[test]
    fn test_default_is_event() {
        assert_eq!(FormSchema::default(), FormSchema::event());
    }

    #[test]
    fn test_variant_deserializes_lowercase() {
        let v: FormVariant = serde_json::from_str(r#""registration""#).unwrap();
        assert_eq!(v, FormVariant::Registration);
    }

    #[test]
    fn test_missing_field() {
        assert!(spec(&FormSchema::event(), "address").is_none());
        assert!(FormSchema::event().field(10).is_none());
    }
}
