//! Form field value objects

use serde::{Deserialize, Serialize};

/// What kind of input a field accepts and which format rules apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    /// Mobile number, checked for exactly ten digits
    Phone,
    /// Email address, checked for a `local@domain.tld` shape
    Email,
    /// Yes/no checkbox, sent as a JSON boolean
    Flag,
}

/// Static description of one field in a form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Key used in the submitted JSON payload
    pub name: String,
    /// Label shown in the field border
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default)]
    pub multiline: bool,
    /// Overrides the "<Label> is required" message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    /// Create a new required field
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: kind != FieldKind::Flag,
            multiline: false,
            required_message: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn with_required_message(mut self, message: &str) -> Self {
        self.required_message = Some(message.to_string());
        self
    }

    /// Message reported when a required field is left blank
    pub fn required_error(&self) -> String {
        self.required_message
            .clone()
            .unwrap_or_else(|| format!("{} is required", self.label))
    }

    /// Initial value for a fresh form
    pub fn empty_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Flag => FieldValue::Flag(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for flags)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Push a character to the value. Flags ignore typed characters.
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = self {
            s.push(c);
        }
    }

    /// Remove the last character from the value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = self {
            s.pop();
        }
    }

    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = self {
            *b = !*b;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x] Yes".to_string(),
            FieldValue::Flag(false) => "[ ] No".to_string(),
        }
    }
}
