//! Form focus state and keyboard editing

use super::field::{FieldKind, FieldSpec, FieldValue};
use super::schema::FormSchema;
use crate::state::SubmissionController;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The registration form session: submission controller plus focus
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub controller: SubmissionController,
    /// Index into the schema fields; one past the last field is the submit button
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            controller: SubmissionController::new(schema),
            active_field_index: 0,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        self.controller.schema()
    }

    /// Returns true if the submit button is currently focused
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.schema().len()
    }

    /// Spec of the focused field, `None` on the submit row
    pub fn active_spec(&self) -> Option<&FieldSpec> {
        self.schema().field(self.active_field_index)
    }

    pub fn value_of(&self, name: &str) -> Option<&FieldValue> {
        self.controller.data().get(name)
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Some(spec) = self.active_spec() {
            if spec.kind == FieldKind::Flag {
                if c == ' ' {
                    self.toggle_flag();
                }
                return;
            }
            let name = spec.name.clone();
            self.controller.update_field(&name, |v| v.push_char(c));
        }
    }

    pub fn backspace(&mut self) {
        if let Some(spec) = self.active_spec() {
            let name = spec.name.clone();
            // Nothing removed, nothing edited
            if !self.controller.data().text(&name).is_empty() {
                self.controller.update_field(&name, FieldValue::pop_char);
            }
        }
    }

    /// Enter inside a multiline field adds a newline
    pub fn newline(&mut self) -> bool {
        match self.active_spec() {
            Some(spec) if spec.multiline => {
                let name = spec.name.clone();
                self.controller.update_field(&name, |v| v.push_char('\n'));
                true
            }
            _ => false,
        }
    }

    pub fn toggle_flag(&mut self) {
        if let Some(spec) = self.active_spec() {
            if spec.kind == FieldKind::Flag {
                let name = spec.name.clone();
                self.controller.update_field(&name, FieldValue::toggle);
            }
        }
    }

    /// Move focus to the first field with an error, if any
    pub fn focus_first_error(&mut self) {
        let errors = self.controller.errors();
        let first = self
            .schema()
            .fields
            .iter()
            .position(|f| errors.contains(&f.name));
        if let Some(index) = first {
            self.active_field_index = index;
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        self.schema().len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.schema().len());
    }
}
