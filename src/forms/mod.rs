//! Form state for the two lead-capture flows.
//!
//! Each form is a schema-driven set of text fields plus flow state
//! (idle/submitting). Validation failures stay field-scoped and block the
//! POST; network activity happens only after a clean validation pass.

use crate::validate::FieldSpec;

pub mod company;
pub mod resume;
pub mod student;

pub use company::CompanyForm;
pub use student::StudentForm;

/// One editable text field bound to its static spec
pub struct FormField {
    pub spec: &'static FieldSpec,
    pub value: String,
    pub error: Option<String>,
}

impl FormField {
    pub fn new(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    /// Re-check the current value, recording the field error
    pub fn validate(&mut self) -> bool {
        match self.spec.check(&self.value) {
            Some(error) => {
                self.error = Some(error.message);
                false
            }
            None => {
                self.error = None;
                true
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn trimmed(&self) -> String {
        self.value.trim().to_string()
    }
}
