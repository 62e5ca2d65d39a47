use tracing::warn;

use crate::api::{ApiError, CompassBackend};
use crate::models::CompanyRegistration;
use crate::notify::Notifier;
use crate::validate::{FieldFormat, FieldSpec};

use super::FormField;

/// Company registration fields, in display order
pub static COMPANY_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "companyName",
        label: "Company Name",
        placeholder: "Acme Technologies Ltd",
        required: true,
        max_len: 100,
        format: FieldFormat::Any,
        required_message: "Company name is required",
    },
    FieldSpec {
        name: "contactEmail",
        label: "Contact Email",
        placeholder: "hr@acmetechnologies.com",
        required: true,
        max_len: 254,
        format: FieldFormat::Email,
        required_message: "Invalid email address",
    },
    FieldSpec {
        name: "location",
        label: "Location",
        placeholder: "Lagos, Nigeria",
        required: true,
        max_len: 200,
        format: FieldFormat::Any,
        required_message: "Location is required",
    },
    FieldSpec {
        name: "positions",
        label: "Available Positions (comma-separated)",
        placeholder: "Software Developer, Data Analyst, UI/UX Designer",
        required: false,
        max_len: 300,
        format: FieldFormat::Any,
        required_message: "",
    },
    FieldSpec {
        name: "requirements",
        label: "Requirements & Expectations",
        placeholder: "e.g., Proficiency in Python and JavaScript, strong problem-solving skills",
        required: false,
        max_len: 2000,
        format: FieldFormat::Any,
        required_message: "",
    },
];

const IDX_COMPANY_NAME: usize = 0;
const IDX_CONTACT_EMAIL: usize = 1;
const IDX_LOCATION: usize = 2;
const IDX_POSITIONS: usize = 3;
const IDX_REQUIREMENTS: usize = 4;

/// Company registration form
pub struct CompanyForm {
    pub fields: Vec<FormField>,
    pub submitting: bool,
}

impl CompanyForm {
    pub fn new() -> Self {
        Self {
            fields: COMPANY_FIELDS.iter().map(FormField::new).collect(),
            submitting: false,
        }
    }

    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            ok &= field.validate();
        }
        ok
    }

    fn to_registration(&self) -> CompanyRegistration {
        CompanyRegistration {
            company_name: self.fields[IDX_COMPANY_NAME].trimmed(),
            contact_email: self.fields[IDX_CONTACT_EMAIL].trimmed(),
            location: self.fields[IDX_LOCATION].trimmed(),
            positions: self.fields[IDX_POSITIONS].trimmed(),
            requirements: self.fields[IDX_REQUIREMENTS].trimmed(),
        }
    }

    /// Validation gate; flips to submitting and hands back the payload
    pub fn prepare_submission(&mut self) -> Option<CompanyRegistration> {
        if self.submitting || !self.validate() {
            return None;
        }
        self.submitting = true;
        Some(self.to_registration())
    }

    pub fn finish_submission(&mut self, result: Result<(), ApiError>, notifier: &mut dyn Notifier) {
        self.submitting = false;
        match result {
            Ok(()) => {
                notifier.success("🎉 Company registered successfully! We'll reach out soon.");
                self.reset();
            }
            Err(error) => {
                warn!("Company registration failed: {}", error);
                notifier.error("❌ Error submitting. Please try again.");
            }
        }
    }

    /// Full submission flow against the backend
    pub async fn submit(
        &mut self,
        backend: &dyn CompassBackend,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let Some(registration) = self.prepare_submission() else {
            return false;
        };
        let result = backend.submit_company(&registration).await;
        let ok = result.is_ok();
        self.finish_submission(result, notifier);
        ok
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
    }
}

impl Default for CompanyForm {
    fn default() -> Self {
        Self::new()
    }
}
