//! Declarative field validation for the lead-capture forms.
//!
//! The constraint description is plain data (field name, required-ness,
//! length cap, format) so the same schema drives both the form views and
//! the submission guards.

use url::Url;

/// Format constraint applied to a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Any,
    Email,
    Url,
}

/// Static description of one form field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub max_len: usize,
    pub format: FieldFormat,
    /// Message shown when a required field is empty
    pub required_message: &'static str,
}

/// A field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldSpec {
    /// Validate one value against this spec
    pub fn check(&self, value: &str) -> Option<FieldError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            if self.required {
                return Some(self.error(self.required_message));
            }
            // Optional fields accept the empty string regardless of format
            return None;
        }

        if trimmed.chars().count() > self.max_len {
            return Some(self.error(&format!(
                "{} must be at most {} characters",
                self.label, self.max_len
            )));
        }

        match self.format {
            FieldFormat::Any => None,
            FieldFormat::Email => {
                if is_valid_email(trimmed) {
                    None
                } else {
                    Some(self.error("Invalid email address"))
                }
            }
            FieldFormat::Url => {
                if is_valid_http_url(trimmed) {
                    None
                } else {
                    Some(self.error(&format!("Invalid {} URL", self.label)))
                }
            }
        }
    }

    fn error(&self, message: &str) -> FieldError {
        FieldError {
            field: self.name,
            message: message.to_string(),
        }
    }
}

/// Single `@`, non-empty local part, domain with a dot
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(char::is_whitespace)
        && value.matches('@').count() == 1
}

/// Absolute http(s) URL
pub fn is_valid_http_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Resume file constraints shared by selection and upload
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Validate a candidate resume file by name and size
pub fn check_resume_file(file_name: &str, size_bytes: u64) -> Result<(), String> {
    if size_bytes > MAX_RESUME_BYTES {
        return Err("Resume must be under 5MB".to_string());
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !RESUME_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Only PDF and DOC files are allowed".to_string());
    }

    Ok(())
}
