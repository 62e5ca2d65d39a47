use async_trait::async_trait;
use thiserror::Error;

use crate::models::{CompanyRegistration, StudentApplication, StudentPage};

pub mod client;
pub use client::CompassClient;

/// Failure of a backend call.
///
/// Backend error bodies are carried verbatim and never interpreted; only the
/// HTTP status decides success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Common trait for the Tech Compass backend
#[async_trait]
pub trait CompassBackend: Send + Sync {
    async fn submit_student(&self, application: &StudentApplication) -> Result<(), ApiError>;
    async fn submit_company(&self, registration: &CompanyRegistration) -> Result<(), ApiError>;
    /// Uploads resume bytes, returning the stored file URL
    async fn upload_resume(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError>;
    /// Fetches one page of the student listing; `None` cursor requests the first page
    async fn fetch_student_page(&self, cursor: Option<&str>) -> Result<StudentPage, ApiError>;
}
