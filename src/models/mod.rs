use serde::{Deserialize, Serialize};
use std::fmt;

/// Internship track a student applies into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Track {
    SoftwareEngineering,
    CyberSecurity,
    MachineLearning,
    ProductDesign,
    /// Track strings are backend-owned; unknown values are preserved, not rejected
    Other(String),
}

impl Track {
    /// The fixed tracks offered on the application form, in display order
    pub const ALL: [Track; 4] = [
        Track::SoftwareEngineering,
        Track::CyberSecurity,
        Track::MachineLearning,
        Track::ProductDesign,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Track::SoftwareEngineering => "Software Engineering",
            Track::CyberSecurity => "Cyber Security",
            Track::MachineLearning => "Machine Learning",
            Track::ProductDesign => "Product Design",
            Track::Other(name) => name,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Track {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Software Engineering" => Track::SoftwareEngineering,
            "Cyber Security" => Track::CyberSecurity,
            "Machine Learning" => Track::MachineLearning,
            "Product Design" => Track::ProductDesign,
            _ => Track::Other(value),
        }
    }
}

impl From<Track> for String {
    fn from(value: Track) -> Self {
        value.as_str().to_string()
    }
}

/// A registered student as returned by `GET /student`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: Option<String>,
    pub level: Option<String>,
    pub track: Track,
    pub institution: String,
    pub location: Option<String>,
    pub resume_url: Option<String>,
    pub skills: Option<String>,
    pub linkedin: Option<String>,
}

/// Payload for `POST /student`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course_of_study: String,
    pub level_of_study: String,
    pub track: Track,
    pub institution: String,
    /// Empty string when no resume was uploaded
    pub resume_url: String,
    /// Comma-separated; empty string when not provided
    pub skills: String,
    /// Empty string when not provided
    pub linkedin_profile: String,
}

/// Payload for `POST /company`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistration {
    pub company_name: String,
    pub contact_email: String,
    pub location: String,
    /// Comma-separated; empty string when not provided
    pub positions: String,
    pub requirements: String,
}

/// Response envelope for the paginated student listing
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope {
    pub status: i64,
    pub message: String,
    pub data: StudentPage,
}

/// One page of the cursor-paginated student collection.
///
/// Cursors are opaque tokens minted by the backend; the client only echoes
/// them back on the next request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPage {
    #[serde(rename = "data")]
    pub items: Vec<StudentRecord>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub next_cursor: Option<String>,
    pub previous_cursor: Option<String>,
}

/// Response from `POST /file-upload`
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub page_limit: usize,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Ok(Config {
            api_url: std::env::var("COMPASS_API_URL")
                .unwrap_or_else(|_| "https://tech-compass.onrender.com".to_string()),
            page_limit: std::env::var("COMPASS_PAGE_LIMIT")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap_or(1000),
            timeout_secs: std::env::var("COMPASS_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}
