use tracing::warn;

use crate::api::{ApiError, CompassBackend};
use crate::models::{StudentApplication, Track};
use crate::notify::Notifier;
use crate::validate::{FieldFormat, FieldSpec};

use super::resume::ResumeUpload;
use super::FormField;

/// Student application fields, in display order
pub static STUDENT_FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        name: "name",
        label: "Full Name",
        placeholder: "John Doe",
        required: true,
        max_len: 100,
        format: FieldFormat::Any,
        required_message: "Name is required",
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        placeholder: "john@example.com",
        required: true,
        max_len: 254,
        format: FieldFormat::Email,
        required_message: "Invalid email address",
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        placeholder: "+234 801 234 5678",
        required: true,
        max_len: 32,
        format: FieldFormat::Any,
        required_message: "Phone is required",
    },
    FieldSpec {
        name: "institution",
        label: "Institution",
        placeholder: "University of Lagos",
        required: true,
        max_len: 200,
        format: FieldFormat::Any,
        required_message: "Institution is required",
    },
    FieldSpec {
        name: "courseOfStudy",
        label: "Course of Study",
        placeholder: "Computer Science",
        required: true,
        max_len: 100,
        format: FieldFormat::Any,
        required_message: "Course of study is required",
    },
    FieldSpec {
        name: "levelOfStudy",
        label: "Level of Study",
        placeholder: "300 Level",
        required: true,
        max_len: 50,
        format: FieldFormat::Any,
        required_message: "Level of study is required",
    },
    FieldSpec {
        name: "skills",
        label: "Skills (comma-separated)",
        placeholder: "JavaScript, React, Python",
        required: false,
        max_len: 300,
        format: FieldFormat::Any,
        required_message: "",
    },
    FieldSpec {
        name: "linkedinProfile",
        label: "LinkedIn Profile",
        placeholder: "https://linkedin.com/in/yourprofile",
        required: false,
        max_len: 300,
        format: FieldFormat::Url,
        required_message: "",
    },
];

const IDX_NAME: usize = 0;
const IDX_EMAIL: usize = 1;
const IDX_PHONE: usize = 2;
const IDX_INSTITUTION: usize = 3;
const IDX_COURSE: usize = 4;
const IDX_LEVEL: usize = 5;
const IDX_SKILLS: usize = 6;
const IDX_LINKEDIN: usize = 7;

/// Student application form: text fields, track selector, resume sub-flow
pub struct StudentForm {
    pub fields: Vec<FormField>,
    pub track: Option<Track>,
    pub track_error: Option<String>,
    pub resume: ResumeUpload,
    pub submitting: bool,
    /// Success confirmation overlay visible
    pub show_confirmation: bool,
}

impl StudentForm {
    pub fn new() -> Self {
        Self {
            fields: STUDENT_FIELDS.iter().map(FormField::new).collect(),
            track: None,
            track_error: None,
            resume: ResumeUpload::new(),
            submitting: false,
            show_confirmation: false,
        }
    }

    /// Validate every field, recording inline errors
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            ok &= field.validate();
        }
        if self.track.is_none() {
            self.track_error = Some("Track of interest is required".to_string());
            ok = false;
        } else {
            self.track_error = None;
        }
        ok
    }

    /// Cycle the track selector through the fixed options
    pub fn cycle_track(&mut self) {
        let next = match &self.track {
            None => Track::ALL[0].clone(),
            Some(track) => {
                let position = Track::ALL.iter().position(|t| t == track).unwrap_or(0);
                Track::ALL[(position + 1) % Track::ALL.len()].clone()
            }
        };
        self.track = Some(next);
        self.track_error = None;
    }

    fn to_application(&self, resume_url: String) -> StudentApplication {
        StudentApplication {
            name: self.fields[IDX_NAME].trimmed(),
            email: self.fields[IDX_EMAIL].trimmed(),
            phone: self.fields[IDX_PHONE].trimmed(),
            course_of_study: self.fields[IDX_COURSE].trimmed(),
            level_of_study: self.fields[IDX_LEVEL].trimmed(),
            track: self.track.clone().unwrap_or(Track::Other(String::new())),
            institution: self.fields[IDX_INSTITUTION].trimmed(),
            resume_url,
            skills: self.fields[IDX_SKILLS].trimmed(),
            linkedin_profile: self.fields[IDX_LINKEDIN].trimmed(),
        }
    }

    /// Gate the submission: validation, then the resume-uploaded check.
    /// Returns the payload and flips to the submitting state, or `None`
    /// with the reason surfaced (inline errors or a warning toast).
    pub fn prepare_submission(&mut self, notifier: &mut dyn Notifier) -> Option<StudentApplication> {
        if self.submitting {
            return None;
        }
        if !self.validate() {
            return None;
        }
        let resume_url = match self.resume.submission_url() {
            Ok(url) => url,
            Err(()) => {
                notifier.warning("⚠️ Please upload your resume before submitting");
                return None;
            }
        };

        self.submitting = true;
        Some(self.to_application(resume_url))
    }

    pub fn finish_submission(&mut self, result: Result<(), ApiError>, notifier: &mut dyn Notifier) {
        self.submitting = false;
        match result {
            Ok(()) => {
                notifier.success("🎉 Application submitted successfully!");
                self.show_confirmation = true;
                self.reset();
            }
            Err(error) => {
                warn!("Application submission failed: {}", error);
                notifier.error("❌ Error submitting application. Please try again.");
            }
        }
    }

    /// Full submission flow against the backend.
    /// Returns true when the POST happened and succeeded.
    pub async fn submit(
        &mut self,
        backend: &dyn CompassBackend,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let Some(application) = self.prepare_submission(notifier) else {
            return false;
        };
        let result = backend.submit_student(&application).await;
        let ok = result.is_ok();
        self.finish_submission(result, notifier);
        ok
    }

    /// Clear all fields; the confirmation flag is left for the UI to dismiss
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.track = None;
        self.track_error = None;
        self.resume.clear();
    }
}

impl Default for StudentForm {
    fn default() -> Self {
        Self::new()
    }
}
