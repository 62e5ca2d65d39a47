//! Two-step resume sub-flow: select a local file, then explicitly upload it.
//!
//! Selection is purely local (validate size and extension, remember the
//! path); only the explicit upload action touches the network. A selected
//! file whose upload has not completed blocks form submission.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::api::{ApiError, CompassBackend};
use crate::notify::Notifier;
use crate::validate::check_resume_file;

#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

#[derive(Default)]
pub struct ResumeUpload {
    pub selected: Option<SelectedFile>,
    pub uploaded_url: Option<String>,
    pub uploading: bool,
    /// Selection-time validation failure, shown inline
    pub error: Option<String>,
}

impl ResumeUpload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file, replacing any previous selection and upload.
    /// No network activity happens here.
    pub fn select(&mut self, path: &Path, notifier: &mut dyn Notifier) -> bool {
        self.selected = None;
        self.uploaded_url = None;
        self.error = None;

        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(_) => {
                self.error = Some("File not found".to_string());
                return false;
            }
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Err(message) = check_resume_file(&name, metadata.len()) {
            self.error = Some(message);
            return false;
        }

        notifier.info(&format!("📄 {name} selected. Upload it before submitting."));
        self.selected = Some(SelectedFile {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        });
        true
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.uploaded_url = None;
        self.uploading = false;
        self.error = None;
    }

    /// Begin the explicit upload step; returns the file to send
    pub fn start_upload(&mut self, notifier: &mut dyn Notifier) -> Option<SelectedFile> {
        if self.uploading {
            return None;
        }
        match &self.selected {
            Some(file) => {
                self.uploading = true;
                Some(file.clone())
            }
            None => {
                notifier.error("Please select a file first");
                None
            }
        }
    }

    pub fn finish_upload(&mut self, result: Result<String, ApiError>, notifier: &mut dyn Notifier) {
        self.uploading = false;
        match result {
            Ok(url) => {
                self.uploaded_url = Some(url);
                notifier.success("✅ Resume uploaded successfully!");
            }
            Err(error) => {
                warn!("Resume upload failed: {}", error);
                self.uploaded_url = None;
                notifier.error("❌ Failed to upload resume. Please try again.");
            }
        }
    }

    /// Run the whole upload step against the backend
    pub async fn upload(
        &mut self,
        backend: &dyn CompassBackend,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let Some(file) = self.start_upload(notifier) else {
            return false;
        };

        let bytes = match tokio::fs::read(&file.path).await {
            Ok(bytes) => bytes,
            Err(error) => {
                warn!("Could not read {}: {}", file.path.display(), error);
                self.uploading = false;
                notifier.error("❌ Failed to upload resume. Please try again.");
                return false;
            }
        };

        let result = backend.upload_resume(&file.name, bytes).await;
        let uploaded = result.is_ok();
        self.finish_upload(result, notifier);
        uploaded
    }

    pub fn is_uploaded(&self) -> bool {
        self.uploaded_url.is_some()
    }

    /// URL to attach to the submission payload.
    /// `Err(())` means a file is selected but not yet uploaded.
    pub fn submission_url(&self) -> Result<String, ()> {
        match (&self.selected, &self.uploaded_url) {
            (Some(_), None) => Err(()),
            (_, Some(url)) => Ok(url.clone()),
            (None, None) => Ok(String::new()),
        }
    }
}
