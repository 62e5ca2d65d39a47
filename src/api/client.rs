use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::debug;

use crate::models::{
    ApiEnvelope, CompanyRegistration, Config, StudentApplication, StudentPage, UploadResponse,
};

use super::{ApiError, CompassBackend};

/// HTTP client for the Tech Compass backend
pub struct CompassClient {
    client: Client,
    base_url: String,
    page_limit: usize,
}

impl CompassClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent("tech-compass/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        })
    }

    /// Succeeds only on 2xx; the error body is carried but not interpreted
    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl CompassBackend for CompassClient {
    async fn submit_student(&self, application: &StudentApplication) -> Result<(), ApiError> {
        let url = format!("{}/student", self.base_url);
        debug!("Submitting student application to {}", url);

        let response = self.client.post(&url).json(application).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn submit_company(&self, registration: &CompanyRegistration) -> Result<(), ApiError> {
        let url = format!("{}/company", self.base_url);
        debug!("Submitting company registration to {}", url);

        let response = self.client.post(&url).json(registration).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn upload_resume(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, ApiError> {
        let url = format!("{}/file-upload", self.base_url);
        debug!("Uploading resume {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::ensure_success(response).await?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.file_url)
    }

    async fn fetch_student_page(&self, cursor: Option<&str>) -> Result<StudentPage, ApiError> {
        let url = match cursor {
            Some(cursor) => format!("{}/student?cursor={}", self.base_url, cursor),
            None => format!("{}/student?limit={}", self.base_url, self.page_limit),
        };
        debug!("Fetching student page: {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::ensure_success(response).await?;
        let envelope: ApiEnvelope = response.json().await?;
        debug!(
            "Received {} students (hasNextPage={})",
            envelope.data.items.len(),
            envelope.data.has_next_page
        );
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        Config {
            api_url: base_url.to_string(),
            page_limit: 1000,
            timeout_secs: 5,
        }
    }

    fn sample_application() -> StudentApplication {
        StudentApplication {
            name: "Ada Obi".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+234 801 234 5678".to_string(),
            course_of_study: "Computer Science".to_string(),
            level_of_study: "300 Level".to_string(),
            track: Track::MachineLearning,
            institution: "University of Ibadan".to_string(),
            resume_url: "https://files.example.com/ada.pdf".to_string(),
            skills: "Python, TensorFlow".to_string(),
            linkedin_profile: String::new(),
        }
    }

    fn page_body(names: &[&str], next_cursor: Option<&str>) -> serde_json::Value {
        let items: Vec<serde_json::Value> = names
            .iter()
            .map(|name| {
                serde_json::json!({
                    "id": format!("id-{name}"),
                    "name": name,
                    "email": format!("{name}@example.com"),
                    "phone": "0801",
                    "course": null,
                    "level": null,
                    "track": "Software Engineering",
                    "institution": "UNILAG",
                    "location": null,
                    "resume_url": null,
                    "skills": null,
                    "linkedin": null
                })
            })
            .collect();

        serde_json::json!({
            "status": 200,
            "message": "ok",
            "data": {
                "data": items,
                "hasNextPage": next_cursor.is_some(),
                "hasPreviousPage": false,
                "nextCursor": next_cursor,
                "previousCursor": null
            }
        })
    }

    #[tokio::test]
    async fn test_submit_student_posts_payload_verbatim() {
        let server = MockServer::start().await;
        let application = sample_application();

        Mock::given(method("POST"))
            .and(path("/student"))
            .and(body_json(&application))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompassClient::new(&test_config(&server.uri())).unwrap();
        client.submit_student(&application).await.unwrap();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/company"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = CompassClient::new(&test_config(&server.uri())).unwrap();
        let registration = CompanyRegistration {
            company_name: "Acme Technologies Ltd".to_string(),
            contact_email: "hr@acme.com".to_string(),
            location: "Lagos, Nigeria".to_string(),
            positions: String::new(),
            requirements: String::new(),
        };

        let error = client.submit_company(&registration).await.unwrap_err();
        assert_matches!(error, ApiError::Status { status: 500, ref body } if body == "boom");
    }

    #[tokio::test]
    async fn test_upload_resume_returns_file_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/file-upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "fileUrl": "https://files.example.com/cv.pdf"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompassClient::new(&test_config(&server.uri())).unwrap();
        let url = client
            .upload_resume("cv.pdf", b"%PDF-1.4".to_vec())
            .await
            .unwrap();
        assert_eq!(url, "https://files.example.com/cv.pdf");
    }

    #[tokio::test]
    async fn test_first_page_uses_limit_and_later_pages_use_cursor() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/student"))
            .and(query_param("limit", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["Ada"], Some("c1"))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/student"))
            .and(query_param("cursor", "c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["Bola"], None)))
            .expect(1)
            .mount(&server)
            .await;

        let client = CompassClient::new(&test_config(&server.uri())).unwrap();

        let first = client.fetch_student_page(None).await.unwrap();
        assert_eq!(first.items[0].name, "Ada");
        assert!(first.has_next_page);

        let second = client
            .fetch_student_page(first.next_cursor.as_deref())
            .await
            .unwrap();
        assert_eq!(second.items[0].name, "Bola");
        assert!(!second.has_next_page);
    }
}
