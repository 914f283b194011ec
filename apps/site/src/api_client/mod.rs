/// Institute API client: the single point of entry for every call to the
/// institute backend.
///
/// No page handler talks to the backend directly: they all go through
/// `InstituteApi`, which `ApiClient` implements over reqwest.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::catalog::{Course, DataEnvelope, FacultyMember};
use crate::models::enquiry::{Acknowledgement, AdmissionApplication, ContactMessage};
use crate::models::library::{Book, LoginRequest, RegisterRequest, TokenResponse};

#[cfg(test)]
pub mod mock;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API base URL: {0}")]
    BaseUrl(String),
}

impl ApiError {
    /// The message the backend attached to a failed response, if any.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            ApiError::Api {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Parse(_) | ApiError::BaseUrl(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Every backend operation the site performs. Carried in `AppState` as
/// `Arc<dyn InstituteApi>` so handlers can run against a test double.
#[async_trait]
pub trait InstituteApi: Send + Sync {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;
    async fn list_faculty(&self) -> Result<Vec<FacultyMember>, ApiError>;
    async fn apply_admission(&self, application: &AdmissionApplication) -> Result<(), ApiError>;
    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError>;
    async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError>;
    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError>;
    async fn list_books(&self, token: &str) -> Result<Vec<Book>, ApiError>;
    async fn borrow_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError>;
    async fn return_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Empty JSON object sent as the body of the borrow/return PUTs.
#[derive(Serialize)]
struct EmptyBody {}

/// reqwest wrapper bound to one base URL. Every JSON request carries
/// `content-type: application/json`; nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ApiError::BaseUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::BaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url,
        })
    }

    /// Base URL with `segments` appended. Each segment is percent-encoded, so
    /// a `/` or `?` inside an id cannot change the upstream path or query.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends the request and decodes a 2xx body as `T`. Non-2xx responses are
    /// mapped to `ApiError::Api`, keeping the backend's `message` when present.
    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("{endpoint}: request failed: {e}");
            ApiError::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty());
            warn!("{endpoint}: backend returned {status}: {body}");
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!("{endpoint}: {status}, {} bytes", body.len());

        // Some acknowledgements come back with an empty body.
        let body = if body.trim().is_empty() { "{}" } else { &body };
        serde_json::from_str(body).map_err(ApiError::Parse)
    }

    fn json_post<B: Serialize + ?Sized>(&self, path: &[&str], body: &B) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .header("content-type", "application/json")
            .json(body)
    }

    fn authorized_put(&self, path: &[&str], token: &str) -> RequestBuilder {
        self.client
            .put(self.url(path))
            .bearer_auth(token)
            .header("content-type", "application/json")
            .json(&EmptyBody {})
    }
}

#[async_trait]
impl InstituteApi for ApiClient {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let envelope: DataEnvelope<Course> = self
            .send("GET /courses", self.client.get(self.url(&["courses"])))
            .await?;
        Ok(envelope.data)
    }

    async fn list_faculty(&self) -> Result<Vec<FacultyMember>, ApiError> {
        let envelope: DataEnvelope<FacultyMember> = self
            .send("GET /faculty", self.client.get(self.url(&["faculty"])))
            .await?;
        Ok(envelope.data)
    }

    async fn apply_admission(&self, application: &AdmissionApplication) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .send(
                "POST /admissions/apply",
                self.json_post(&["admissions", "apply"], application),
            )
            .await?;
        Ok(())
    }

    async fn send_contact(&self, message: &ContactMessage) -> Result<Option<String>, ApiError> {
        let ack: Acknowledgement = self
            .send("POST /contact", self.json_post(&["contact"], message))
            .await?;
        Ok(ack.message)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .send(
                "POST /auth/register",
                self.json_post(&["auth", "register"], request),
            )
            .await?;
        Ok(response.token)
    }

    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .send("POST /auth/login", self.json_post(&["auth", "login"], request))
            .await?;
        Ok(response.token)
    }

    async fn list_books(&self, token: &str) -> Result<Vec<Book>, ApiError> {
        self.send(
            "GET /library",
            self.client.get(self.url(&["library"])).bearer_auth(token),
        )
        .await
    }

    async fn borrow_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError> {
        self.send(
            "PUT /library/borrow",
            self.authorized_put(&["library", "borrow", book_id], token),
        )
        .await
    }

    async fn return_book(&self, token: &str, book_id: &str) -> Result<Book, ApiError> {
        self.send(
            "PUT /library/return",
            self.authorized_put(&["library", "return", book_id], token),
        )
        .await
    }
}
