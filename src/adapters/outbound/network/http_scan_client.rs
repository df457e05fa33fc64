use crate::ports::outbound::{ScanService, UploadFile};
use crate::scan_reporting::domain::{ScanReport, ServiceHealth};
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Multipart field name the upload endpoint expects for each file
const UPLOAD_FIELD: &str = "files";

#[derive(Debug, Serialize)]
struct RepoScanBody<'a> {
    repo_url: &'a str,
}

/// HttpScanClient adapter for the scanning service REST API
///
/// Implements the ScanService port over async reqwest.
///
/// # Behaviour
/// - One request per call; no retry, no backoff, no caching
/// - A non-success status becomes [`ScanError::ServerError`] whose message
///   is the response body (or its `detail` field when the body is JSON)
pub struct HttpScanClient {
    client: Client,
    base_url: String,
}

impl HttpScanClient {
    /// Creates a client for the service rooted at `base_url`
    ///
    /// # Errors
    /// Returns [`ScanError::InvalidServerUrl`] if the URL is not an absolute
    /// `http`/`https` URL, or an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::normalize_base_url(base_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sentinel-scan/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn normalize_base_url(raw: &str) -> Result<String> {
        let invalid = |reason: String| ScanError::InvalidServerUrl {
            url: raw.to_string(),
            reason,
        };

        let parsed = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())).into());
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("query strings and fragments are not allowed".to_string()).into());
        }

        Ok(parsed.as_str().trim_end_matches('/').to_string())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Sends a request and turns transport failures and non-success
    /// statuses into errors
    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<Response> {
        log::debug!("sending request to {}", endpoint);

        let response = request.send().await.map_err(|e| ScanError::Connection {
            url: endpoint.to_string(),
            details: e.to_string(),
        })?;

        let status = response.status();
        log::debug!("{} answered {}", endpoint, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ScanError::ServerError {
            status,
            message: error_message(status, &body),
        }
        .into())
    }

    async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
        let body = response.text().await.map_err(|e| ScanError::InvalidResponse {
            endpoint: endpoint.to_string(),
            details: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            ScanError::InvalidResponse {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let endpoint = self.endpoint(path);
        let response = self.send(self.client.get(&endpoint), &endpoint).await?;
        Self::read_json(response, &endpoint).await
    }
}

/// Builds the user-facing message for a failed request.
///
/// The service reports errors as `{"detail": "..."}`; when that shape is
/// present the detail text is used, otherwise the raw body. An empty body
/// falls back to the status line.
fn error_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("error")
        );
    }

    serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| trimmed.to_string())
}

#[async_trait]
impl ScanService for HttpScanClient {
    async fn submit_files(&self, files: Vec<UploadFile>) -> Result<ScanReport> {
        let endpoint = self.endpoint("scan/upload");

        // Upload names are relative paths; send them raw as browsers do
        let mut form = Form::new().percent_encode_noop();
        for file in files {
            let part = Part::bytes(file.content)
                .file_name(file.name)
                .mime_str("application/octet-stream")?;
            form = form.part(UPLOAD_FIELD, part);
        }

        let response = self
            .send(self.client.post(&endpoint).multipart(form), &endpoint)
            .await?;
        Self::read_json(response, &endpoint).await
    }

    async fn submit_repository(&self, repo_url: &str) -> Result<ScanReport> {
        let endpoint = self.endpoint("scan/repo");
        let body = RepoScanBody { repo_url };

        let response = self
            .send(self.client.post(&endpoint).json(&body), &endpoint)
            .await?;
        Self::read_json(response, &endpoint).await
    }

    async fn list_reports(&self) -> Result<Vec<ScanReport>> {
        self.get_json("reports").await
    }

    async fn fetch_report(&self, scan_id: &str) -> Result<ScanReport> {
        let path = format!("reports/{}", urlencoding::encode(scan_id));
        self.get_json(&path).await
    }

    async fn check_health(&self) -> Result<ServiceHealth> {
        self.get_json("health").await
    }
}
