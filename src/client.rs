use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUESTS, CLIENT_REQUEST_ERRORS};
use crate::types::{
    AskRequest, AskResponse, DocumentListResponse, HealthStatus, LoginRequest, LoginResponse,
    TeamsResponse, UploadResponse,
};

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// One file to carry in a multipart upload request.
///
/// The caller has already validated the extension; the client only packages
/// bytes into a `files` part.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Filename reported to the backend.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl FilePart {
    /// Creates a new file part.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Client for the HelperGPT backend.
///
/// The client is stateless with respect to authentication: the caller passes
/// the bearer token into each call that needs one, so session ownership stays
/// with the application controller.
#[derive(Debug, Clone)]
pub struct HelperGpt {
    client: ReqwestClient,
    base_url: Url,
    timeout: Duration,
}

impl HelperGpt {
    /// Create a new client.
    ///
    /// The backend URL can be provided directly or read from the
    /// HELPERGPT_URL environment variable; without either, the client talks
    /// to a local backend on port 8000.
    pub fn new(base_url: Option<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a new client with a custom per-request timeout.
    ///
    /// Every request carries this timeout; a hung backend call resolves as
    /// `Error::Timeout` instead of holding its caller forever.
    pub fn with_options(base_url: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = match base_url {
            Some(url) => url,
            None => env::var("HELPERGPT_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        };
        // A trailing slash makes Url::join treat the last path segment as a
        // directory rather than replacing it.
        let base_url = if base_url.ends_with('/') {
            base_url
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::http_client(
                    format!("Failed to build HTTP client: {}", e),
                    Some(Box::new(e)),
                )
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create and return default headers for JSON requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Build the `Authorization: Bearer <token>` header value.
    fn bearer(token: &str) -> Result<HeaderValue> {
        HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            Error::authentication("access token contains characters invalid in a header")
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Map a reqwest transport failure to our error type.
    fn transport_error(&self, e: reqwest::Error) -> Error {
        CLIENT_REQUEST_ERRORS.click();
        if e.is_timeout() {
            Error::timeout(
                format!("Request timed out: {}", e),
                Some(self.timeout.as_secs_f64()),
            )
        } else if e.is_connect() {
            Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
        } else {
            Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
        }
    }

    /// Process backend response errors and convert to our Error type.
    async fn process_error_response(response: Response) -> Error {
        CLIENT_REQUEST_ERRORS.click();
        let status = response.status();
        let status_code = status.as_u16();

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|val| val.to_str().ok())
            .map(String::from);

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        // FastAPI error bodies are {"detail": "..."}.
        #[derive(Deserialize)]
        struct ErrorResponse {
            detail: Option<String>,
        }

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        let error_message = serde_json::from_str::<ErrorResponse>(&error_body)
            .ok()
            .and_then(|e| e.detail)
            .unwrap_or_else(|| error_body.clone());

        match status_code {
            400 => Error::bad_request(error_message, None),
            401 => Error::authentication(error_message),
            403 => Error::permission(error_message),
            404 => Error::not_found(error_message, None, None),
            408 => Error::timeout(error_message, None),
            429 => Error::rate_limit(error_message, retry_after),
            500 => Error::internal_server(error_message, request_id),
            502..=504 => Error::service_unavailable(error_message, retry_after),
            _ => Error::api(status_code, error_message, request_id),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response.json::<T>().await.map_err(|e| {
            Error::serialization(
                format!("Failed to parse response: {}", e),
                Some(Box::new(e)),
            )
        })
    }

    /// Probe backend liveness via `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint("health")?;
        let response = self
            .client
            .get(url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }

    /// Fetch the team catalog via `GET /teams`.
    pub async fn teams(&self) -> Result<TeamsResponse> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint("teams")?;
        let response = self
            .client
            .get(url)
            .headers(self.default_headers())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }

    /// Authenticate via `POST /auth/login` and return the issued token.
    pub async fn login(&self, params: &LoginRequest) -> Result<LoginResponse> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint("auth/login")?;
        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }

    /// Fetch the current document snapshot via `GET /documents`.
    ///
    /// Optional team and project filters are passed through as query
    /// parameters.
    pub async fn documents(
        &self,
        token: &str,
        team: Option<&str>,
        project: Option<&str>,
    ) -> Result<DocumentListResponse> {
        CLIENT_REQUESTS.click();
        let mut url = self.endpoint("documents")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(team) = team {
                query.append_pair("team", team);
            }
            if let Some(project) = project {
                query.append_pair("project", project);
            }
        }

        let mut headers = self.default_headers();
        headers.insert(header::AUTHORIZATION, Self::bearer(token)?);

        let response = self
            .client
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }

    /// Upload one or more files via `POST /documents/upload`.
    ///
    /// The request is a single multipart form with `team`, `project`, and one
    /// `files` part per file.
    pub async fn upload(
        &self,
        token: &str,
        team: &str,
        project: &str,
        files: Vec<FilePart>,
    ) -> Result<UploadResponse> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint("documents/upload")?;

        let mut form = Form::new()
            .text("team", team.to_string())
            .text("project", project.to_string());
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.filename)
                .mime_str("application/octet-stream")
                .map_err(|e| {
                    Error::http_client(
                        format!("Failed to build multipart body: {}", e),
                        Some(Box::new(e)),
                    )
                })?;
            form = form.part("files", part);
        }

        // No JSON content-type here; reqwest sets the multipart boundary.
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(header::AUTHORIZATION, Self::bearer(token)?);

        let response = self
            .client
            .post(url)
            .headers(headers)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }

    /// Delete a document via `DELETE /documents/{id}`.
    pub async fn delete_document(&self, token: &str, id: u64) -> Result<()> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint(&format!("documents/{id}"))?;

        let mut headers = self.default_headers();
        headers.insert(header::AUTHORIZATION, Self::bearer(token)?);

        let response = self
            .client
            .delete(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Ok(())
    }

    /// The browser-navigable URL for `GET /documents/{id}/download`.
    ///
    /// Downloads bypass the JSON call path entirely; the front end opens this
    /// URL directly.
    pub fn download_url(&self, id: u64) -> Result<Url> {
        self.endpoint(&format!("documents/{id}/download"))
    }

    /// Submit a question via `POST /ask`.
    pub async fn ask(&self, params: &AskRequest) -> Result<AskResponse> {
        CLIENT_REQUESTS.click();
        let url = self.endpoint("ask")?;
        let response = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(params)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Self::process_error_response(response).await);
        }
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HelperGpt::new(Some("http://backend.example.com:8000".to_string())).unwrap();
        assert_eq!(client.base_url.as_str(), "http://backend.example.com:8000/");
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        let client = HelperGpt::with_options(
            Some("https://helpergpt.internal/".to_string()),
            Some(Duration::from_secs(10)),
        )
        .unwrap();
        assert_eq!(client.base_url.as_str(), "https://helpergpt.internal/");
        assert_eq!(client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(HelperGpt::new(Some("not a url".to_string())).is_err());
    }

    #[test]
    fn test_download_url_shape() {
        let client = HelperGpt::new(Some("http://127.0.0.1:8000".to_string())).unwrap();
        let url = client.download_url(42).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/documents/42/download");
    }

    #[test]
    fn test_bearer_header_value() {
        let value = HelperGpt::bearer("tok-123").unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer tok-123");
        assert!(HelperGpt::bearer("bad\ntoken").is_err());
    }
}
