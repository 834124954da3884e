//! # API Client
//!
//! Core HTTP pipeline for the VetDesk booking API. Every resource module
//! routes its calls through the verb helpers here so base-URL joining,
//! bearer-token attachment, and failure mapping happen in exactly one place.
//!
//! ## Authentication
//!
//! Before dispatch the client reads the current session credential from its
//! [`CredentialStore`]; when one is present the request carries
//! `Authorization: Bearer <token>`. An absent credential is not an error:
//! the request goes out unauthenticated and the backend decides whether to
//! reject it.
//!
//! ## 401 policy
//!
//! An unauthorized response is logged and forwarded to the caller unchanged.
//! The client never clears the stored token or retries on its own; recovery
//! is the caller's decision.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::Serialize;

use crate::credentials::CredentialStore;

/// Errors surfaced by API calls.
///
/// The taxonomy mirrors what callers need to react to: transport failures,
/// the authentication/validation families of 4xx, server-side 5xx, body
/// decode failures, and local credential-store I/O.
#[derive(Debug)]
pub enum ApiError {
    /// No response was received (DNS, connect, timeout, ...).
    Network { message: String },
    /// The backend rejected the session credential (401).
    Unauthorized { message: String },
    /// The credential is valid but lacks permission (403).
    Forbidden { message: String },
    /// The backend rejected the request payload (422).
    Validation { message: String },
    /// Any other 4xx response.
    ClientError { status: u16, message: String },
    /// A 5xx response.
    Server { status: u16, message: String },
    /// The response body could not be decoded.
    Parse { message: String },
    /// The local credential store failed to read or write.
    Storage { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network { message } => write!(f, "Network error: {}", message),
            ApiError::Unauthorized { message } => write!(f, "Unauthorized: {}", message),
            ApiError::Forbidden { message } => write!(f, "Forbidden: {}", message),
            ApiError::Validation { message } => write!(f, "Validation failed: {}", message),
            ApiError::ClientError { status, message } => {
                write!(f, "Request failed ({}): {}", status, message)
            }
            ApiError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            ApiError::Parse { message } => write!(f, "Parse error: {}", message),
            ApiError::Storage { message } => write!(f, "Credential store error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convert a reqwest error to an ApiError.
pub(crate) fn to_network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network {
        message: err.to_string(),
    }
}

/// Convert an HTTP response with error status to an ApiError.
pub(crate) fn to_http_error(status: reqwest::StatusCode, error_text: String) -> ApiError {
    let status_code = status.as_u16();

    match status_code {
        401 => ApiError::Unauthorized {
            message: if error_text.is_empty() {
                "Invalid or expired session token".to_string()
            } else {
                error_text
            },
        },
        403 => ApiError::Forbidden {
            message: if error_text.is_empty() {
                "Access denied".to_string()
            } else {
                error_text
            },
        },
        422 => ApiError::Validation {
            message: if error_text.is_empty() {
                "The request payload was rejected".to_string()
            } else {
                error_text
            },
        },
        500..=599 => ApiError::Server {
            status: status_code,
            message: if error_text.is_empty() {
                format!("Server error ({})", status_code)
            } else {
                error_text
            },
        },
        _ => ApiError::ClientError {
            status: status_code,
            message: if error_text.is_empty() {
                format!("Request failed ({})", status_code)
            } else {
                error_text
            },
        },
    }
}

pub(crate) fn to_storage_error(err: std::io::Error) -> ApiError {
    ApiError::Storage {
        message: err.to_string(),
    }
}

/// Session-aware HTTP client for the booking API.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a new client against a base URL with an injected credential
    /// store.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::sync::Arc;
    /// use vetdesk::api::ApiClient;
    /// use vetdesk::credentials::MemoryCredentialStore;
    ///
    /// let store = Arc::new(MemoryCredentialStore::new());
    /// let client = ApiClient::new("http://localhost:8000/api".to_string(), store);
    /// ```
    pub fn new(base_url: String, store: Arc<dyn CredentialStore>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    /// The base URL this client dispatches against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store backing this client.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Current bearer token, if a credential is stored.
    ///
    /// Read fresh on every request; a login/logout between two calls is
    /// picked up without rebuilding the client.
    pub(crate) fn bearer_token(&self) -> Option<String> {
        self.store.read().map(|credential| credential.token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = match self.bearer_token() {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        };

        debug!("[API] {} {}", method, path);
        let response = request.send().await.map_err(to_network_error)?;

        let status = response.status();
        debug!(
            "[API] Response status: {} ({})",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        if !status.is_success() {
            if status == reqwest::StatusCode::UNAUTHORIZED {
                warn!("[API] Unauthorized response from {} {}", method, path);
            }
            let error_text = response.text().await.unwrap_or_default();
            debug!("[API] Error response body: {}", error_text);
            return Err(to_http_error(status, error_text));
        }

        Ok(response)
    }

    /// Send a GET request with optional query parameters.
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch("GET", path, request).await
    }

    /// Send a POST request with an optional JSON body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut request = self.client.post(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.dispatch("POST", path, request).await
    }

    /// Send a PUT request with a JSON body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.client.put(self.url(path)).json(body);
        self.dispatch("PUT", path, request).await
    }

    /// Send a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let request = self.client.patch(self.url(path)).json(body);
        self.dispatch("PATCH", path, request).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let request = self.client.delete(self.url(path));
        self.dispatch("DELETE", path, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{Credential, CredentialStore, MemoryCredentialStore};

    fn client_with_store(store: Arc<MemoryCredentialStore>) -> ApiClient {
        ApiClient::new("http://localhost:8000/api".to_string(), store)
    }

    #[test]
    fn test_bearer_token_absent_without_credential() {
        let client = client_with_store(Arc::new(MemoryCredentialStore::new()));
        assert!(client.bearer_token().is_none());
    }

    #[test]
    fn test_bearer_token_matches_stored_token() {
        let store = Arc::new(MemoryCredentialStore::with_token("9|aXyZ"));
        let client = client_with_store(store);
        assert_eq!(client.bearer_token().as_deref(), Some("9|aXyZ"));
    }

    #[test]
    fn test_bearer_token_reads_store_fresh_per_call() {
        let store = Arc::new(MemoryCredentialStore::new());
        let client = client_with_store(store.clone());

        assert!(client.bearer_token().is_none());
        store
            .save(&Credential {
                token: "later".to_string(),
                user: None,
            })
            .unwrap();
        assert_eq!(client.bearer_token().as_deref(), Some("later"));

        store.clear().unwrap();
        assert!(client.bearer_token().is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new(
            "http://localhost:8000/api/".to_string(),
            Arc::new(MemoryCredentialStore::new()),
        );
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/appointments"), "http://localhost:8000/api/appointments");
    }

    #[test]
    fn test_http_error_mapping_unauthorized() {
        let err = to_http_error(reqwest::StatusCode::UNAUTHORIZED, "Unauthenticated.".to_string());
        match err {
            ApiError::Unauthorized { message } => assert_eq!(message, "Unauthenticated."),
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_mapping_unauthorized_default_message() {
        let err = to_http_error(reqwest::StatusCode::UNAUTHORIZED, String::new());
        match err {
            ApiError::Unauthorized { message } => {
                assert_eq!(message, "Invalid or expired session token")
            }
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_mapping_validation() {
        let body = r#"{"message":"The appointment date field is required."}"#;
        let err = to_http_error(reqwest::StatusCode::UNPROCESSABLE_ENTITY, body.to_string());
        match err {
            ApiError::Validation { message } => assert!(message.contains("appointment date")),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_mapping_families() {
        assert!(matches!(
            to_http_error(reqwest::StatusCode::FORBIDDEN, String::new()),
            ApiError::Forbidden { .. }
        ));
        assert!(matches!(
            to_http_error(reqwest::StatusCode::NOT_FOUND, String::new()),
            ApiError::ClientError { status: 404, .. }
        ));
        assert!(matches!(
            to_http_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            ApiError::Server { status: 500, .. }
        ));
        assert!(matches!(
            to_http_error(reqwest::StatusCode::SERVICE_UNAVAILABLE, String::new()),
            ApiError::Server { status: 503, .. }
        ));
    }

    #[test]
    fn test_error_display_carries_backend_message() {
        let err = ApiError::Server {
            status: 500,
            message: "database offline".to_string(),
        };
        assert_eq!(format!("{}", err), "Server error (500): database offline");
    }
}
