//! # Auth API
//!
//! Registration, login, logout, and current-user lookup. Successful
//! login/registration persists the issued bearer token (and the user record)
//! into the client's credential store; logout clears the store whether or not
//! the backend call succeeds, so a dead server can never pin a local session.

use serde::{Deserialize, Serialize};

use crate::api::client::{to_storage_error, ApiClient, ApiError};
use crate::credentials::{Credential, CredentialStore};

// =============================================================================
// Request Types
// =============================================================================

/// Request body for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Must match `password`; the backend enforces it.
    pub password_confirmation: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Response Types
// =============================================================================

/// An account on the booking service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// "admin" or "user"; absent on older backends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// Whether this account has the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Response from `POST /login` and `POST /register`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    pub user: User,
}

// =============================================================================
// API Client Methods
// =============================================================================

impl ApiClient {
    /// Register a new account and start a session.
    ///
    /// On success the returned token and user record are saved to the
    /// credential store, so the next request is already authenticated.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = self.post("/register", Some(request)).await?;
        let auth: AuthResponse = response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse register response: {}", e),
        })?;

        self.persist_session(&auth)?;
        Ok(auth)
    }

    /// Log in with email and password.
    ///
    /// On success the returned token and user record are saved to the
    /// credential store.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self.post("/login", Some(request)).await?;
        let auth: AuthResponse = response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse login response: {}", e),
        })?;

        self.persist_session(&auth)?;
        Ok(auth)
    }

    /// Log out of the current session.
    ///
    /// The stored credential is cleared even when the backend call fails;
    /// the server-side token may then outlive the local session until it
    /// expires, which the backend accepts.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.post::<()>("/logout", None).await;
        self.store().clear().map_err(to_storage_error)?;
        result.map(|_| ())
    }

    /// Fetch the account behind the current session token.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self.get("/user", &[]).await?;
        response.json().await.map_err(|e| ApiError::Parse {
            message: format!("Failed to parse user response: {}", e),
        })
    }

    fn persist_session(&self, auth: &AuthResponse) -> Result<(), ApiError> {
        self.store()
            .save(&Credential {
                token: auth.token.clone(),
                user: Some(auth.user.clone()),
            })
            .map_err(to_storage_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialStore, MemoryCredentialStore};
    use std::sync::Arc;

    fn sample_auth() -> AuthResponse {
        AuthResponse {
            token: "12|fR2mXw".to_string(),
            user: User {
                id: 3,
                name: "Alice Tan".to_string(),
                email: "alice@clinic.test".to_string(),
                role: Some("user".to_string()),
            },
        }
    }

    #[test]
    fn test_persist_session_stores_token_and_user() {
        let store = Arc::new(MemoryCredentialStore::new());
        let client = ApiClient::new("http://localhost:8000/api".to_string(), store.clone());

        client.persist_session(&sample_auth()).unwrap();

        let credential = store.read().expect("session should be stored");
        assert_eq!(credential.token, "12|fR2mXw");
        assert_eq!(credential.user.unwrap().email, "alice@clinic.test");
        assert_eq!(client.bearer_token().as_deref(), Some("12|fR2mXw"));
    }

    #[tokio::test]
    async fn test_logout_clears_store_even_when_network_fails() {
        let store = Arc::new(MemoryCredentialStore::with_token("12|fR2mXw"));
        // Discard port: the connection is refused, so only the clearing
        // behavior is exercised.
        let client = ApiClient::new("http://127.0.0.1:9".to_string(), store.clone());

        let result = client.logout().await;

        assert!(matches!(result, Err(ApiError::Network { .. })));
        assert!(store.read().is_none());
    }

    #[test]
    fn test_register_request_serialization() {
        let request = RegisterRequest {
            name: "Alice Tan".to_string(),
            email: "alice@clinic.test".to_string(),
            password: "hunter22".to_string(),
            password_confirmation: "hunter22".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Alice Tan");
        assert_eq!(json["password_confirmation"], "hunter22");
    }

    #[test]
    fn test_login_request_serialization() {
        let request = LoginRequest {
            email: "alice@clinic.test".to_string(),
            password: "hunter22".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("alice@clinic.test"));
        assert!(json.contains("hunter22"));
    }

    #[test]
    fn test_auth_response_deserialization() {
        let json = r#"{
            "token": "12|fR2mXw",
            "user": {"id": 3, "name": "Alice Tan", "email": "alice@clinic.test", "role": "user"}
        }"#;
        let auth: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(auth.token, "12|fR2mXw");
        assert_eq!(auth.user.id, 3);
        assert!(!auth.user.is_admin());
    }

    #[test]
    fn test_user_without_role_deserializes() {
        let json = r#"{"id": 1, "name": "Bo", "email": "bo@clinic.test"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.role.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn test_admin_role_detected() {
        let json = r#"{"id": 2, "name": "Dr. Reyes", "email": "reyes@clinic.test", "role": "admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
    }
}
