use serde::{Deserialize, Serialize};

use crate::types::UserRef;

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Admin login name.
    pub username: String,
    /// Admin password, sent only over the login call.
    pub password: String,
}

impl LoginRequest {
    /// Creates a new login request.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Successful response body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Bearer token for subsequent authenticated calls.
    pub access_token: String,
    /// Token scheme, "bearer" today.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// The authenticated user.
    pub user: UserRef,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_both_fields() {
        let request = LoginRequest::new("admin", "password123");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"username":"admin","password":"password123"}"#);
    }

    #[test]
    fn response_requires_access_token() {
        let json = r#"{"token_type":"bearer","user":{"username":"admin"}}"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }

    #[test]
    fn response_defaults_token_type() {
        let json = r#"{"access_token":"tok-1","user":{"username":"admin"}}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user.username, "admin");
    }
}
