use serde::{Deserialize, Serialize};

/// The authenticated admin user returned by `POST /auth/login`.
///
/// Only `username` is contractually required; the backend decorates the
/// object with whatever profile fields it has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRef {
    /// Login name.
    pub username: String,
    /// Backend-assigned user ID.
    #[serde(default)]
    pub id: Option<u64>,
    /// Role string, "admin" for everyone who can log in today.
    #[serde(default)]
    pub role: Option<String>,
    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Optional contact address.
    #[serde(default)]
    pub email: Option<String>,
}

impl UserRef {
    /// The name to show in the admin header.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_backend_object() {
        let json = r#"{
            "id": 1,
            "username": "admin",
            "role": "admin",
            "full_name": "System Administrator",
            "email": "admin@company.com",
            "is_active": true,
            "created_at": "2025-03-04T10:30:00"
        }"#;
        let user: UserRef = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.display_name(), "System Administrator");
    }

    #[test]
    fn username_is_required() {
        assert!(serde_json::from_str::<UserRef>(r#"{"id":1}"#).is_err());
    }
}
