use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Response body for `GET /health`, the startup connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    /// Liveness string, "healthy" when the backend is up.
    pub status: String,
    /// Backend clock at probe time.
    #[serde(default, with = "crate::utils::time::option")]
    pub timestamp: Option<OffsetDateTime>,
}

impl HealthStatus {
    /// True when the backend reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
