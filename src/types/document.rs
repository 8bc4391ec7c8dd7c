use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Processing status of an uploaded document.
///
/// Drives the status badge in the admin view. The backend stores free-form
/// status strings; anything outside the known set decodes as `Unknown` rather
/// than failing the whole document list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Text extraction and embedding finished.
    Completed,
    /// Upload accepted, embedding still running.
    Processing,
    /// The backend failed to process the file.
    Error,
    /// Any status string the client does not recognize.
    #[serde(other)]
    #[default]
    Unknown,
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentStatus::Completed => write!(f, "completed"),
            DocumentStatus::Processing => write!(f, "processing"),
            DocumentStatus::Error => write!(f, "error"),
            DocumentStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// A document row as returned by `GET /documents`.
///
/// This is the one strict schema for document records. Fields the backend is
/// known to omit get defaults; a record missing `id` or `filename` is a
/// decode error, not something to paper over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Backend-assigned document ID.
    pub id: u64,
    /// Stored filename.
    pub filename: String,
    /// Original filename as uploaded, when the backend kept it.
    #[serde(default)]
    pub original_filename: Option<String>,
    /// Owning team.
    pub team: String,
    /// Owning project within the team.
    pub project: String,
    /// File extension recorded by the backend.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub file_size: u64,
    /// Processing status.
    #[serde(default)]
    pub status: DocumentStatus,
    /// When the document was uploaded.
    #[serde(with = "crate::utils::time")]
    pub upload_date: OffsetDateTime,
    /// Number of text chunks indexed for this document.
    #[serde(default)]
    pub chunk_count: u64,
}

impl Document {
    /// The filename to show users: the original name when recorded, else the
    /// stored one.
    pub fn display_name(&self) -> &str {
        self.original_filename.as_deref().unwrap_or(&self.filename)
    }
}

/// Response body for `GET /documents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentListResponse {
    /// Current backend snapshot of all documents.
    pub documents: Vec<Document>,
}
