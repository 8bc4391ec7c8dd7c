use serde::{Deserialize, Serialize};

/// Per-file outcome within an upload response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    /// Filename as submitted.
    pub filename: String,
    /// Team the file was filed under.
    #[serde(default)]
    pub team: Option<String>,
    /// Project the file was filed under.
    #[serde(default)]
    pub project: Option<String>,
    /// Assigned document ID, absent when processing failed.
    #[serde(default)]
    pub document_id: Option<u64>,
    /// Backend status string for this file, "processed" or "error".
    pub status: String,
    /// Backend error message, present only on failure.
    #[serde(default)]
    pub error: Option<String>,
}

impl UploadedFile {
    /// True when the backend fully processed this file.
    pub fn is_processed(&self) -> bool {
        self.status == "processed"
    }
}

/// Response body for `POST /documents/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    /// Outcome for every file carried in the multipart request.
    #[serde(default)]
    pub uploaded_files: Vec<UploadedFile>,
    /// Backend summary message.
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadResponse {
    /// Number of files the backend fully processed.
    pub fn processed_count(&self) -> usize {
        self.uploaded_files.iter().filter(|f| f.is_processed()).count()
    }
}
