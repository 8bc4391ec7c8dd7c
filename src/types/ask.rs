use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Request body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskRequest {
    /// The user's question, already trimmed and length-validated.
    pub question: String,
    /// Optional free-form context for the answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Optional team filter for retrieval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Optional project filter for retrieval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl AskRequest {
    /// Creates a new question request with no filters.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
            team: None,
            project: None,
        }
    }
}

/// A document cited as evidence for a generated answer.
///
/// Only `filename` is required to render a source link; the remaining fields
/// are carried when the backend sends them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Source {
    /// Filename of the cited document.
    pub filename: String,
    /// Backend document ID, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<u64>,
    /// Owning team of the cited document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Owning project of the cited document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Retrieval relevance score for this source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
    /// Page numbers of the cited passages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_numbers: Option<Vec<u32>>,
}

impl Source {
    /// Creates a source carrying only a filename.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            document_id: None,
            team: None,
            project: None,
            relevance_score: None,
            page_numbers: None,
        }
    }
}

/// Successful response body for `POST /ask`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AskResponse {
    /// The question as the backend saw it.
    pub question: String,
    /// The generated answer.
    pub answer: String,
    /// Documents cited as evidence, ordered by relevance.
    #[serde(default)]
    pub sources: Vec<Source>,
    /// Backend-supplied relevance score, nominally in [0, 1].
    pub confidence: f64,
    /// When the backend produced the answer.
    #[serde(default, with = "crate::utils::time::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// Backend-measured response latency.
    #[serde(default)]
    pub response_time_ms: Option<u64>,
}

impl AskResponse {
    /// Confidence clamped to [0, 1].
    ///
    /// The contract says the backend stays in range, but the rendering paths
    /// use this clamped view so an out-of-range value cannot produce a bar
    /// wider than its track.
    pub fn clamped_confidence(&self) -> f64 {
        self.confidence.clamp(0.0, 1.0)
    }

    /// Confidence as a whole percentage in [0, 100].
    pub fn confidence_percent(&self) -> u8 {
        (self.clamped_confidence() * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_omits_unset_filters() {
        let request = AskRequest::new("What is our PTO policy?");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"question":"What is our PTO policy?"}"#);
    }

    #[test]
    fn deserializes_minimal_sources() {
        let json = r#"{
            "question": "What is our PTO policy?",
            "answer": "Twenty days.",
            "sources": [{"filename": "hr.pdf"}],
            "confidence": 0.87
        }"#;
        let response: AskResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sources.len(), 1);
        assert_eq!(response.sources[0].filename, "hr.pdf");
        assert_eq!(response.confidence_percent(), 87);
    }

    #[test]
    fn deserializes_rich_sources() {
        let json = r#"{
            "question": "q",
            "answer": "a",
            "sources": [{
                "document_id": 5,
                "filename": "hr.pdf",
                "team": "HR",
                "project": "Policies",
                "relevance_score": 0.91,
                "page_numbers": [2, 3]
            }],
            "confidence": 0.5,
            "timestamp": "2025-03-04T10:30:00.500"
        }"#;
        let response: AskResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sources[0].document_id, Some(5));
        assert_eq!(response.sources[0].page_numbers, Some(vec![2, 3]));
        assert!(response.timestamp.is_some());
    }

    #[test]
    fn confidence_is_clamped_defensively() {
        let mut response: AskResponse = serde_json::from_str(
            r#"{"question":"q","answer":"a","confidence":1.7}"#,
        )
        .unwrap();
        assert_eq!(response.clamped_confidence(), 1.0);
        assert_eq!(response.confidence_percent(), 100);
        response.confidence = -0.2;
        assert_eq!(response.clamped_confidence(), 0.0);
        assert_eq!(response.confidence_percent(), 0);
    }
}
