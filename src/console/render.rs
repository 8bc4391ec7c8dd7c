//! Plain-text rendering for the admin console.

use crate::history::ChatHistory;
use crate::notify::{Level, Notification};
use crate::types::{AskResponse, Document, DocumentStatus, Team};

/// ANSI escape code for dim text (used for metadata lines).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for cyan text (used for source filenames).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (used for middling confidence and
/// in-progress statuses).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for green text (used for high confidence and success).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for red text (used for low confidence and errors).
const ANSI_RED: &str = "\x1b[31m";

/// Width of the confidence bar in characters.
const BAR_WIDTH: usize = 20;

/// Renders controller state as plain text, optionally ANSI-styled.
#[derive(Debug, Clone)]
pub struct Renderer {
    use_color: bool,
}

impl Renderer {
    /// Creates a renderer, with or without ANSI styling.
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_color {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }

    /// Renders an answer with its source list and confidence bar.
    pub fn answer(&self, response: &AskResponse) -> String {
        let mut out = String::new();
        out.push_str(&response.answer);
        out.push('\n');
        if !response.sources.is_empty() {
            out.push('\n');
            out.push_str("Sources:\n");
            for source in &response.sources {
                out.push_str("  - ");
                out.push_str(&self.paint(ANSI_CYAN, &source.filename));
                if let Some(score) = source.relevance_score {
                    out.push_str(&self.paint(ANSI_DIM, &format!(" (relevance {score:.2})")));
                }
                out.push('\n');
            }
        }
        out.push('\n');
        out.push_str(&self.confidence_bar(response.clamped_confidence()));
        out.push('\n');
        out
    }

    /// Renders a proportional confidence bar with a percentage label.
    ///
    /// The caller passes an already-clamped value; the bar clamps again so a
    /// raw value can never overflow its track.
    pub fn confidence_bar(&self, confidence: f64) -> String {
        let confidence = confidence.clamp(0.0, 1.0);
        let filled = (confidence * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}] {:.0}%",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled),
            confidence * 100.0
        );
        let code = if confidence >= 0.7 {
            ANSI_GREEN
        } else if confidence >= 0.4 {
            ANSI_YELLOW
        } else {
            ANSI_RED
        };
        format!("Confidence: {}", self.paint(code, &bar))
    }

    fn status_badge(&self, status: DocumentStatus) -> String {
        let code = match status {
            DocumentStatus::Completed => ANSI_GREEN,
            DocumentStatus::Processing => ANSI_YELLOW,
            DocumentStatus::Error => ANSI_RED,
            DocumentStatus::Unknown => ANSI_DIM,
        };
        self.paint(code, &format!("[{status}]"))
    }

    /// Renders the document list as one line per document.
    pub fn documents(&self, documents: &[Document]) -> String {
        if documents.is_empty() {
            return "No documents uploaded yet.\n".to_string();
        }
        let mut out = String::new();
        for doc in documents {
            out.push_str(&format!(
                "{:>5}  {:<12} {}  {} / {}  {}\n",
                doc.id,
                self.status_badge(doc.status),
                doc.display_name(),
                doc.team,
                doc.project,
                self.paint(ANSI_DIM, &format_size(doc.file_size)),
            ));
        }
        out
    }

    /// Renders the team catalog.
    pub fn teams(&self, teams: &[Team]) -> String {
        let mut out = String::new();
        for team in teams {
            out.push_str(&format!("{}\n", team.name));
            for project in &team.projects {
                out.push_str(&format!("  - {project}\n"));
            }
        }
        out
    }

    /// Renders one notification line.
    pub fn notification(&self, notification: &Notification) -> String {
        let (code, tag) = match notification.level {
            Level::Info => (ANSI_DIM, "info"),
            Level::Success => (ANSI_GREEN, "ok"),
            Level::Error => (ANSI_RED, "error"),
        };
        format!(
            "{} {}",
            self.paint(code, &format!("[{tag}]")),
            notification.message
        )
    }

    /// Renders the session's question history, newest first.
    pub fn history(&self, history: &ChatHistory) -> String {
        if history.is_empty() {
            return "No questions asked yet.\n".to_string();
        }
        let mut out = String::new();
        for (i, question) in history.iter().enumerate() {
            out.push_str(&format!("{:>2}. {question}\n", i + 1));
        }
        out
    }
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(confidence: f64) -> AskResponse {
        serde_json::from_str(&format!(
            r#"{{
                "question": "What is our PTO policy?",
                "answer": "Twenty days per year.",
                "sources": [{{"filename": "hr.pdf"}}],
                "confidence": {confidence}
            }}"#
        ))
        .unwrap()
    }

    #[test]
    fn bar_is_proportional_and_labeled() {
        let renderer = Renderer::with_color(false);
        let bar = renderer.confidence_bar(0.87);
        assert!(bar.contains("87%"), "{bar}");
        assert_eq!(bar.matches('█').count(), 17);
        assert_eq!(bar.matches('░').count(), 3);
    }

    #[test]
    fn bar_clamps_out_of_range_values() {
        let renderer = Renderer::with_color(false);
        let high = renderer.confidence_bar(1.7);
        assert!(high.contains("100%"), "{high}");
        assert_eq!(high.matches('█').count(), BAR_WIDTH);
        let low = renderer.confidence_bar(-0.3);
        assert!(low.contains("0%"), "{low}");
        assert_eq!(low.matches('░').count(), BAR_WIDTH);
    }

    #[test]
    fn answer_includes_sources_and_bar() {
        let renderer = Renderer::with_color(false);
        let out = renderer.answer(&response(0.87));
        assert!(out.contains("Twenty days per year."));
        assert!(out.contains("hr.pdf"));
        assert!(out.contains("87%"));
    }

    #[test]
    fn no_color_output_has_no_escape_codes() {
        let renderer = Renderer::with_color(false);
        assert!(!renderer.answer(&response(0.2)).contains('\x1b'));
        let colored = Renderer::with_color(true);
        assert!(colored.confidence_bar(0.9).contains('\x1b'));
    }

    #[test]
    fn size_formatting() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
