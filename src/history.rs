//! Bounded chat history for the current session.

use std::collections::VecDeque;

/// Maximum number of questions retained.
pub const CHAT_HISTORY_LIMIT: usize = 10;

/// The last questions submitted this session, most recent first.
///
/// Held only in memory; evicts the oldest entry once the bound is reached.
/// Nothing here survives a restart.
#[derive(Debug, Clone, Default)]
pub struct ChatHistory {
    entries: VecDeque<String>,
}

impl ChatHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted question as the newest entry.
    pub fn push(&mut self, question: impl Into<String>) {
        if self.entries.len() == CHAT_HISTORY_LIMIT {
            self.entries.pop_back();
        }
        self.entries.push_front(question.into());
    }

    /// Iterates entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    /// The most recently submitted question.
    pub fn newest(&self) -> Option<&str> {
        self.entries.front().map(|s| s.as_str())
    }

    /// Number of retained questions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been asked yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_entry_is_first() {
        let mut history = ChatHistory::new();
        history.push("first");
        history.push("second");
        assert_eq!(history.newest(), Some("second"));
        let entries: Vec<&str> = history.iter().collect();
        assert_eq!(entries, vec!["second", "first"]);
    }

    #[test]
    fn eleventh_entry_evicts_oldest() {
        let mut history = ChatHistory::new();
        for i in 0..11 {
            history.push(format!("question {i}"));
        }
        assert_eq!(history.len(), CHAT_HISTORY_LIMIT);
        assert_eq!(history.newest(), Some("question 10"));
        // "question 0" was the oldest and is gone.
        assert!(history.iter().all(|q| q != "question 0"));
        assert_eq!(history.iter().last(), Some("question 1"));
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ChatHistory::new();
        history.push("anything");
        history.clear();
        assert!(history.is_empty());
    }
}
