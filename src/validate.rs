//! Local input validation.
//!
//! Everything here runs before any network call; a failure is surfaced as a
//! notification and never reaches the backend.

use crate::error::{Error, Result};

/// File extensions the backend can extract text from.
pub const ALLOWED_EXTENSIONS: [&str; 4] = [".txt", ".pdf", ".doc", ".docx"];

/// Minimum question length after trimming.
pub const MIN_QUESTION_LEN: usize = 3;

/// Minimum username length accepted by the backend's login model.
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length accepted by the backend's login model.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates and normalizes a question, returning the trimmed text.
pub fn question(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(
            "please enter a question",
            Some("question".to_string()),
        ));
    }
    if trimmed.chars().count() < MIN_QUESTION_LEN {
        return Err(Error::validation(
            format!("questions must be at least {MIN_QUESTION_LEN} characters"),
            Some("question".to_string()),
        ));
    }
    Ok(trimmed.to_string())
}

/// True when the filename carries an allowed extension, case-insensitively.
pub fn is_allowed_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    ALLOWED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Validates login credentials against the backend's own field bounds.
pub fn credentials(username: &str, password: &str) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::validation(
            "username and password are required",
            None,
        ));
    }
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(Error::validation(
            format!("usernames are at least {MIN_USERNAME_LEN} characters"),
            Some("username".to_string()),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(Error::validation(
            format!("passwords are at least {MIN_PASSWORD_LEN} characters"),
            Some("password".to_string()),
        ));
    }
    Ok(())
}

/// Validates the required team and project selectors for an upload.
pub fn team_project(team: &str, project: &str) -> Result<()> {
    if team.trim().is_empty() {
        return Err(Error::validation(
            "select a team before uploading",
            Some("team".to_string()),
        ));
    }
    if project.trim().is_empty() {
        return Err(Error::validation(
            "select a project before uploading",
            Some("project".to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_questions_rejected() {
        assert!(question("").is_err());
        assert!(question("   ").is_err());
        assert!(question("hi").is_err());
        assert!(question("  ab ").is_err(), "trim happens before the length check");
    }

    #[test]
    fn valid_question_is_trimmed() {
        assert_eq!(question("  What is our PTO policy?  ").unwrap(), "What is our PTO policy?");
        assert_eq!(question("abc").unwrap(), "abc");
    }

    #[test]
    fn extension_allow_list() {
        assert!(is_allowed_file("report.pdf"));
        assert!(is_allowed_file("NOTES.TXT"));
        assert!(is_allowed_file("spec.docx"));
        assert!(!is_allowed_file("setup.exe"));
        assert!(!is_allowed_file("archive.pdf.zip"));
        assert!(!is_allowed_file("noextension"));
    }

    #[test]
    fn credential_bounds() {
        assert!(credentials("", "").is_err());
        assert!(credentials("admin", "").is_err());
        assert!(credentials("ab", "password123").is_err());
        assert!(credentials("admin", "short").is_err());
        assert!(credentials("admin", "password123").is_ok());
    }

    #[test]
    fn team_and_project_required() {
        assert!(team_project("", "Cloud Team").is_err());
        assert!(team_project("Engineering", "  ").is_err());
        assert!(team_project("Engineering", "Cloud Team").is_ok());
    }
}
