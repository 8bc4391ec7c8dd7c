//! Slash command parsing for the admin console.
//!
//! This module handles parsing of special commands that start with `/`.
//! Anything else typed at the prompt is treated as a question for the
//! backend.

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    /// Log in as the named admin; the console prompts for the password.
    Login(String),

    /// End the admin session.
    Logout,

    /// List documents, optionally filtered by team and project.
    Docs {
        /// Optional team filter.
        team: Option<String>,
        /// Optional project filter.
        project: Option<String>,
    },

    /// Upload the named files; the console prompts for team and project.
    Upload(Vec<String>),

    /// Delete a document by ID, after confirmation.
    Delete(u64),

    /// Print the download URL for a document.
    Download(u64),

    /// Show the team catalog.
    Teams,

    /// Probe backend liveness.
    Health,

    /// Show the questions asked this session.
    History,

    /// Display help information.
    Help,

    /// Exit the console.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(ConsoleCommand)` if the input is a command, or `None` if it
/// should be submitted as a question.
///
/// # Examples
///
/// ```
/// # use helpergpt::console::parse_command;
/// assert!(parse_command("/quit").is_some());
/// assert!(parse_command("/login admin").is_some());
/// assert!(parse_command("What is our PTO policy?").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<ConsoleCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args: Vec<&str> = parts.collect();

    let result = match command.as_str() {
        "login" => match args.first() {
            Some(username) => ConsoleCommand::Login(username.to_string()),
            None => ConsoleCommand::Invalid("/login requires a username".to_string()),
        },
        "logout" => ConsoleCommand::Logout,
        "docs" | "documents" => ConsoleCommand::Docs {
            team: args.first().map(|s| s.to_string()),
            project: args.get(1).map(|s| s.to_string()),
        },
        "upload" => {
            if args.is_empty() {
                ConsoleCommand::Invalid("/upload requires at least one file path".to_string())
            } else {
                ConsoleCommand::Upload(args.iter().map(|s| s.to_string()).collect())
            }
        }
        "delete" => match args.first().and_then(|s| s.parse::<u64>().ok()) {
            Some(id) => ConsoleCommand::Delete(id),
            None => ConsoleCommand::Invalid("/delete requires a document ID".to_string()),
        },
        "download" => match args.first().and_then(|s| s.parse::<u64>().ok()) {
            Some(id) => ConsoleCommand::Download(id),
            None => ConsoleCommand::Invalid("/download requires a document ID".to_string()),
        },
        "teams" => ConsoleCommand::Teams,
        "health" => ConsoleCommand::Health,
        "history" => ConsoleCommand::History,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        other => ConsoleCommand::Invalid(format!("unknown command: /{other}")),
    };

    Some(result)
}

/// Returns the help text describing available commands.
pub fn help_text() -> &'static str {
    "Available commands:
  /login <username>          Log in as an admin (prompts for password)
  /logout                    End the admin session
  /docs [team] [project]     List documents, optionally filtered
  /upload <path>...          Upload files (prompts for team and project)
  /delete <id>               Delete a document (asks for confirmation)
  /download <id>             Print a document's download URL
  /teams                     Show teams and projects
  /health                    Probe backend liveness
  /history                   Show questions asked this session
  /help                      Show this help
  /quit                      Exit

Anything else is sent to the backend as a question."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(parse_command("What is our PTO policy?"), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn login_requires_username() {
        assert_eq!(
            parse_command("/login admin"),
            Some(ConsoleCommand::Login("admin".to_string()))
        );
        assert!(matches!(
            parse_command("/login"),
            Some(ConsoleCommand::Invalid(_))
        ));
    }

    #[test]
    fn docs_filters_are_positional() {
        assert_eq!(
            parse_command("/docs"),
            Some(ConsoleCommand::Docs {
                team: None,
                project: None
            })
        );
        assert_eq!(
            parse_command("/docs Engineering Nautilux"),
            Some(ConsoleCommand::Docs {
                team: Some("Engineering".to_string()),
                project: Some("Nautilux".to_string())
            })
        );
    }

    #[test]
    fn delete_parses_numeric_id() {
        assert_eq!(parse_command("/delete 42"), Some(ConsoleCommand::Delete(42)));
        assert!(matches!(
            parse_command("/delete report.pdf"),
            Some(ConsoleCommand::Invalid(_))
        ));
    }

    #[test]
    fn upload_collects_paths() {
        assert_eq!(
            parse_command("/upload a.pdf b.txt"),
            Some(ConsoleCommand::Upload(vec![
                "a.pdf".to_string(),
                "b.txt".to_string()
            ]))
        );
        assert!(matches!(
            parse_command("/upload"),
            Some(ConsoleCommand::Invalid(_))
        ));
    }

    #[test]
    fn quit_aliases() {
        for input in ["/quit", "/exit", "/q", "/QUIT"] {
            assert_eq!(parse_command(input), Some(ConsoleCommand::Quit), "{input}");
        }
    }
}
