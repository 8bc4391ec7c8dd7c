//! Interactive admin console for the HelperGPT backend.
//!
//! This binary provides a REPL for asking questions against the document
//! index and, after login, managing the uploaded documents.
//!
//! # Usage
//!
//! ```bash
//! # Talk to a local backend
//! helpergpt-admin
//!
//! # Point at another backend with a tighter timeout
//! helpergpt-admin --backend http://docs.internal:8000 --timeout 10
//!
//! # Disable colors (useful for piping output)
//! helpergpt-admin --no-color
//! ```
//!
//! # Commands
//!
//! Anything typed at the prompt is sent as a question. Slash commands:
//! - `/login <username>` - Log in as an admin
//! - `/docs [team] [project]` - List documents
//! - `/upload <path>...` - Upload files
//! - `/delete <id>` - Delete a document (asks for confirmation)
//! - `/help` - Show all commands
//! - `/quit` - Exit
//!
//! Notifications are printed after each command and dismissed immediately;
//! the controller's 5-second auto-expiry only matters for front ends that
//! keep notifications on screen between renders.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use helpergpt::console::{ConsoleArgs, ConsoleCommand, ConsoleConfig, Renderer, help_text, parse_command};
use helpergpt::{Action, Controller, Effect, FilePart, HelperGpt};

/// Print and clear pending notifications; the printed line is the display.
async fn show_notifications(controller: &mut Controller<HelperGpt>, renderer: &Renderer) {
    let ids: Vec<u64> = controller.notifications().map(|n| n.id).collect();
    for notification in controller.notifications() {
        println!("{}", renderer.notification(notification));
    }
    for id in ids {
        controller.dispatch(Action::DismissNotification { id }).await;
    }
}

/// Dispatch an action, racing it against the Ctrl+C flag.
///
/// On interrupt the dispatch future is dropped, which aborts the underlying
/// request and releases the busy indicator; the abort then surfaces as a
/// notification like any other failure.
async fn dispatch_interruptible(
    controller: &mut Controller<HelperGpt>,
    action: Action,
    interrupted: &AtomicBool,
) -> Effect {
    let effect = {
        let dispatch = controller.dispatch(action);
        tokio::pin!(dispatch);
        loop {
            tokio::select! {
                effect = &mut dispatch => break Some(effect),
                _ = tokio::time::sleep(Duration::from_millis(50)) => {
                    if interrupted.load(Ordering::Relaxed) {
                        break None;
                    }
                }
            }
        }
    };
    match effect {
        Some(effect) => effect,
        None => controller.abort("interrupted from the console"),
    }
}

fn read_file_parts(paths: &[String]) -> Vec<FilePart> {
    let mut files = Vec::new();
    for path in paths {
        match std::fs::read(path) {
            Ok(bytes) => {
                let filename = std::path::Path::new(path)
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.clone());
                files.push(FilePart::new(filename, bytes));
            }
            Err(err) => {
                eprintln!("skipping {path}: {err}");
            }
        }
    }
    files
}

/// Main entry point for the helpergpt-admin application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = ConsoleArgs::from_command_line_relaxed("helpergpt-admin [OPTIONS]");
    let config = ConsoleConfig::from(args);

    let client = HelperGpt::with_options(config.backend_url.clone(), Some(config.timeout))?;
    let backend_url = client.base_url().to_string();
    let mut controller = Controller::new(client);
    let renderer = Renderer::with_color(config.use_color);
    let mut rl = DefaultEditor::new()?;

    // Flag for interrupt handling during in-flight requests.
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("HelperGPT admin console ({backend_url})");
    match controller.initialize().await {
        Ok(health) => println!("Backend status: {}", health.status),
        Err(err) => eprintln!("Warning: backend unreachable: {err}"),
    }
    show_notifications(&mut controller, &renderer).await;
    println!("Type /help for commands, /quit to exit\n");

    loop {
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("> ");
        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Input error: {err}");
                break;
            }
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line);

        let Some(command) = parse_command(line) else {
            // Not a command: submit as a question.
            let action = Action::AskQuestion {
                question: line.to_string(),
            };
            if dispatch_interruptible(&mut controller, action, &interrupted).await
                == Effect::Answered
            {
                if let Some(result) = controller.results().first() {
                    println!("\n{}", renderer.answer(result));
                }
            }
            show_notifications(&mut controller, &renderer).await;
            continue;
        };

        match command {
            ConsoleCommand::Quit => {
                println!("Goodbye!");
                break;
            }
            ConsoleCommand::Help => {
                println!("{}", help_text());
            }
            ConsoleCommand::Invalid(message) => {
                eprintln!("{message}");
            }
            ConsoleCommand::Login(username) => {
                let password = rl.readline("Password: ").unwrap_or_default();
                let effect = controller
                    .dispatch(Action::SubmitLogin {
                        username,
                        password: password.trim().to_string(),
                    })
                    .await;
                if effect == Effect::LoggedIn {
                    print!("{}", renderer.documents(controller.documents()));
                }
            }
            ConsoleCommand::Logout => {
                controller.dispatch(Action::Logout).await;
                println!("Logged out.");
            }
            ConsoleCommand::Docs { team, project } => {
                let effect = controller
                    .dispatch(Action::RefreshDocuments { team, project })
                    .await;
                if effect == Effect::Refreshed {
                    print!("{}", renderer.documents(controller.documents()));
                }
            }
            ConsoleCommand::Upload(paths) => {
                let files = read_file_parts(&paths);
                let team = rl.readline("Team: ").unwrap_or_default().trim().to_string();
                let project = rl
                    .readline("Project: ")
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                let action = Action::UploadFiles {
                    team,
                    project,
                    files,
                };
                if let Effect::Uploaded { processed, rejected } =
                    dispatch_interruptible(&mut controller, action, &interrupted).await
                {
                    println!("Uploaded {processed} files ({rejected} rejected locally).");
                    print!("{}", renderer.documents(controller.documents()));
                }
            }
            ConsoleCommand::Delete(id) => {
                let effect = controller.dispatch(Action::DeleteDocument { id }).await;
                if let Effect::ConfirmDelete { id, filename } = effect {
                    let answer = rl
                        .readline(&format!("Delete {filename}? [y/N] "))
                        .unwrap_or_default();
                    if answer.trim().eq_ignore_ascii_case("y") {
                        controller.dispatch(Action::ConfirmDelete { id }).await;
                    } else {
                        println!("Canceled.");
                    }
                }
            }
            ConsoleCommand::Download(id) => {
                let effect = controller.dispatch(Action::DownloadDocument { id }).await;
                if let Effect::OpenUrl(url) = effect {
                    println!("{url}");
                }
            }
            ConsoleCommand::Teams => {
                print!("{}", renderer.teams(controller.teams()));
            }
            ConsoleCommand::Health => match controller.health().await {
                Ok(health) => println!("Backend status: {}", health.status),
                Err(err) => eprintln!("{err}"),
            },
            ConsoleCommand::History => {
                print!("{}", renderer.history(controller.history()));
            }
        }
        show_notifications(&mut controller, &renderer).await;
    }

    Ok(())
}
