//! Command-line tool for one-shot questions against the HelperGPT backend.
//!
//! # Usage
//!
//! ```bash
//! # Ask a question
//! helpergpt-ask What is our PTO policy?
//!
//! # Against another backend, without colors
//! helpergpt-ask --backend http://docs.internal:8000 --no-color What is our PTO policy?
//! ```
//!
//! Exits non-zero when the question is rejected locally or the backend call
//! fails.

use arrrg::CommandLine;

use helpergpt::console::{ConsoleArgs, ConsoleConfig, Renderer};
use helpergpt::{Action, Controller, Effect, HelperGpt};

/// Main entry point for the helpergpt-ask tool.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, free) =
        ConsoleArgs::from_command_line_relaxed("helpergpt-ask [OPTIONS] QUESTION...");
    let config = ConsoleConfig::from(args);
    let question = free.join(" ");

    let client = HelperGpt::with_options(config.backend_url.clone(), Some(config.timeout))?;
    let mut controller = Controller::new(client);
    let renderer = Renderer::with_color(config.use_color);

    let effect = controller.dispatch(Action::AskQuestion { question }).await;
    match effect {
        Effect::Answered => {
            if let Some(result) = controller.results().first() {
                print!("{}", renderer.answer(result));
            }
            Ok(())
        }
        _ => {
            for notification in controller.notifications() {
                eprintln!("{}", renderer.notification(notification));
            }
            std::process::exit(1);
        }
    }
}
