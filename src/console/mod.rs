//! Admin console module for the HelperGPT backend.
//!
//! This module provides the interactive REPL console built on top of the
//! application controller. It supports:
//!
//! - Asking questions and rendering answers with sources and a confidence bar
//! - Admin login/logout and document management via slash commands
//! - Transient notifications surfaced after each action
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`commands`]: Slash command parsing and handling
//! - [`render`]: Plain-text rendering with optional ANSI styling

mod commands;
mod config;
mod render;

pub use commands::{ConsoleCommand, help_text, parse_command};
pub use config::{ConsoleArgs, ConsoleConfig};
pub use render::Renderer;
