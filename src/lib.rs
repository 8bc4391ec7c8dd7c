// Public modules
pub mod app;
pub mod client;
pub mod console;
pub mod error;
pub mod history;
pub mod lock;
pub mod notify;
pub mod observability;
pub mod types;
pub mod utils;
pub mod validate;

// Re-exports
pub use app::{Action, AuthState, Backend, Controller, Effect, Session};
pub use client::{FilePart, HelperGpt};
pub use error::{Error, Result};
pub use history::{CHAT_HISTORY_LIMIT, ChatHistory};
pub use lock::{ProcessingGuard, ProcessingLock};
pub use notify::{Level, Notification, NotificationCenter};
pub use observability::register_biometrics;
pub use types::*;
