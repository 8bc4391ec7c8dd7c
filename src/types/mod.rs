// Public modules
pub mod ask;
pub mod document;
pub mod health;
pub mod login;
pub mod team;
pub mod upload;
pub mod user;

// Re-exports
pub use ask::{AskRequest, AskResponse, Source};
pub use document::{Document, DocumentListResponse, DocumentStatus};
pub use health::HealthStatus;
pub use login::{LoginRequest, LoginResponse};
pub use team::{Team, TeamsResponse};
pub use upload::{UploadResponse, UploadedFile};
pub use user::UserRef;
