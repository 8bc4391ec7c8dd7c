//! The application controller.
//!
//! This module provides the [`Controller`] struct that owns all client-side
//! state for the admin front end: the session, the document snapshot, the
//! chat history, outstanding notifications, and the busy indicator. Front
//! ends drive it exclusively through [`Controller::dispatch`] with an
//! [`Action`], and render from its accessors after each dispatch, so the
//! controller stays independent of any particular rendering surface.

use std::time::Instant;

use async_trait::async_trait;
use url::Url;

use crate::client::{FilePart, HelperGpt};
use crate::error::{Error, Result};
use crate::history::ChatHistory;
use crate::lock::ProcessingLock;
use crate::notify::{Level, Notification, NotificationCenter};
use crate::observability::{ASK_DURATION, CONTROLLER_ACTIONS, CONTROLLER_REJECTIONS};
use crate::types::{
    AskRequest, AskResponse, Document, DocumentListResponse, HealthStatus, LoginRequest,
    LoginResponse, Team, TeamsResponse, UploadResponse, UserRef,
};
use crate::validate;

/// Backend operations the controller depends on.
///
/// [`HelperGpt`] is the production implementation; tests substitute scripted
/// fakes.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Probe backend liveness.
    async fn health(&self) -> Result<HealthStatus>;

    /// Fetch the team catalog.
    async fn teams(&self) -> Result<TeamsResponse>;

    /// Authenticate and obtain a bearer token.
    async fn login(&self, params: &LoginRequest) -> Result<LoginResponse>;

    /// Fetch the current document snapshot.
    async fn documents(
        &self,
        token: &str,
        team: Option<&str>,
        project: Option<&str>,
    ) -> Result<DocumentListResponse>;

    /// Upload files under a team and project.
    async fn upload(
        &self,
        token: &str,
        team: &str,
        project: &str,
        files: Vec<FilePart>,
    ) -> Result<UploadResponse>;

    /// Delete a document by ID.
    async fn delete_document(&self, token: &str, id: u64) -> Result<()>;

    /// The direct-navigation download URL for a document.
    fn download_url(&self, id: u64) -> Result<Url>;

    /// Submit a question.
    async fn ask(&self, params: &AskRequest) -> Result<AskResponse>;
}

#[async_trait]
impl Backend for HelperGpt {
    async fn health(&self) -> Result<HealthStatus> {
        HelperGpt::health(self).await
    }

    async fn teams(&self) -> Result<TeamsResponse> {
        HelperGpt::teams(self).await
    }

    async fn login(&self, params: &LoginRequest) -> Result<LoginResponse> {
        HelperGpt::login(self, params).await
    }

    async fn documents(
        &self,
        token: &str,
        team: Option<&str>,
        project: Option<&str>,
    ) -> Result<DocumentListResponse> {
        HelperGpt::documents(self, token, team, project).await
    }

    async fn upload(
        &self,
        token: &str,
        team: &str,
        project: &str,
        files: Vec<FilePart>,
    ) -> Result<UploadResponse> {
        HelperGpt::upload(self, token, team, project, files).await
    }

    async fn delete_document(&self, token: &str, id: u64) -> Result<()> {
        HelperGpt::delete_document(self, token, id).await
    }

    fn download_url(&self, id: u64) -> Result<Url> {
        HelperGpt::download_url(self, id)
    }

    async fn ask(&self, params: &AskRequest) -> Result<AskResponse> {
        HelperGpt::ask(self, params).await
    }
}

/// The session, all-or-nothing: a token never exists without its user.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// No admin session.
    #[default]
    LoggedOut,
    /// Authenticated admin session. The token lives only in memory.
    LoggedIn {
        /// The authenticated user.
        user: UserRef,
        /// Bearer token for authenticated calls.
        token: String,
    },
}

impl Session {
    /// True when an admin session is active.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }

    /// The active bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { token, .. } => Some(token),
            Session::LoggedOut => None,
        }
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&UserRef> {
        match self {
            Session::LoggedIn { user, .. } => Some(user),
            Session::LoggedOut => None,
        }
    }
}

/// Observable authentication state, including the transient login phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// No session and no login in flight.
    LoggedOut,
    /// A login request is in flight.
    LoggingIn,
    /// An admin session is active.
    LoggedIn,
}

/// A UI action for the controller to handle.
#[derive(Debug, Clone)]
pub enum Action {
    /// Submit the login form.
    SubmitLogin {
        /// Login name.
        username: String,
        /// Password.
        password: String,
    },
    /// End the admin session.
    Logout,
    /// Replace the document list with the backend's current snapshot.
    RefreshDocuments {
        /// Optional team filter.
        team: Option<String>,
        /// Optional project filter.
        project: Option<String>,
    },
    /// Upload the selected files under a team and project.
    UploadFiles {
        /// Selected team.
        team: String,
        /// Selected project.
        project: String,
        /// Selected files, not yet filtered by extension.
        files: Vec<FilePart>,
    },
    /// Request deletion of a document; asks for confirmation first.
    DeleteDocument {
        /// Document ID.
        id: u64,
    },
    /// Confirm a previously requested deletion.
    ConfirmDelete {
        /// Document ID.
        id: u64,
    },
    /// Open a document's download URL.
    DownloadDocument {
        /// Document ID.
        id: u64,
    },
    /// Submit a question.
    AskQuestion {
        /// Raw question text, trimmed and validated here.
        question: String,
    },
    /// Dismiss a notification explicitly.
    DismissNotification {
        /// Notification ID.
        id: u64,
    },
}

/// What a dispatched action asks the front end to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// State changed; re-render from the accessors.
    Refreshed,
    /// An admin session started.
    LoggedIn,
    /// The admin session ended.
    LoggedOut,
    /// Files were uploaded and the document list refreshed.
    Uploaded {
        /// Files the backend processed.
        processed: usize,
        /// Files rejected locally by extension.
        rejected: usize,
    },
    /// Ask the user to confirm deleting the named document, then dispatch
    /// [`Action::ConfirmDelete`]. Not dispatching it cancels the deletion.
    ConfirmDelete {
        /// Document ID.
        id: u64,
        /// Display name for the confirmation prompt.
        filename: String,
    },
    /// Navigate to this URL; used for downloads, which bypass the JSON path.
    OpenUrl(Url),
    /// A new answer is available at the front of [`Controller::results`].
    Answered,
    /// The action failed or was rejected; a notification carries the detail.
    Failed,
}

/// Client-side application controller for the HelperGPT front end.
pub struct Controller<B: Backend> {
    backend: B,
    session: Session,
    teams: Vec<Team>,
    documents: Vec<Document>,
    history: ChatHistory,
    results: Vec<AskResponse>,
    notifications: NotificationCenter,
    processing: ProcessingLock,
    login_in_flight: ProcessingLock,
}

impl<B: Backend> Controller<B> {
    /// Creates a controller over a backend, starting logged out and empty.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: Session::LoggedOut,
            teams: Vec::new(),
            documents: Vec::new(),
            history: ChatHistory::new(),
            results: Vec::new(),
            notifications: NotificationCenter::new(),
            processing: ProcessingLock::new(),
            login_in_flight: ProcessingLock::new(),
        }
    }

    /// Startup: load the team catalog and probe connectivity.
    ///
    /// A failed catalog fetch falls back to the default catalog so the
    /// upload form stays usable; the health result is returned for the
    /// front end to surface.
    pub async fn initialize(&mut self) -> Result<HealthStatus> {
        match self.backend.teams().await {
            Ok(response) => self.teams = response.teams,
            Err(err) => {
                self.teams = Team::default_catalog();
                self.notifications.push(
                    Level::Info,
                    format!("using default team list ({err})"),
                );
            }
        }
        self.backend.health().await
    }

    /// Handle one UI action and return what to do next.
    ///
    /// No error is fatal: failures and local rejections become notifications
    /// and the controller returns to an interactive state.
    pub async fn dispatch(&mut self, action: Action) -> Effect {
        CONTROLLER_ACTIONS.click();
        let result = match action {
            Action::SubmitLogin { username, password } => {
                self.submit_login(username, password).await
            }
            Action::Logout => self.logout(),
            Action::RefreshDocuments { team, project } => {
                self.refresh_documents(team.as_deref(), project.as_deref()).await
            }
            Action::UploadFiles {
                team,
                project,
                files,
            } => self.upload_files(team, project, files).await,
            Action::DeleteDocument { id } => self.request_delete(id),
            Action::ConfirmDelete { id } => self.confirm_delete(id).await,
            Action::DownloadDocument { id } => self.download(id),
            Action::AskQuestion { question } => self.ask(question).await,
            Action::DismissNotification { id } => {
                self.notifications.dismiss(id);
                Ok(Effect::Refreshed)
            }
        };
        match result {
            Ok(effect) => effect,
            Err(err) => {
                if err.is_validation() {
                    CONTROLLER_REJECTIONS.click();
                }
                self.notifications.push(Level::Error, err.to_string());
                Effect::Failed
            }
        }
    }

    /// Record that the front end abandoned an in-flight dispatch.
    ///
    /// Dropping a dispatch future aborts the underlying request and the busy
    /// indicator releases with it; call this afterwards so the abort surfaces
    /// through the same notification channel as any other failure.
    pub fn abort(&mut self, message: impl Into<String>) -> Effect {
        self.notifications
            .push(Level::Error, Error::abort(message).to_string());
        Effect::Failed
    }

    async fn submit_login(&mut self, username: String, password: String) -> Result<Effect> {
        validate::credentials(&username, &password)?;

        let response = {
            let _logging_in = self.login_in_flight.acquire();
            self.backend
                .login(&LoginRequest::new(username, password))
                .await?
        };

        let greeting = format!("logged in as {}", response.user.display_name());
        self.session = Session::LoggedIn {
            user: response.user,
            token: response.access_token,
        };
        self.notifications.push(Level::Success, greeting);

        // A failed first snapshot should not undo the login.
        if let Err(err) = self.reload_documents().await {
            self.notifications.push(Level::Error, err.to_string());
        }
        Ok(Effect::LoggedIn)
    }

    fn logout(&mut self) -> Result<Effect> {
        self.session = Session::LoggedOut;
        self.documents.clear();
        self.history.clear();
        self.results.clear();
        Ok(Effect::LoggedOut)
    }

    async fn refresh_documents(
        &mut self,
        team: Option<&str>,
        project: Option<&str>,
    ) -> Result<Effect> {
        let token = self.require_token()?;
        let response = self.backend.documents(&token, team, project).await?;
        self.documents = response.documents;
        Ok(Effect::Refreshed)
    }

    async fn upload_files(
        &mut self,
        team: String,
        project: String,
        files: Vec<FilePart>,
    ) -> Result<Effect> {
        let token = self.require_token()?;
        validate::team_project(&team, &project)?;

        let mut accepted = Vec::new();
        let mut rejected = 0usize;
        for file in files {
            if validate::is_allowed_file(&file.filename) {
                accepted.push(file);
            } else {
                rejected += 1;
                CONTROLLER_REJECTIONS.click();
                self.notifications.push(
                    Level::Error,
                    format!("unsupported file type: {}", file.filename),
                );
            }
        }
        if accepted.is_empty() {
            return Err(Error::validation(
                "no supported files selected (.txt, .pdf, .doc, .docx)",
                Some("files".to_string()),
            ));
        }

        let response = {
            let _uploading = self.processing.acquire();
            self.backend
                .upload(&token, &team, &project, accepted)
                .await?
        };

        let processed = response.processed_count();
        self.notifications.push(
            Level::Success,
            response
                .message
                .unwrap_or_else(|| format!("processed {processed} files")),
        );
        if let Err(err) = self.reload_documents().await {
            self.notifications.push(Level::Error, err.to_string());
        }
        Ok(Effect::Uploaded { processed, rejected })
    }

    fn request_delete(&self, id: u64) -> Result<Effect> {
        self.require_token()?;
        let document = self
            .documents
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| {
                Error::not_found(
                    "no such document in the current list",
                    Some("document".to_string()),
                    Some(id.to_string()),
                )
            })?;
        Ok(Effect::ConfirmDelete {
            id,
            filename: document.display_name().to_string(),
        })
    }

    async fn confirm_delete(&mut self, id: u64) -> Result<Effect> {
        let token = self.require_token()?;
        self.backend.delete_document(&token, id).await?;
        self.notifications
            .push(Level::Success, "document deleted");
        // Re-fetch rather than removing locally; the backend is the source
        // of truth for what the deletion actually took out.
        self.reload_documents().await?;
        Ok(Effect::Refreshed)
    }

    fn download(&mut self, id: u64) -> Result<Effect> {
        self.require_token()?;
        Ok(Effect::OpenUrl(self.backend.download_url(id)?))
    }

    async fn ask(&mut self, question: String) -> Result<Effect> {
        let question = validate::question(&question)?;
        self.history.push(question.clone());

        let start = Instant::now();
        let response = {
            let _processing = self.processing.acquire();
            self.backend.ask(&AskRequest::new(question)).await?
        };
        ASK_DURATION.add(start.elapsed().as_secs_f64());

        self.results.insert(0, response);
        Ok(Effect::Answered)
    }

    fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .map(String::from)
            .ok_or_else(|| Error::authentication("log in to manage documents"))
    }

    async fn reload_documents(&mut self) -> Result<()> {
        let token = self.require_token()?;
        let response = self.backend.documents(&token, None, None).await?;
        self.documents = response.documents;
        Ok(())
    }

    /// Probe backend liveness on demand.
    pub async fn health(&self) -> Result<HealthStatus> {
        self.backend.health().await
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The observable authentication state.
    pub fn auth_state(&self) -> AuthState {
        if self.session.is_logged_in() {
            AuthState::LoggedIn
        } else if self.login_in_flight.is_busy() {
            AuthState::LoggingIn
        } else {
            AuthState::LoggedOut
        }
    }

    /// The team catalog for the upload form.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// The current document snapshot.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Questions asked this session, newest first.
    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Answers received this session, newest first.
    pub fn results(&self) -> &[AskResponse] {
        &self.results
    }

    /// Currently visible notifications.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Sweep notifications past their auto-dismiss interval.
    pub fn expire_notifications(&mut self, now: Instant) {
        self.notifications.expire(now);
    }

    /// True while a request that shows the busy indicator is in flight.
    pub fn is_processing(&self) -> bool {
        self.processing.is_busy()
    }
}
