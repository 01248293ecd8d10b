//! Root coordinator: owns the in-memory collection and orchestrates the
//! remote operations.
//!
//! # Design
//! `App` is the single owner of the canonical `Vec<User>`, the
//! loading/error flags, the form and the editing mode. It is generic over
//! a [`Transport`], so the same orchestration runs against a live HTTP
//! agent or a scripted test double. The collection is mutated only after
//! a completed round-trip: replaced wholesale on fetch, patched by id
//! after each successful mutation.
//!
//! Every remote failure collapses to one generic user-facing message per
//! action; the underlying [`ApiError`] detail is logged, never shown.

use uuid::Uuid;

use crate::client::UserClient;
use crate::error::ApiError;
use crate::form::UserForm;
use crate::http::Transport;
use crate::list::ConfirmDelete;
use crate::types::{User, UserDraft};

const FETCH_FAILED: &str = "Failed to fetch users. Make sure the backend is running.";
const CREATE_FAILED: &str = "Failed to create user";
const UPDATE_FAILED: &str = "Failed to update user";
const DELETE_FAILED: &str = "Failed to delete user";

/// What the form is currently for: creating a new record, or editing an
/// existing one. Owned solely by the coordinator; the form itself only
/// ever sees the target's field values via `reset_for`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(User),
}

/// The root coordinator.
pub struct App<T: Transport> {
    client: UserClient,
    transport: T,
    users: Vec<User>,
    loading: bool,
    error: Option<String>,
    mode: FormMode,
    form: UserForm,
}

impl<T: Transport> App<T> {
    pub fn new(client: UserClient, transport: T) -> Self {
        Self {
            client,
            transport,
            users: Vec::new(),
            loading: false,
            error: None,
            mode: FormMode::Creating,
            form: UserForm::new(),
        }
    }

    /// Startup sequence: fetch the collection, then probe the backend's
    /// health. The probe is best-effort and log-only; its failure never
    /// surfaces to the user and never blocks anything.
    pub async fn start(&mut self) {
        self.refresh().await;
        self.check_health().await;
    }

    /// Replace the collection with the server's. On failure the previous
    /// collection (possibly empty, on first load) stays displayed.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.list().await {
            Ok(users) => self.users = users,
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch users");
                self.error = Some(FETCH_FAILED.to_string());
            }
        }
        self.loading = false;
    }

    /// Best-effort liveness probe of the backend.
    pub async fn check_health(&self) {
        let result: Result<String, ApiError> = async {
            let response = self.transport.execute(self.client.build_health_check()).await?;
            self.client.parse_health_check(response)
        }
        .await;
        match result {
            Ok(body) => tracing::debug!(%body, "backend health"),
            Err(err) => tracing::warn!(error = %err, "health check failed"),
        }
    }

    /// Validate and submit the form: create in `Creating` mode, update
    /// in `Editing` mode. Returns `true` on success so frontends know
    /// the draft was consumed. A draft that fails validation never
    /// reaches the network; a submit already in flight is rejected.
    pub async fn submit_form(&mut self) -> bool {
        if !self.form.validate() {
            return false;
        }
        if !self.form.begin_submit() {
            return false;
        }
        let draft = self.form.draft().clone();
        let target = match &self.mode {
            FormMode::Creating => None,
            FormMode::Editing(user) => Some(user.id),
        };
        let ok = match target {
            None => self.submit_create(draft).await,
            Some(id) => self.submit_update(id, draft).await,
        };
        self.form.finish_submit();
        ok
    }

    async fn submit_create(&mut self, draft: UserDraft) -> bool {
        match self.create(&draft).await {
            Ok(user) => {
                self.users.push(user);
                self.form.reset_for(None);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create user");
                self.error = Some(CREATE_FAILED.to_string());
                false
            }
        }
    }

    async fn submit_update(&mut self, id: Uuid, draft: UserDraft) -> bool {
        match self.update(id, &draft).await {
            Ok(updated) => {
                if let Some(slot) = self.users.iter_mut().find(|u| u.id == id) {
                    *slot = updated;
                }
                self.mode = FormMode::Creating;
                self.form.reset_for(None);
                true
            }
            Err(err) => {
                // The form stays open on the same target for a retry.
                tracing::error!(error = %err, %id, "failed to update user");
                self.error = Some(UPDATE_FAILED.to_string());
                false
            }
        }
    }

    /// Delete a record after explicit confirmation. Declining does
    /// nothing at all. A failed delete (including a 404 for an id that
    /// was already removed) leaves the collection unchanged.
    pub async fn delete_user(&mut self, id: Uuid, confirm: &dyn ConfirmDelete) {
        let Some(user) = self.users.iter().find(|u| u.id == id).cloned() else {
            return;
        };
        if !confirm.confirm(&user) {
            return;
        }
        match self.delete(id).await {
            Ok(()) => self.users.retain(|u| u.id != id),
            Err(err) => {
                tracing::error!(error = %err, %id, "failed to delete user");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Switch the form to edit mode for the given record. Unknown ids
    /// are ignored. Any unsaved edits to a previous target are discarded.
    pub fn edit_user(&mut self, id: Uuid) {
        let Some(user) = self.users.iter().find(|u| u.id == id).cloned() else {
            return;
        };
        self.form.reset_for(Some(&user));
        self.mode = FormMode::Editing(user);
    }

    /// Leave edit mode and reset the form to an empty create draft.
    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Creating;
        self.form.reset_for(None);
    }

    /// Clear the current error message without retrying anything.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UserForm {
        &mut self.form
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let response = self.transport.execute(self.client.build_list_users()).await?;
        self.client.parse_list_users(response)
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let request = self.client.build_create_user(draft)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_create_user(response)
    }

    async fn update(&self, id: Uuid, draft: &UserDraft) -> Result<User, ApiError> {
        let request = self.client.build_update_user(id, draft)?;
        let response = self.transport.execute(request).await?;
        self.client.parse_update_user(response)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self.transport.execute(self.client.build_delete_user(id)).await?;
        self.client.parse_delete_user(response)
    }
}
