//! Dashboard orchestration: sequences remote calls and keeps the store
//! consistent with their outcomes. The controller is the sole mutator of the
//! store; the rendering layer only reads the borrowed view.

use tracing::{error, info, instrument};

use crate::domain::{UserFields, UserRecord};
use crate::error::DashboardError;
use crate::mapper::map_users;
use crate::notify::Notifier;
use crate::remote::UserApi;
use crate::store::UserStore;
use crate::validation::validate;

/// Add/edit modal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalMode),
}

/// What an open modal will do on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit { id: u64 },
}

pub struct DashboardController<A, N> {
    remote: A,
    notifier: N,
    store: UserStore,
    modal: ModalState,
}

impl<A: UserApi, N: Notifier> DashboardController<A, N> {
    pub fn new(remote: A, notifier: N) -> Self {
        Self {
            remote,
            notifier,
            store: UserStore::new(),
            modal: ModalState::Closed,
        }
    }

    /// Initial fetch. On failure the store stays empty and a failure notice
    /// is emitted, so the user sees the gap instead of a silently blank grid.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        match self.remote.list().await {
            Ok(raw) => {
                let records = map_users(raw);
                info!(count = records.len(), "Users loaded");
                self.store.load(records);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Initial load failed");
                self.notifier.failure("Failed to load users!");
                Err(e.into())
            }
        }
    }

    /// Deletes remotely, then mirrors the removal locally. The store is only
    /// touched after the remote call succeeds.
    #[instrument(skip(self))]
    pub async fn delete(&mut self, id: u64) -> Result<(), DashboardError> {
        match self.remote.delete(id).await {
            Ok(()) => {
                self.store.remove(id);
                self.notifier.success("User deleted successfully!");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, user_id = id, "Delete failed");
                self.notifier.failure("Failed to delete user!");
                Err(e.into())
            }
        }
    }

    /// Opens the modal in add mode with a blank form.
    pub fn open_add(&mut self) {
        self.modal = ModalState::Open(ModalMode::Add);
    }

    /// Opens the modal in edit mode, returning the prefill for the form.
    /// Returns `None` (modal stays closed) when the id is no longer present.
    pub fn open_edit(&mut self, id: u64) -> Option<UserFields> {
        let prefill = self.store.get(id)?.fields();
        self.modal = ModalState::Open(ModalMode::Edit { id });
        Some(prefill)
    }

    /// Closes the modal unconditionally, discarding any form input.
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Submits the form for the open modal.
    ///
    /// Validation runs first; a failure reports every offending field and
    /// makes no network call. Network failures also leave the modal open.
    /// The modal closes only once the remote call has succeeded and the
    /// store reflects it.
    #[instrument(skip(self, fields))]
    pub async fn submit(&mut self, fields: UserFields) -> Result<(), DashboardError> {
        let ModalState::Open(mode) = self.modal else {
            return Err(DashboardError::ModalClosed);
        };
        if let Err(errors) = validate(&fields) {
            return Err(DashboardError::Validation(errors));
        }
        let result = match mode {
            ModalMode::Edit { id } => self.submit_edit(id, fields).await,
            ModalMode::Add => self.submit_add(fields).await,
        };
        if result.is_ok() {
            self.modal = ModalState::Closed;
        }
        result
    }

    async fn submit_edit(&mut self, id: u64, fields: UserFields) -> Result<(), DashboardError> {
        match self.remote.update(id, &fields).await {
            Ok(_ack) => {
                self.store.update(id, fields.into());
                self.notifier.success("User updated successfully!");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, user_id = id, "Update failed");
                self.notifier.failure("Failed to update user!");
                Err(e.into())
            }
        }
    }

    async fn submit_add(&mut self, fields: UserFields) -> Result<(), DashboardError> {
        match self.remote.create(&fields).await {
            // The mock backend does not allocate durable ids; whatever the
            // ack carries is discarded in favor of the next local id.
            Ok(_ack) => {
                let record = UserRecord::from_fields(self.store.next_id(), fields);
                info!(user_id = record.id, "Assigned local id");
                self.store.insert(record);
                self.notifier.success("User added successfully!");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Create failed");
                self.notifier.failure("Failed to add user!");
                Err(e.into())
            }
        }
    }

    /// Applies the search term synchronously; no network call involved.
    pub fn search(&mut self, term: impl Into<String>) {
        self.store.set_search_term(term);
    }

    /// Rows to render, already filtered by the active search term.
    pub fn view(&self) -> &[UserRecord] {
        self.store.view()
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }
}
