//! # Mock Remote
//!
//! Utilities for testing the controller in isolation.
//!
//! # Testing Strategy
//! Controller tests should not stand up an HTTP server. Instead they drive
//! the controller through a scripted [`UserApi`] implementation: each
//! operation's outcome is programmed up front via [`Script`], and every call
//! is recorded so tests can assert which network operations happened (or,
//! for validation failures, that none did). A [`RecordingNotifier`] captures
//! the user-facing notices the same way.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::UserFields;
use crate::error::RemoteError;
use crate::notify::Notifier;
use crate::remote::{RemoteUser, RemoteWriteAck, UserApi};

/// A recorded interaction with the mock remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(UserFields),
    Update(u64, UserFields),
    Delete(u64),
}

/// Programmable outcomes for each remote operation.
#[derive(Debug, Default)]
pub struct Script {
    pub users: Vec<RemoteUser>,
    pub ack_id: Option<u64>,
    pub fail_list: bool,
    pub fail_create: bool,
    pub fail_update: bool,
    pub fail_delete: bool,
}

/// Scripted [`UserApi`] collaborator. Clones share the call log, so tests
/// keep one handle and move the other into the controller.
#[derive(Clone, Default)]
pub struct MockRemote {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    script: Script,
    calls: Mutex<Vec<Call>>,
}

impl MockRemote {
    pub fn new(script: Script) -> Self {
        Self {
            inner: Arc::new(Inner {
                script,
                calls: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.inner.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.inner.calls.lock().unwrap().push(call);
    }

    fn failure() -> RemoteError {
        RemoteError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[async_trait]
impl UserApi for MockRemote {
    async fn list(&self) -> Result<Vec<RemoteUser>, RemoteError> {
        self.record(Call::List);
        if self.inner.script.fail_list {
            return Err(Self::failure());
        }
        Ok(self.inner.script.users.clone())
    }

    async fn create(&self, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError> {
        self.record(Call::Create(fields.clone()));
        if self.inner.script.fail_create {
            return Err(Self::failure());
        }
        Ok(RemoteWriteAck {
            id: self.inner.script.ack_id,
        })
    }

    async fn update(&self, id: u64, fields: &UserFields) -> Result<RemoteWriteAck, RemoteError> {
        self.record(Call::Update(id, fields.clone()));
        if self.inner.script.fail_update {
            return Err(Self::failure());
        }
        Ok(RemoteWriteAck { id: Some(id) })
    }

    async fn delete(&self, id: u64) -> Result<(), RemoteError> {
        self.record(Call::Delete(id));
        if self.inner.script.fail_delete {
            return Err(Self::failure());
        }
        Ok(())
    }
}

/// A notice captured by [`RecordingNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// Captures notifications for assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn failure(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Failure(message.to_string()));
    }
}
