//! In-memory user list with a derived filtered view.

pub mod filter;

use crate::domain::{UserPatch, UserRecord};
use self::filter::filter;

/// Authoritative user list plus the view derived from the active search term.
///
/// Owned exclusively by the controller. Every mutation recomputes the view
/// synchronously, so the two sequences never disagree between calls.
#[derive(Debug, Default)]
pub struct UserStore {
    authoritative: Vec<UserRecord>,
    view: Vec<UserRecord>,
    search_term: String,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole list, reapplying the active search term.
    pub fn load(&mut self, records: Vec<UserRecord>) {
        self.authoritative = records;
        self.refresh();
    }

    /// Appends a record and recomputes the view.
    pub fn insert(&mut self, record: UserRecord) {
        self.authoritative.push(record);
        self.refresh();
    }

    /// Shallow-merges `patch` into the record with `id`.
    ///
    /// Ids originate in this store, so an absent id is an application bug
    /// rather than a user-facing error; the call is a silent no-op then.
    pub fn update(&mut self, id: u64, patch: UserPatch) {
        if let Some(record) = self.authoritative.iter_mut().find(|r| r.id == id) {
            record.apply(patch);
        }
        self.refresh();
    }

    /// Removes the record with `id` from both sequences. No-op when absent.
    pub fn remove(&mut self, id: u64) {
        self.authoritative.retain(|r| r.id != id);
        self.refresh();
    }

    /// Sets the search term and recomputes the view.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.refresh();
    }

    /// Next client-assigned id: one past the highest id present, starting at 1.
    pub fn next_id(&self) -> u64 {
        self.authoritative.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    pub fn get(&self, id: u64) -> Option<&UserRecord> {
        self.authoritative.iter().find(|r| r.id == id)
    }

    /// The filtered view, in authoritative order.
    pub fn view(&self) -> &[UserRecord] {
        &self.view
    }

    /// The full list, unfiltered.
    pub fn records(&self) -> &[UserRecord] {
        &self.authoritative
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    fn refresh(&mut self) {
        self.view = filter(&self.authoritative, &self.search_term);
    }
}
