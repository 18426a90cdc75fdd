//! Pure search filter over user records.

use crate::domain::UserRecord;

/// Returns the ordered subsequence of `records` matching `term`.
///
/// Matching is a case-insensitive substring check against first name, last
/// name, email, or department. An empty term matches every record.
pub fn filter(records: &[UserRecord], term: &str) -> Vec<UserRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|user| matches(user, &needle))
        .cloned()
        .collect()
}

fn matches(user: &UserRecord, needle: &str) -> bool {
    needle.is_empty()
        || user.first_name.to_lowercase().contains(needle)
        || user.last_name.to_lowercase().contains(needle)
        || user.email.to_lowercase().contains(needle)
        || user.department.to_lowercase().contains(needle)
}
