//! Flattens raw remote users into the internal record shape.

use crate::domain::UserRecord;
use crate::remote::RemoteUser;

/// Placeholder department for users without an organization.
pub const NO_DEPARTMENT: &str = "N/A";

/// Maps one raw remote user to a [`UserRecord`].
///
/// The full name splits on the first whitespace boundary: the first token
/// becomes `first_name` (or the whole name when there is no whitespace), the
/// remaining tokens rejoin with single spaces as `last_name`. A missing
/// organization yields the [`NO_DEPARTMENT`] placeholder. Total: no input
/// fails to map.
pub fn map_user(raw: RemoteUser) -> UserRecord {
    let (first_name, last_name) = split_name(&raw.name);
    UserRecord {
        id: raw.id,
        first_name,
        last_name,
        email: raw.email,
        department: raw
            .company
            .map(|company| company.name)
            .unwrap_or_else(|| NO_DEPARTMENT.to_string()),
    }
}

/// Maps the fetched list element-wise, preserving order.
pub fn map_users(raw: Vec<RemoteUser>) -> Vec<UserRecord> {
    raw.into_iter().map(map_user).collect()
}

fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    match tokens.next() {
        Some(first) => (first.to_string(), tokens.collect::<Vec<_>>().join(" ")),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::RemoteCompany;

    fn raw(name: &str) -> RemoteUser {
        RemoteUser {
            id: 1,
            name: name.to_string(),
            email: "a@b.com".to_string(),
            company: None,
        }
    }

    #[test]
    fn splits_full_name_on_first_whitespace() {
        let user = map_user(raw("Ada Lovelace"));
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
    }

    #[test]
    fn single_token_name_leaves_last_name_empty() {
        let user = map_user(raw("Plato"));
        assert_eq!(user.first_name, "Plato");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn rejoins_remaining_tokens_with_single_spaces() {
        let user = map_user(raw("Mrs. Dennis  Schulist"));
        assert_eq!(user.first_name, "Mrs.");
        assert_eq!(user.last_name, "Dennis Schulist");
    }

    #[test]
    fn missing_company_maps_to_placeholder() {
        assert_eq!(map_user(raw("Plato")).department, NO_DEPARTMENT);
    }

    #[test]
    fn maps_list_shaped_payload() {
        let user = map_user(RemoteUser {
            id: 1,
            name: "Jane Doe".to_string(),
            email: "j@x.com".to_string(),
            company: Some(RemoteCompany {
                name: "Acme".to_string(),
            }),
        });
        assert_eq!(
            user,
            UserRecord {
                id: 1,
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                email: "j@x.com".to_string(),
                department: "Acme".to_string(),
            }
        );
    }

    #[test]
    fn maps_raw_json_end_to_end() {
        let raw: Vec<RemoteUser> = serde_json::from_str(
            r#"[{"id":1,"name":"Jane Doe","email":"j@x.com","company":{"name":"Acme"}}]"#,
        )
        .expect("decode");
        let records = map_users(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].first_name, "Jane");
        assert_eq!(records[0].department, "Acme");
    }
}
