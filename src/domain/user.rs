use serde::Serialize;

/// A user row as the dashboard understands it.
///
/// `id` is the stable identity key for the record's lifetime; the remaining
/// fields are display data derived from the remote payload or form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// Validated form payload for creating or editing a user.
///
/// Serialized as-is as the body of create/update calls, using the remote
/// API's camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
}

/// Shallow-merge patch for updating an existing record.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl UserRecord {
    /// Builds a record from a controller-assigned id and a validated field set.
    pub fn from_fields(id: u64, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            department: fields.department,
        }
    }

    /// Current field values, used to prefill the edit form.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
        }
    }

    /// Merges the patch into this record, leaving unset fields untouched.
    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
    }
}

impl From<UserFields> for UserPatch {
    fn from(fields: UserFields) -> Self {
        Self {
            first_name: Some(fields.first_name),
            last_name: Some(fields.last_name),
            email: Some(fields.email),
            department: Some(fields.department),
        }
    }
}
