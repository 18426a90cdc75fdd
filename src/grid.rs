//! Column surface exposed to the rendering collaborator.

use crate::domain::UserRecord;

/// Grid columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Actions,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::FirstName,
        Column::LastName,
        Column::Email,
        Column::Department,
        Column::Actions,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::Email => "Email",
            Column::Department => "Department",
            Column::Actions => "Actions",
        }
    }

    /// Cell text for a row. `Actions` carries no text; the grid renders its
    /// edit/delete triggers there and routes them back to the controller.
    pub fn cell(self, user: &UserRecord) -> Option<String> {
        match self {
            Column::Id => Some(user.id.to_string()),
            Column::FirstName => Some(user.first_name.clone()),
            Column::LastName => Some(user.last_name.clone()),
            Column::Email => Some(user.email.clone()),
            Column::Department => Some(user.department.clone()),
            Column::Actions => None,
        }
    }
}
