//! Declarative form validation: a static table of field rules evaluated
//! synchronously before any submit reaches the network.

use crate::domain::UserFields;

/// Form fields the modal collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Department,
}

/// A failed rule: which field and the inline message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

struct Rule {
    field: Field,
    message: &'static str,
    check: fn(&UserFields) -> bool,
}

static RULES: &[Rule] = &[
    Rule {
        field: Field::FirstName,
        message: "Please enter first name!",
        check: |f| !f.first_name.trim().is_empty(),
    },
    Rule {
        field: Field::LastName,
        message: "Please enter last name!",
        check: |f| !f.last_name.trim().is_empty(),
    },
    Rule {
        field: Field::Email,
        message: "Please enter email!",
        check: |f| !f.email.trim().is_empty(),
    },
    Rule {
        field: Field::Department,
        message: "Please enter department!",
        check: |f| !f.department.trim().is_empty(),
    },
];

/// Runs every rule and reports all failures, one per field.
pub fn validate(fields: &UserFields) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = RULES
        .iter()
        .filter(|rule| !(rule.check)(fields))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message,
        })
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
