use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

use super::validation::{validate_person, FieldErrors};

/// A person as submitted by a caller or held by the store. Missing fields
/// deserialize to their empty values so that validation, not parsing, reports them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Person {
            id: PersonId::UNSET,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
        }
    }

    pub fn new_test() -> Self {
        Person::new("FirstName", "LastName", "email@email.com")
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_unset()
    }

    pub fn validate(&self) -> FieldErrors {
        validate_person(self)
    }

    /// Copies the editable fields onto an already stored person, identity is left alone
    pub fn apply_changes(&mut self, changes: &Person) {
        self.first_name = changes.first_name.clone();
        self.last_name = changes.last_name.clone();
        self.email_address = changes.email_address.clone();
    }
}
