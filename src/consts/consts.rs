use std::fmt;

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PersonId(pub usize);

impl PersonId {
    /// Identity of a person that has not been saved yet
    pub const UNSET: PersonId = PersonId(0);

    pub fn is_unset(&self) -> bool {
        *self == PersonId::UNSET
    }

    pub fn to_number(self) -> usize {
        self.0
    }

    pub fn increment(&self) -> PersonId {
        PersonId(self.0 + 1)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Values
pub const START_AT_ID: PersonId = PersonId(1);

pub const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,4}$";

pub const DUPLICATE_EMAIL_MESSAGE: &str =
    "The Email address must be unique; that email address already exists in the system.";

/// Status reported for an edit of an unknown person
pub const NOT_FOUND_STATUS: u16 = 404;

/// Route the controller redirects to after a successful save
pub const INDEX_ROUTE: &str = "Index";
