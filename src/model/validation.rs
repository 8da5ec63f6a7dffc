use std::{collections::BTreeMap, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::consts::consts::EMAIL_PATTERN;

use super::person::Person;

/// Editable fields of a person, named the way callers submit them
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    EmailAddress,
}

impl Field {
    /// Sentence-cased name used inside validation messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::EmailAddress => "Email address",
        }
    }

    pub fn required_message(&self) -> String {
        format!("The {} field is required.", self.display_name())
    }

    pub fn invalid_email_message(&self) -> String {
        format!(
            "The {} field should be a valid email address.",
            self.display_name()
        )
    }
}

/// Field keyed error messages, kept in field order
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn single(field: Field, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.0.get(&field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.0.keys()
    }

    /// Number of messages across all fields
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn email_validator() -> Option<&'static Regex> {
    static EMAIL_VALIDATOR: OnceLock<Option<Regex>> = OnceLock::new();

    EMAIL_VALIDATOR
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// Empty values pass, they are reported by the required check instead. The whole
/// value must match, a trailing newline is rejected.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    email_validator().map_or(false, |validator| validator.is_match(value))
}

fn check_required(errors: &mut FieldErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, field.required_message());
    }
}

/// Runs every field rule and collects all failures, not only the first
pub fn validate_person(person: &Person) -> FieldErrors {
    let mut errors = FieldErrors::new();

    check_required(&mut errors, Field::FirstName, &person.first_name);
    check_required(&mut errors, Field::LastName, &person.last_name);
    check_required(&mut errors, Field::EmailAddress, &person.email_address);

    if !is_valid_email(&person.email_address) {
        errors.add(
            Field::EmailAddress,
            Field::EmailAddress.invalid_email_message(),
        );
    }

    errors
}
