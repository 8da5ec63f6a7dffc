use serde::Serialize;

use crate::{
    consts::consts::{INDEX_ROUTE, NOT_FOUND_STATUS},
    model::{person::Person, validation::FieldErrors},
};

/// Template shared by the create and edit forms
pub const EDIT_VIEW: &str = "Edit";

/// Result of a controller action. The set is closed, no other statuses or
/// redirects are produced.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    /// Re-show the form with the submitted (or found) person and any field errors
    #[serde(rename_all = "camelCase")]
    ShowForm {
        view: &'static str,
        model: Person,
        field_errors: FieldErrors,
    },
    RedirectToIndex,
    NotFound { status: u16 },
}

impl Outcome {
    pub fn show_form(model: Person, field_errors: FieldErrors) -> Self {
        Outcome::ShowForm {
            view: EDIT_VIEW,
            model,
            field_errors,
        }
    }

    pub fn not_found() -> Self {
        Outcome::NotFound {
            status: NOT_FOUND_STATUS,
        }
    }

    pub fn redirect_route(&self) -> Option<&'static str> {
        match self {
            Outcome::RedirectToIndex => Some(INDEX_ROUTE),
            Outcome::ShowForm { .. } | Outcome::NotFound { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::NotFound { status } => Some(*status),
            Outcome::ShowForm { .. } | Outcome::RedirectToIndex => None,
        }
    }
}
