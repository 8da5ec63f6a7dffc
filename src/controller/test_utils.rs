//! Fluent assertions over controller outcomes plus a scripted repository, so each
//! controller test reads as one chain:
//!
//! ```ignore
//! ControllerCall::from(controller.create(person))
//!     .should_render_view("Edit")
//!     .with_model(&person)
//!     .and_model_error_for(Field::EmailAddress)
//!     .that_equals(DUPLICATE_EMAIL_MESSAGE);
//! ```

use std::sync::Mutex;

use crate::{
    consts::consts::PersonId,
    database::repository::{PersonRepository, StoreResult},
    model::{
        person::Person,
        validation::{Field, FieldErrors},
    },
};

use super::outcome::{Outcome, EDIT_VIEW};

pub struct ControllerCall {
    outcome: Outcome,
}

impl From<Outcome> for ControllerCall {
    fn from(outcome: Outcome) -> Self {
        Self { outcome }
    }
}

impl From<StoreResult<Outcome>> for ControllerCall {
    fn from(result: StoreResult<Outcome>) -> Self {
        match result {
            Ok(outcome) => Self { outcome },
            Err(e) => panic!("Expected an outcome, but the action failed with: {}", e),
        }
    }
}

impl ControllerCall {
    fn kind(&self) -> &'static str {
        match self.outcome {
            Outcome::ShowForm { .. } => "ShowForm",
            Outcome::RedirectToIndex => "RedirectToIndex",
            Outcome::NotFound { .. } => "NotFound",
        }
    }

    pub fn should_render_view(self, view_name: &str) -> ViewResultTest {
        let kind = self.kind();

        match self.outcome {
            Outcome::ShowForm {
                view,
                model,
                field_errors,
            } => {
                assert_eq!(
                    view, view_name,
                    "Expected result view to be '{}', but instead was given '{}'.",
                    view_name, view
                );

                ViewResultTest {
                    model,
                    field_errors,
                }
            }
            _ => panic!(
                "Expected action result to be a ShowForm, but instead received a {}.",
                kind
            ),
        }
    }

    /// Every form action renders the edit template
    pub fn should_render_default_view(self) -> ViewResultTest {
        self.should_render_view(EDIT_VIEW)
    }

    pub fn should_redirect_to_index(self) {
        assert!(
            matches!(self.outcome, Outcome::RedirectToIndex),
            "Expected action result to be a RedirectToIndex, but instead received a {}.",
            self.kind()
        );
    }

    pub fn should_give_http_status(self, status: u16) {
        assert_eq!(
            self.outcome.status(),
            Some(status),
            "Expected HTTP status {}, but instead received a {}.",
            status,
            self.kind()
        );
    }
}

pub struct ViewResultTest {
    model: Person,
    field_errors: FieldErrors,
}

impl ViewResultTest {
    pub fn with_model(self, expected: &Person) -> Self {
        assert_eq!(
            &self.model, expected,
            "Expected view model to be the given person."
        );
        self
    }

    pub fn with_no_model_errors(self) -> Self {
        assert!(
            self.field_errors.is_empty(),
            "Expected no model errors, but found: {:?}",
            self.field_errors
        );
        self
    }

    pub fn and_model_error_for(self, field: Field) -> ModelErrorTest {
        let messages = match self.field_errors.get(field) {
            Some(messages) => messages.to_vec(),
            None => panic!(
                "Expected a model error for '{}', but found none. Errors: {:?}",
                field, self.field_errors
            ),
        };

        ModelErrorTest {
            view: self,
            field,
            messages,
        }
    }
}

pub struct ModelErrorTest {
    view: ViewResultTest,
    field: Field,
    messages: Vec<String>,
}

impl ModelErrorTest {
    pub fn that_equals(self, expected: &str) -> ViewResultTest {
        assert!(
            self.messages.iter().any(|m| m == expected),
            "Expected error message for '{}' to be '{}', but instead found {:?}.",
            self.field,
            expected,
            self.messages
        );
        self.view
    }

    pub fn containing(self, fragment: &str) -> ViewResultTest {
        assert!(
            self.messages.iter().any(|m| m.contains(fragment)),
            "Expected error message for '{}' to contain '{}', but instead found {:?}.",
            self.field,
            fragment,
            self.messages
        );
        self.view
    }
}

#[derive(Default)]
struct FakeState {
    person: Option<Person>,
    email_belongs_to_someone_else: bool,
    email_checks: usize,
    last_excluded_id: Option<PersonId>,
    saved: Vec<Person>,
}

/// Repository whose answers are set by the test and which records what it was asked
#[derive(Default)]
pub struct FakePersonRepository {
    state: Mutex<FakeState>,
}

impl FakePersonRepository {
    pub fn set_person(&self, person: Person) {
        self.state.lock().unwrap().person = Some(person);
    }

    pub fn set_email_belongs_to_someone_else(&self, value: bool) {
        self.state.lock().unwrap().email_belongs_to_someone_else = value;
    }

    pub fn email_checks(&self) -> usize {
        self.state.lock().unwrap().email_checks
    }

    pub fn last_excluded_id(&self) -> Option<PersonId> {
        self.state.lock().unwrap().last_excluded_id
    }

    pub fn saved(&self) -> Vec<Person> {
        self.state.lock().unwrap().saved.clone()
    }
}

impl PersonRepository for FakePersonRepository {
    fn get_by_id(&self, id: PersonId) -> Option<Person> {
        self.state
            .lock()
            .unwrap()
            .person
            .clone()
            .filter(|p| p.id == id)
    }

    fn get_all(&self) -> Vec<Person> {
        self.state.lock().unwrap().person.clone().into_iter().collect()
    }

    fn save(&self, person: &mut Person) -> StoreResult<()> {
        self.state.lock().unwrap().saved.push(person.clone());
        Ok(())
    }

    fn email_belongs_to_someone_else(&self, _email_address: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        state.email_checks += 1;
        state.email_belongs_to_someone_else
    }

    fn email_belongs_to_someone_else_excluding(
        &self,
        _email_address: &str,
        id_of_existing_person: PersonId,
    ) -> bool {
        let mut state = self.state.lock().unwrap();
        state.email_checks += 1;
        state.last_excluded_id = Some(id_of_existing_person);
        state.email_belongs_to_someone_else
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "Expected action result to be a ShowForm, but instead received a RedirectToIndex.")]
    fn rendering_a_redirect_fails() {
        ControllerCall::from(Outcome::RedirectToIndex).should_render_view("Edit");
    }

    #[test]
    #[should_panic(expected = "Expected HTTP status 404, but instead received a ShowForm.")]
    fn status_of_a_form_fails() {
        ControllerCall::from(Outcome::show_form(Person::new_test(), FieldErrors::new()))
            .should_give_http_status(404);
    }

    #[test]
    #[should_panic(expected = "Expected a model error for 'emailAddress'")]
    fn missing_model_error_fails() {
        ControllerCall::from(Outcome::show_form(Person::new_test(), FieldErrors::new()))
            .should_render_default_view()
            .and_model_error_for(Field::EmailAddress);
    }

    #[test]
    fn partial_message_match() {
        ControllerCall::from(Outcome::show_form(
            Person::default(),
            FieldErrors::single(Field::FirstName, Field::FirstName.required_message()),
        ))
        .should_render_default_view()
        .and_model_error_for(Field::FirstName)
        .containing("is required");
    }
}
