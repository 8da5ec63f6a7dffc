use std::sync::Arc;

use crate::{
    consts::consts::{PersonId, DUPLICATE_EMAIL_MESSAGE},
    database::repository::{PersonRepository, StoreResult},
    model::{
        person::Person,
        validation::{Field, FieldErrors},
    },
};

use super::outcome::Outcome;

/// Create / edit decision logic for people, independent of any web framework.
///
/// Field validation always runs first; the store is only asked about email
/// ownership once the submitted person is well formed.
pub struct PersonController {
    person_repository: Arc<dyn PersonRepository>,
}

impl PersonController {
    pub fn new(person_repository: Arc<dyn PersonRepository>) -> Self {
        Self { person_repository }
    }

    /// GET: /Person
    pub fn index(&self) -> Vec<Person> {
        self.person_repository.get_all()
    }

    /// GET: /Person/Create
    pub fn create_form(&self) -> Outcome {
        Outcome::show_form(Person::default(), FieldErrors::new())
    }

    /// POST: /Person/Create
    ///
    /// Any id on the submitted person is ignored, the store assigns a new one.
    pub fn create(&self, mut person: Person) -> StoreResult<Outcome> {
        let field_errors = person.validate();

        if !field_errors.is_empty() {
            log::debug!("Rejected create, invalid fields: {:?}", field_errors);
            return Ok(Outcome::show_form(person, field_errors));
        }

        if self
            .person_repository
            .email_belongs_to_someone_else(&person.email_address)
        {
            log::debug!("Rejected create, duplicate email [{}]", person.email_address);
            return Ok(duplicate_email(person));
        }

        person.id = PersonId::UNSET;
        self.person_repository.save(&mut person)?;

        log::info!("Created person [id: {}]", person.id);

        Ok(Outcome::RedirectToIndex)
    }

    /// GET: /Person/Edit/{id}
    pub fn edit_form(&self, id: PersonId) -> Outcome {
        match self.person_repository.get_by_id(id) {
            Some(person) => Outcome::show_form(person, FieldErrors::new()),
            None => {
                log::debug!("No person to edit [id: {}]", id);
                Outcome::not_found()
            }
        }
    }

    /// POST: /Person/Edit/{id}
    ///
    /// The id from the route wins over any id in the submitted person. An unset id
    /// never names a stored person and is not found. Saving any other id the store
    /// has never seen is a consistency error and is returned as `Err`.
    pub fn edit(&self, id: PersonId, mut person: Person) -> StoreResult<Outcome> {
        // Saving with an unset id would insert instead of update
        if id.is_unset() {
            log::debug!("No person to edit [id: {}]", id);
            return Ok(Outcome::not_found());
        }

        let field_errors = person.validate();

        if !field_errors.is_empty() {
            log::debug!("Rejected edit of [id: {}], invalid fields", id);
            return Ok(Outcome::show_form(person, field_errors));
        }

        if self
            .person_repository
            .email_belongs_to_someone_else_excluding(&person.email_address, id)
        {
            log::debug!(
                "Rejected edit of [id: {}], duplicate email [{}]",
                id,
                person.email_address
            );
            return Ok(duplicate_email(person));
        }

        person.id = id;
        self.person_repository.save(&mut person)?;

        log::info!("Updated person [id: {}]", id);

        Ok(Outcome::RedirectToIndex)
    }
}

fn duplicate_email(person: Person) -> Outcome {
    Outcome::show_form(
        person,
        FieldErrors::single(Field::EmailAddress, DUPLICATE_EMAIL_MESSAGE),
    )
}
