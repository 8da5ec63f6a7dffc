use thiserror::Error;

use crate::{consts::consts::PersonId, model::person::Person};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A save for a non zero id that the store has never handed out. Signals an
    /// upstream data error, callers should not retry.
    #[error("Attempt to save person {0} who didn't exist.")]
    PersonDoesNotExist(PersonId),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Everything the controller needs from a person store
pub trait PersonRepository: Send + Sync {
    fn get_by_id(&self, id: PersonId) -> Option<Person>;

    /// Snapshot of every person, in insertion order
    fn get_all(&self) -> Vec<Person>;

    /// Inserts when `person.id` is unset (writing the assigned id back),
    /// otherwise overwrites the stored person with the same id.
    fn save(&self, person: &mut Person) -> StoreResult<()>;

    fn email_belongs_to_someone_else(&self, email_address: &str) -> bool;

    /// Same as [`PersonRepository::email_belongs_to_someone_else`] but the person at
    /// `id_of_existing_person` may keep their own email
    fn email_belongs_to_someone_else_excluding(
        &self,
        email_address: &str,
        id_of_existing_person: PersonId,
    ) -> bool;
}
