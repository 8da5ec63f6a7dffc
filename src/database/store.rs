use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{consts::consts::PersonId, model::person::Person};

use super::{
    options::{SeedError, StoreOptions},
    repository::{PersonRepository, StoreError, StoreResult},
};

/// Process lifetime person store.
///
/// Identity is `count + 1` at insert time, which is only unique because people
/// are never removed. Inserts and in place updates take the write lock, so
/// computing the next id and appending happen as one step.
pub struct PersonStore {
    people: RwLock<Vec<Person>>,
}

impl Default for PersonStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonStore {
    pub fn new() -> Self {
        Self {
            people: RwLock::new(vec![]),
        }
    }

    /// Saves each person as a new record, any id they carry is discarded
    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        let store = Self::new();

        for mut person in people {
            person.id = PersonId::UNSET;
            store.insert(&mut person);
        }

        store
    }

    pub fn open(options: &StoreOptions) -> Result<Self, SeedError> {
        let people = options.load_seed()?;
        let store = Self::with_people(people);

        if let Some(seed_file) = options.seed_file() {
            log::info!(
                "Seeded [{}] people from [{}]",
                store.len(),
                seed_file.display()
            );
        }

        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock still guards a structurally valid list, so keep serving it
    fn read(&self) -> RwLockReadGuard<'_, Vec<Person>> {
        self.people.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
        self.people.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, person: &mut Person) {
        let mut people = self.write();

        person.id = PersonId(people.len()).increment();
        people.push(person.clone());

        log::debug!("Added person [id: {}]", person.id);
    }

    fn update(&self, person: &Person) -> StoreResult<()> {
        let mut people = self.write();

        let existing_person = people
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or(StoreError::PersonDoesNotExist(person.id))?;

        existing_person.apply_changes(person);

        log::debug!("Updated person [id: {}]", person.id);

        Ok(())
    }
}

impl PersonRepository for PersonStore {
    #[tracing::instrument(skip(self))]
    fn get_by_id(&self, id: PersonId) -> Option<Person> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    #[tracing::instrument(skip(self))]
    fn get_all(&self) -> Vec<Person> {
        self.read().clone()
    }

    #[tracing::instrument(skip(self))]
    fn save(&self, person: &mut Person) -> StoreResult<()> {
        if person.is_persisted() {
            return self.update(person);
        }

        self.insert(person);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn email_belongs_to_someone_else(&self, email_address: &str) -> bool {
        self.read().iter().any(|p| p.email_address == email_address)
    }

    #[tracing::instrument(skip(self))]
    fn email_belongs_to_someone_else_excluding(
        &self,
        email_address: &str,
        id_of_existing_person: PersonId,
    ) -> bool {
        self.read()
            .iter()
            .any(|p| p.email_address == email_address && p.id != id_of_existing_person)
    }
}
