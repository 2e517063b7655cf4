//! Person registry - append-only store of immutable person records

use crate::error::{Error, Result};
use crate::person::{NewPerson, Person, PersonId};

/// Append-only store of person records, keyed by sequential id
///
/// Ids are dense: the next registration always receives `len()` as its id,
/// regardless of how many relationship registrations were rejected in
/// between. Records are never mutated or removed.
#[derive(Debug, Clone, Default)]
pub struct PersonRegistry {
    persons: Vec<Person>,
}

impl PersonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person, assigning the next sequential id
    ///
    /// Always succeeds; returns a copy of the stored record.
    pub fn register(&mut self, new_person: NewPerson) -> Person {
        let person = Person {
            id: PersonId(self.persons.len() as u32),
            full_name: new_person.full_name,
            birth_year: new_person.birth_year,
            sex: new_person.sex,
        };
        self.persons.push(person.clone());
        tracing::debug!("Registered person {} ({})", person.id, person.full_name);
        person
    }

    /// Look up a person by id
    pub fn get(&self, id: PersonId) -> Result<&Person> {
        self.persons
            .get(id.index())
            .ok_or(Error::PersonNotFound(id))
    }

    /// Whether `id` names a registered person
    pub fn contains(&self, id: PersonId) -> bool {
        id.index() < self.persons.len()
    }

    /// Snapshot of every registered person, in registration order
    pub fn all(&self) -> Vec<Person> {
        self.persons.clone()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
