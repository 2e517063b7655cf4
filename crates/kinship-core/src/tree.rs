//! Combined registry + graph state

use crate::error::Result;
use crate::graph::RelationGraph;
use crate::person::{NewPerson, Person, PersonId};
use crate::registry::PersonRegistry;

/// One family record: the person registry plus the relationship graph
///
/// This is the single state object a caller (the interactive shell, a test)
/// owns and drives. The registry exclusively owns person records; the graph
/// holds only ids into it. Initialized empty, mutated in place, discarded at
/// exit — nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct FamilyTree {
    registry: PersonRegistry,
    graph: RelationGraph,
}

impl FamilyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new person and return the stored record
    pub fn register(&mut self, new_person: NewPerson) -> Person {
        self.registry.register(new_person)
    }

    /// Look up a person by id
    pub fn get(&self, id: PersonId) -> Result<Person> {
        self.registry.get(id).cloned()
    }

    /// Everyone registered so far, in registration order
    pub fn all(&self) -> Vec<Person> {
        self.registry.all()
    }

    /// Record two people as spouses; `Ok(false)` on rule rejection
    pub fn register_spouses(&mut self, a: PersonId, b: PersonId) -> Result<bool> {
        self.graph.register_spouses(&self.registry, a, b)
    }

    /// Record a child of two parents; `Ok(false)` on rule rejection
    pub fn register_child(
        &mut self,
        child: PersonId,
        parent1: PersonId,
        parent2: PersonId,
    ) -> Result<bool> {
        self.graph.register_child(&self.registry, child, parent1, parent2)
    }

    pub fn parents(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.parents(&self.registry, id)
    }

    pub fn children(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.children(&self.registry, id)
    }

    pub fn spouse(&self, id: PersonId) -> Result<Option<Person>> {
        self.graph.spouse(&self.registry, id)
    }

    pub fn siblings(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.siblings(&self.registry, id)
    }

    pub fn aunts_and_uncles(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.aunts_and_uncles(&self.registry, id)
    }

    pub fn cousins(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.cousins(&self.registry, id)
    }

    pub fn in_laws(&self, id: PersonId) -> Result<Vec<Person>> {
        self.graph.in_laws(&self.registry, id)
    }

    pub fn registry(&self) -> &PersonRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Sex;

    #[test]
    fn test_first_child_of_married_couple() {
        let mut tree = FamilyTree::new();
        let anna = tree.register(NewPerson::new("Anna", 1950, Sex::Female));
        let boris = tree.register(NewPerson::new("Boris", 1948, Sex::Male));

        assert!(tree.register_spouses(anna.id, boris.id).unwrap());

        let dima = tree.register(NewPerson::new("Dima", 1975, Sex::Male));
        assert!(tree.register_child(dima.id, anna.id, boris.id).unwrap());

        let parents = tree.parents(dima.id).unwrap();
        let parent_ids: Vec<_> = parents.iter().map(|p| p.id).collect();
        assert_eq!(parent_ids, vec![anna.id, boris.id]);
        assert!(tree.spouse(dima.id).unwrap().is_none());
    }

    #[test]
    fn test_second_child_makes_siblings() {
        let mut tree = FamilyTree::new();
        let anna = tree.register(NewPerson::new("Anna", 1950, Sex::Female));
        let boris = tree.register(NewPerson::new("Boris", 1948, Sex::Male));
        let dima = tree.register(NewPerson::new("Dima", 1975, Sex::Male));
        let ira = tree.register(NewPerson::new("Ira", 1978, Sex::Female));

        assert!(tree.register_spouses(anna.id, boris.id).unwrap());
        assert!(tree.register_child(dima.id, anna.id, boris.id).unwrap());
        assert!(tree.register_child(ira.id, anna.id, boris.id).unwrap());

        let dima_siblings = tree.siblings(dima.id).unwrap();
        assert_eq!(dima_siblings.len(), 1);
        assert_eq!(dima_siblings[0].id, ira.id);

        let ira_siblings = tree.siblings(ira.id).unwrap();
        assert_eq!(ira_siblings.len(), 1);
        assert_eq!(ira_siblings[0].id, dima.id);
    }

    #[test]
    fn test_ids_stay_dense_across_failed_operations() {
        let mut tree = FamilyTree::new();
        let a = tree.register(NewPerson::new("Anna", 1950, Sex::Female));
        let b = tree.register(NewPerson::new("Vera", 1952, Sex::Female));

        // Rejected registration does not burn an id.
        assert!(!tree.register_spouses(a.id, b.id).unwrap());
        let c = tree.register(NewPerson::new("Boris", 1948, Sex::Male));
        assert_eq!(c.id, PersonId(2));
    }

    #[test]
    fn test_get_round_trips_registration() {
        let mut tree = FamilyTree::new();
        let anna = tree.register(NewPerson::new("Anna", 1950, Sex::Female));
        assert_eq!(tree.get(anna.id).unwrap(), anna);
    }
}
