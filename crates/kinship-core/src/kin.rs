//! Derived-relationship queries
//!
//! Siblings, aunts/uncles, cousins, and in-laws are never stored; each query
//! walks the parent/child/spouse edges recorded in the graph. Sibling lists
//! are deduplicated (full siblings share two parents but appear once);
//! aunt/uncle and cousin lists keep duplicates. Whether the latter should
//! also be deduplicated is an open requirements question, so the asymmetry
//! is kept as-is.

use crate::error::Result;
use crate::graph::RelationGraph;
use crate::person::{Person, PersonId};
use crate::registry::PersonRegistry;

impl RelationGraph {
    /// Ids of everyone sharing at least one parent with `id`, excluding `id`
    fn sibling_ids(&self, id: PersonId) -> Vec<PersonId> {
        let mut siblings = Vec::new();
        for parent in self.parent_ids(id) {
            for child in self.child_ids(parent) {
                if child != id && !siblings.contains(&child) {
                    siblings.push(child);
                }
            }
        }
        siblings
    }

    /// Each parent's siblings, followed by those siblings' spouses
    fn aunt_uncle_ids(&self, id: PersonId) -> Vec<PersonId> {
        let mut result = Vec::new();
        for parent in self.parent_ids(id) {
            let parent_siblings = self.sibling_ids(parent);
            result.extend(parent_siblings.iter().copied());
            for sibling in parent_siblings {
                if let Some(spouse) = self.spouse_id(sibling) {
                    result.push(spouse);
                }
            }
        }
        result
    }

    /// People sharing at least one registered parent with `id`
    ///
    /// Half-siblings are included; each sibling appears once even when both
    /// parents are shared.
    pub fn siblings(&self, registry: &PersonRegistry, id: PersonId) -> Result<Vec<Person>> {
        registry.get(id)?;
        self.materialize(registry, self.sibling_ids(id))
    }

    /// Siblings of each parent of `id`, plus those siblings' spouses
    pub fn aunts_and_uncles(
        &self,
        registry: &PersonRegistry,
        id: PersonId,
    ) -> Result<Vec<Person>> {
        registry.get(id)?;
        self.materialize(registry, self.aunt_uncle_ids(id))
    }

    /// Children of every aunt and uncle of `id`
    pub fn cousins(&self, registry: &PersonRegistry, id: PersonId) -> Result<Vec<Person>> {
        registry.get(id)?;
        let mut cousins = Vec::new();
        for aunt_or_uncle in self.aunt_uncle_ids(id) {
            cousins.extend(self.child_ids(aunt_or_uncle));
        }
        self.materialize(registry, cousins)
    }

    /// Parents of the spouse of `id`; empty when unmarried
    pub fn in_laws(&self, registry: &PersonRegistry, id: PersonId) -> Result<Vec<Person>> {
        registry.get(id)?;
        match self.spouse_id(id) {
            Some(spouse) => self.materialize(registry, self.parent_ids(spouse)),
            None => Ok(Vec::new()),
        }
    }
}
