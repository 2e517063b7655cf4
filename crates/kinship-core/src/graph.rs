//! Relationship graph - storage, registration, and direct reads

use std::collections::{BTreeMap, HashMap};

use crate::error::Result;
use crate::person::{Person, PersonId};
use crate::registry::PersonRegistry;
use crate::relationship::RelationshipKind;

/// Directed, labeled relationship graph over person ids
///
/// The graph stores at most one label per ordered pair of ids and holds only
/// ids; person attributes (birth year, sex) are read through the registry
/// passed to each operation. Edges are written in reciprocal pairs and never
/// removed. The inner adjacency map is ordered by id so every query
/// enumerates related people deterministically, in ascending-id order.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    edges: HashMap<PersonId, BTreeMap<PersonId, RelationshipKind>>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label on the edge `from -> to`, if the two are related
    pub fn relationship(&self, from: PersonId, to: PersonId) -> Option<RelationshipKind> {
        self.edges.get(&from).and_then(|adj| adj.get(&to)).copied()
    }

    /// Number of directed edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    fn add_edge(&mut self, from: PersonId, to: PersonId, kind: RelationshipKind) {
        self.edges.entry(from).or_default().insert(to, kind);
    }

    /// Writes `from -> to : kind` together with its reciprocal edge.
    /// Callers must have finished all validation; these writes cannot fail.
    fn add_reciprocal(&mut self, from: PersonId, to: PersonId, kind: RelationshipKind) {
        self.add_edge(from, to, kind);
        self.add_edge(to, from, kind.reciprocal());
    }

    /// Ids related to `id` by an edge tagged `kind`, in ascending-id order
    pub(crate) fn related_ids(&self, id: PersonId, kind: RelationshipKind) -> Vec<PersonId> {
        self.edges
            .get(&id)
            .map(|adj| {
                adj.iter()
                    .filter(|(_, k)| **k == kind)
                    .map(|(other, _)| *other)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn parent_ids(&self, id: PersonId) -> Vec<PersonId> {
        self.related_ids(id, RelationshipKind::Parent)
    }

    pub(crate) fn child_ids(&self, id: PersonId) -> Vec<PersonId> {
        self.related_ids(id, RelationshipKind::Child)
    }

    pub(crate) fn spouse_id(&self, id: PersonId) -> Option<PersonId> {
        self.related_ids(id, RelationshipKind::Spouse).first().copied()
    }

    /// Materialize a sequence of ids as person records, preserving order
    pub(crate) fn materialize(
        &self,
        registry: &PersonRegistry,
        ids: impl IntoIterator<Item = PersonId>,
    ) -> Result<Vec<Person>> {
        ids.into_iter().map(|id| registry.get(id).cloned()).collect()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────

    /// Record `a` and `b` as spouses
    ///
    /// Returns `Ok(false)` without touching the graph when a rule rejects
    /// the pair: same person, same sex, any existing relationship between
    /// the two, or an existing spouse on either side. `Err` only when an id
    /// names no registered person.
    pub fn register_spouses(
        &mut self,
        registry: &PersonRegistry,
        a: PersonId,
        b: PersonId,
    ) -> Result<bool> {
        let person_a = registry.get(a)?;
        let person_b = registry.get(b)?;

        if a == b {
            tracing::debug!("Spouse registration rejected: {} is one person", a);
            return Ok(false);
        }
        if person_a.sex == person_b.sex {
            tracing::debug!("Spouse registration rejected: {} and {} share a sex", a, b);
            return Ok(false);
        }
        if self.relationship(a, b).is_some() || self.relationship(b, a).is_some() {
            tracing::debug!("Spouse registration rejected: {} and {} already related", a, b);
            return Ok(false);
        }
        if self.spouse_id(a).is_some() || self.spouse_id(b).is_some() {
            tracing::debug!("Spouse registration rejected: existing spouse on {} or {}", a, b);
            return Ok(false);
        }

        self.add_reciprocal(a, b, RelationshipKind::Spouse);
        tracing::debug!("Registered spouses {} and {}", a, b);
        Ok(true)
    }

    /// Record `parent1` and `parent2` as the parents of `child`
    ///
    /// Both parent links are established in the same call; validation runs
    /// to completion before the first edge is written, so a rejected call
    /// never records a partial registration. Returns `Ok(false)` when the
    /// three ids are not distinct, the child's parents are already
    /// registered, the child already has any relationship with either
    /// proposed parent, a parent was born after the child, or the parents
    /// share a sex.
    pub fn register_child(
        &mut self,
        registry: &PersonRegistry,
        child: PersonId,
        parent1: PersonId,
        parent2: PersonId,
    ) -> Result<bool> {
        let child_record = registry.get(child)?;
        let first = registry.get(parent1)?;
        let second = registry.get(parent2)?;

        if child == parent1 || child == parent2 || parent1 == parent2 {
            tracing::debug!("Child registration rejected: ids not distinct");
            return Ok(false);
        }
        if !self.parent_ids(child).is_empty() {
            tracing::debug!("Child registration rejected: {} already has parents", child);
            return Ok(false);
        }
        if self.relationship(child, parent1).is_some()
            || self.relationship(child, parent2).is_some()
        {
            tracing::debug!(
                "Child registration rejected: {} already related to a proposed parent",
                child
            );
            return Ok(false);
        }
        if first.birth_year > child_record.birth_year
            || second.birth_year > child_record.birth_year
        {
            tracing::debug!("Child registration rejected: parent born after child {}", child);
            return Ok(false);
        }
        if first.sex == second.sex {
            tracing::debug!(
                "Child registration rejected: {} and {} share a sex",
                parent1,
                parent2
            );
            return Ok(false);
        }

        for parent in [parent1, parent2] {
            self.add_reciprocal(child, parent, RelationshipKind::Parent);
        }
        tracing::debug!("Registered child {} of {} and {}", child, parent1, parent2);
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Direct reads
    // ─────────────────────────────────────────────────────────────────────

    /// Parents of `id` (at most two)
    pub fn parents(&self, registry: &PersonRegistry, id: PersonId) -> Result<Vec<Person>> {
        registry.get(id)?;
        self.materialize(registry, self.parent_ids(id))
    }

    /// Children of `id`, in ascending-id order
    pub fn children(&self, registry: &PersonRegistry, id: PersonId) -> Result<Vec<Person>> {
        registry.get(id)?;
        self.materialize(registry, self.child_ids(id))
    }

    /// Spouse of `id`, if married
    pub fn spouse(&self, registry: &PersonRegistry, id: PersonId) -> Result<Option<Person>> {
        registry.get(id)?;
        match self.spouse_id(id) {
            Some(spouse) => Ok(Some(registry.get(spouse)?.clone())),
            None => Ok(None),
        }
    }
}
