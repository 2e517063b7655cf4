//! Kinship Core - family relationship graph engine
//!
//! This crate provides the person registry and the directed, labeled
//! relationship graph that backs all derived-relationship queries
//! (siblings, aunts/uncles, cousins, in-laws).

pub mod error;
pub mod graph;
mod kin;
pub mod person;
pub mod registry;
pub mod relationship;
pub mod tree;

pub use error::{Error, Result};
pub use graph::RelationGraph;
pub use person::{NewPerson, Person, PersonId, Sex};
pub use registry::PersonRegistry;
pub use relationship::RelationshipKind;
pub use tree::FamilyTree;
