//! Relationship labels on graph edges

use serde::{Deserialize, Serialize};

/// Label on a directed edge between two person ids
///
/// An edge `a -> b` tagged `Parent` means b is a parent of a; tagged `Child`
/// it means b is a child of a. `Spouse` is symmetric. Relationships are
/// always written as reciprocal pairs: registering a child writes
/// `child -> parent : Parent` together with `parent -> child : Child`, and
/// registering spouses writes `Spouse` in both directions. Absence of an
/// edge means the two people are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    Parent,
    Child,
    Spouse,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
        }
    }

    /// The label carried by the reciprocal edge
    pub fn reciprocal(&self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Spouse => Self::Spouse,
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reciprocal_labels() {
        assert_eq!(RelationshipKind::Parent.reciprocal(), RelationshipKind::Child);
        assert_eq!(RelationshipKind::Child.reciprocal(), RelationshipKind::Parent);
        assert_eq!(RelationshipKind::Spouse.reciprocal(), RelationshipKind::Spouse);
    }

    #[test]
    fn test_display() {
        assert_eq!(RelationshipKind::Spouse.to_string(), "spouse");
    }
}
