//! Person record types

use serde::{Deserialize, Serialize};

/// Unique identifier for a person
///
/// Assigned sequentially by the registry starting at 0, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl PersonId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sex classification used by the spousal and parental validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable person record
///
/// Created once via registration and never mutated or deleted; the record
/// lives as long as the registry that minted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Full name
    pub full_name: String,

    /// Year of birth
    pub birth_year: i32,

    /// Sex
    pub sex: Sex,
}

/// Data for registering a new person
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPerson {
    pub full_name: String,
    pub birth_year: i32,
    pub sex: Sex,
}

impl NewPerson {
    pub fn new(full_name: impl Into<String>, birth_year: i32, sex: Sex) -> Self {
        Self {
            full_name: full_name.into(),
            birth_year,
            sex,
        }
    }
}
