//! Error types for Kinship Core

use crate::person::PersonId;
use thiserror::Error;

/// Result type alias using Kinship's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Kinship error types
///
/// Business-rule rejections (same-sex spouses, duplicate parents, birth-year
/// ordering) are not errors; registration operations report them as
/// `Ok(false)`. Errors are reserved for ids that do not name a registered
/// person.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}
