use crate::shared::error::SbomError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// NewType wrapper for the identifier of the package a document describes
///
/// Only lower-case ASCII letters, digits, dashes and periods are accepted.
/// The identifier is fixed when the document is created; there is no setter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// # Errors
    /// Returns `SbomError::InvalidPackageId` if `id` is empty or contains a
    /// character outside `[a-z0-9.-]`
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        let valid = !id.is_empty() && id.chars().all(is_id_char);

        if !valid {
            return Err(SbomError::InvalidPackageId { package_id: id }.into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
