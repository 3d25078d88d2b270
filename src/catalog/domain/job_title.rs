//! Validated job title type.

use super::CatalogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Validated job title with case-insensitive identity.
///
/// Profile lookup treats `Data Scientist`, `data scientist`, and
/// `DATA SCIENTIST` as the same title; the casing supplied at construction
/// is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobTitle {
    raw: String,
    folded: String,
}

impl JobTitle {
    /// Creates a validated job title.
    ///
    /// The input is trimmed; original casing is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptyJobTitle`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into().trim().to_owned();
        if raw.is_empty() {
            return Err(CatalogDomainError::EmptyJobTitle);
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    /// Returns the job title as written, surrounding whitespace removed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the lowercase folded form used for comparison and lookup.
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialEq for JobTitle {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for JobTitle {}

impl Hash for JobTitle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl TryFrom<String> for JobTitle {
    type Error = CatalogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobTitle> for String {
    fn from(title: JobTitle) -> Self {
        title.raw
    }
}

impl AsRef<str> for JobTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
