//! Validated skill name type.

use super::CatalogDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Validated skill name with case-insensitive identity.
///
/// Skill names preserve the casing they were written with (e.g. `SQL`,
/// `Machine Learning`) for display, while equality, hashing, and catalog
/// lookup use a lowercase folded form. The informal skill vocabulary is
/// deliberately open: nothing checks a skill against a canonical list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillName {
    raw: String,
    folded: String,
}

impl SkillName {
    /// Creates a validated skill name.
    ///
    /// The input is trimmed; original casing is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogDomainError::EmptySkillName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, CatalogDomainError> {
        let raw = value.into().trim().to_owned();
        if raw.is_empty() {
            return Err(CatalogDomainError::EmptySkillName);
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    /// Returns the skill name as written, surrounding whitespace removed.
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

impl PartialEq for SkillName {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for SkillName {}

impl Hash for SkillName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl TryFrom<String> for SkillName {
    type Error = CatalogDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillName> for String {
    fn from(skill: SkillName) -> Self {
        skill.raw
    }
}

impl AsRef<str> for SkillName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SkillName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
