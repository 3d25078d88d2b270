//! Course recommendation result: an insertion-ordered map keyed by the
//! caller's original skill strings.

use crate::catalog::domain::Course;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Courses recommended per requested skill.
///
/// Keys are the skill strings exactly as the caller supplied them, casing
/// included; lookup into the catalog happens on the folded form. Skills
/// with no catalog entry are omitted entirely rather than mapped to an
/// empty list, so "no recommendation" stays distinguishable from "empty
/// recommendation list". Key order follows first insertion; re-inserting
/// an identical key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRecommendations {
    entries: Vec<(String, Vec<Course>)>,
}

impl CourseRecommendations {
    /// Creates an empty recommendation map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces the courses for an original skill string.
    pub fn insert(&mut self, skill: String, courses: Vec<Course>) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| *key == skill) {
            entry.1 = courses;
        } else {
            self.entries.push((skill, courses));
        }
    }

    /// Returns the courses recorded for an exact original skill string.
    #[must_use]
    pub fn get(&self, skill: &str) -> Option<&[Course]> {
        self.entries
            .iter()
            .find(|(key, _)| key == skill)
            .map(|(_, courses)| courses.as_slice())
    }

    /// Returns the skill keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Course])> {
        self.entries
            .iter()
            .map(|(key, courses)| (key.as_str(), courses.as_slice()))
    }

    /// Returns the number of skills with recommendations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no requested skill had a catalog entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CourseRecommendations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (skill, courses) in &self.entries {
            map.serialize_entry(skill, courses)?;
        }
        map.end()
    }
}
