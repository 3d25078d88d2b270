//! Configuration shapes for the career reference tables.
//!
//! [`CatalogConfig`] mirrors the external JSON layout consumed at startup:
//!
//! ```json
//! {
//!   "job_skills":     { "data scientist": ["Python", "SQL"] },
//!   "job_listings":   [ { "title": "Data Scientist", "company": "Innovate AI",
//!                         "location": "Remote", "skills": ["Python"] } ],
//!   "course_catalog": { "python": [ { "title": "Python for Everybody",
//!                                     "platform": "Coursera",
//!                                     "link": "https://..." } ] }
//! }
//! ```
//!
//! Values here are raw strings; validation happens when a
//! [`CareerCatalog`](crate::catalog::CareerCatalog) is built from the
//! config.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw course entry as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseConfig {
    /// Course title.
    pub title: String,
    /// Hosting platform.
    pub platform: String,
    /// Course link.
    pub link: String,
}

/// Raw job listing as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Listing title.
    pub title: String,
    /// Hiring company.
    pub company: String,
    /// Listing location.
    pub location: String,
    /// Required skill names.
    pub skills: Vec<String>,
}

/// The three reference tables in their external configuration shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Job title (conventionally lowercase) to required skill names.
    #[serde(default)]
    pub job_skills: BTreeMap<String, Vec<String>>,

    /// Job listings in catalog order.
    #[serde(default)]
    pub job_listings: Vec<ListingConfig>,

    /// Skill name (conventionally lowercase) to courses in recommendation
    /// order.
    #[serde(default)]
    pub course_catalog: BTreeMap<String, Vec<CourseConfig>>,
}

impl CatalogConfig {
    /// Parses a catalog configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the document is
    /// not valid JSON or does not match the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the built-in sample dataset: five job skill profiles, five
    /// listings, and a seven-skill course catalog.
    #[must_use]
    pub fn sample() -> Self {
        let job_skills = [
            (
                "data scientist",
                vec![
                    "Python",
                    "SQL",
                    "Machine Learning",
                    "Statistics",
                    "Pandas",
                    "Communication",
                ],
            ),
            (
                "data analyst",
                vec!["SQL", "Excel", "Tableau", "R", "Statistics", "Communication"],
            ),
            (
                "software engineer",
                vec![
                    "Python",
                    "Java",
                    "Data Structures",
                    "Algorithms",
                    "Git",
                    "System Design",
                ],
            ),
            (
                "product manager",
                vec![
                    "Product Strategy",
                    "UX Design",
                    "Agile Methodologies",
                    "Market Research",
                    "Communication",
                ],
            ),
            (
                "ux designer",
                vec![
                    "Figma",
                    "User Research",
                    "Wireframing",
                    "Prototyping",
                    "Usability Testing",
                ],
            ),
        ]
        .into_iter()
        .map(|(job, skills)| (job.to_owned(), to_owned_all(skills)))
        .collect();

        let job_listings = vec![
            listing(
                "Data Scientist",
                "Innovate AI",
                "Remote",
                vec!["Python", "Machine Learning", "Statistics"],
            ),
            listing(
                "Senior Data Scientist",
                "Future Corp",
                "New York, NY",
                vec!["Python", "SQL", "Machine Learning", "Pandas", "System Design"],
            ),
            listing(
                "Data Analyst",
                "Data Insights LLC",
                "Austin, TX",
                vec!["SQL", "Tableau", "Excel", "Communication"],
            ),
            listing(
                "Software Engineer (Backend)",
                "CodeCrafters",
                "San Francisco, CA",
                vec!["Python", "Java", "System Design", "Git"],
            ),
            listing(
                "Product Manager",
                "NextGen Products",
                "Remote",
                vec!["Product Strategy", "Agile Methodologies", "Market Research"],
            ),
        ];

        let course_catalog = [
            (
                "python",
                course(
                    "Python for Everybody",
                    "Coursera",
                    "https://www.coursera.org/specializations/python",
                ),
            ),
            (
                "sql",
                course(
                    "The Complete SQL Bootcamp",
                    "Udemy",
                    "https://www.udemy.com/course/the-complete-sql-bootcamp/",
                ),
            ),
            (
                "machine learning",
                course(
                    "Machine Learning by Andrew Ng",
                    "Coursera",
                    "https://www.coursera.org/learn/machine-learning",
                ),
            ),
            (
                "statistics",
                course(
                    "Intro to Statistics",
                    "Udacity",
                    "https://www.udacity.com/course/intro-to-statistics--st101",
                ),
            ),
            (
                "pandas",
                course(
                    "Data Analysis with Python and Pandas",
                    "Udemy",
                    "https://www.udemy.com/course/python-for-data-science-and-machine-learning-bootcamp/",
                ),
            ),
            (
                "java",
                course(
                    "Java Programming Masterclass",
                    "Udemy",
                    "https://www.udemy.com/course/java-the-complete-java-developer-course/",
                ),
            ),
            (
                "product strategy",
                course(
                    "Become a Product Manager",
                    "Udacity",
                    "https://www.udacity.com/course/product-manager-nanodegree--nd036",
                ),
            ),
        ]
        .into_iter()
        .map(|(skill, entry)| (skill.to_owned(), vec![entry]))
        .collect();

        Self {
            job_skills,
            job_listings,
            course_catalog,
        }
    }
}

fn to_owned_all(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_owned).collect()
}

fn listing(title: &str, company: &str, location: &str, skills: Vec<&str>) -> ListingConfig {
    ListingConfig {
        title: title.to_owned(),
        company: company.to_owned(),
        location: location.to_owned(),
        skills: to_owned_all(skills),
    }
}

fn course(title: &str, platform: &str, link: &str) -> CourseConfig {
    CourseConfig {
        title: title.to_owned(),
        platform: platform.to_owned(),
        link: link.to_owned(),
    }
}
