use crate::domain::listing::resource::Resource;
use crate::domain::shared::pagination::{Filter, FilterValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A course as listed in the public catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Human readable length, e.g. "8 weeks".
    pub duration: String,
    pub level: CourseLevel,
    /// Number of enrolled students.
    pub enrolled: u32,
    pub rating: f32,
    pub image: String,
    /// Display price including currency, e.g. "$199".
    pub price: String,
}

/// Difficulty level used to filter the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Parses a filter option where "All" means no filter.
    pub fn parse_filter(value: &str) -> Result<Filter<Self>, UnknownLevel> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Filter::All);
        }
        value.parse().map(Filter::Only)
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown course level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for CourseLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl FilterValue for CourseLevel {
    const PARAM: &'static str = "level";

    fn as_param(&self) -> &'static str {
        self.as_str()
    }
}

/// The public course catalog.
pub struct CourseCatalog;

impl Resource for CourseCatalog {
    type Item = Course;
    type Filter = CourseLevel;

    const PATH: &'static str = "courses/";
    const REQUIRES_AUTH: bool = false;
}

/// Server acknowledgement of an enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
