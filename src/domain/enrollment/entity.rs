use crate::domain::listing::resource::Resource;
use crate::domain::shared::pagination::FilterValue;
use serde::{Deserialize, Serialize};

/// A course the signed-in student is enrolled in, with their progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledCourse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub total_lessons: u32,
    pub completed_lessons: u32,
    pub next_lesson: String,
    pub status: EnrollmentStatus,
    pub time_spent: String,
    pub estimated_time: String,
}

impl EnrolledCourse {
    pub fn is_completed(&self) -> bool {
        self.status == EnrollmentStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl FilterValue for EnrollmentStatus {
    const PARAM: &'static str = "status";

    fn as_param(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Courses the signed-in student is enrolled in.
pub struct EnrolledCourses;

impl Resource for EnrolledCourses {
    type Item = EnrolledCourse;
    type Filter = EnrollmentStatus;

    const PATH: &'static str = "users/me/enrolled-courses/";
    const REQUIRES_AUTH: bool = true;
}

/// Aggregate figures shown above the enrolled course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressSummary {
    pub enrolled: usize,
    pub completed: usize,
    /// Mean progress, rounded to the nearest percent.
    pub average_progress: u8,
}

impl ProgressSummary {
    pub fn from_courses(courses: &[EnrolledCourse]) -> Self {
        if courses.is_empty() {
            return Self::default();
        }
        let total: u32 = courses.iter().map(|c| u32::from(c.progress.min(100))).sum();
        let count = courses.len() as u32;
        // Integer round-half-up of total / count.
        let average = (2 * total + count) / (2 * count);
        Self {
            enrolled: courses.len(),
            completed: courses.iter().filter(|c| c.is_completed()).count(),
            average_progress: average.min(100) as u8,
        }
    }
}
