use crate::domain::course::entity::CourseLevel;
use crate::domain::listing::resource::Resource;
use crate::domain::shared::pagination::FilterValue;
use serde::{Deserialize, Serialize};

/// A quiz attached to one of the student's courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: u64,
    /// Title of the course the quiz belongs to.
    pub course: String,
    pub title: String,
    pub questions: u32,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub difficulty: Option<CourseLevel>,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: QuizStatus,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub max_attempts: u32,
    /// Percentage score of the best attempt, once completed.
    #[serde(default)]
    pub score: Option<u8>,
}

impl Quiz {
    pub fn can_attempt(&self) -> bool {
        self.status == QuizStatus::Available && self.attempts < self.max_attempts
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizStatus {
    Available,
    Locked,
    Passed,
    Failed,
}

impl FilterValue for QuizStatus {
    const PARAM: &'static str = "status";

    fn as_param(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Locked => "Locked",
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

pub struct MyQuizzes;

impl Resource for MyQuizzes {
    type Item = Quiz;
    type Filter = QuizStatus;

    const PATH: &'static str = "users/me/quizzes/";
    const REQUIRES_AUTH: bool = true;
}
