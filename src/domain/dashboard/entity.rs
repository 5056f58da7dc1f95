use serde::{Deserialize, Serialize};

/// Headline numbers on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOverview {
    pub enrolled_courses: u32,
    pub completed_courses: u32,
    pub average_progress: u8,
    pub hours_learned: u32,
    pub certificates_earned: u32,
    pub pending_quizzes: u32,
}
