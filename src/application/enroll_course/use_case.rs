use crate::{
    domain::course::{
        entity::{Course, EnrollmentReceipt},
        repository::EnrollmentGateway,
    },
    domain::shared::errors::ApiError,
    infrastructure::notify::traits::{Notification, Notifier},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Enrolls the signed-in student in a course and reports the outcome as a
/// notification.
///
/// List state is left alone: callers that show enrollment status reload their
/// list controller afterwards.
pub struct EnrollCourseUseCase {
    gateway: Box<dyn EnrollmentGateway>,
    notifier: Arc<dyn Notifier>,
}

impl EnrollCourseUseCase {
    pub fn new(gateway: Box<dyn EnrollmentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self { gateway, notifier }
    }

    #[instrument(skip(self, course), fields(course_id = course.id))]
    pub async fn execute(&self, course: &Course) -> Result<EnrollmentReceipt, ApiError> {
        match self.gateway.enroll(course.id).await {
            Ok(receipt) => {
                info!("enrolled");
                self.notifier.notify(Notification::success(
                    "Enrollment Successful!",
                    format!(
                        "You've been enrolled in \"{}\". Check your dashboard to start learning.",
                        course.title
                    ),
                ));
                Ok(receipt)
            }
            Err(err) => {
                warn!(error = %err, "enrollment failed");
                let description = if err.needs_reauthentication() {
                    "Please log in to enroll in this course.".to_string()
                } else {
                    err.user_message()
                };
                self.notifier
                    .notify(Notification::error("Enrollment Failed", description));
                Err(err)
            }
        }
    }
}
