use super::helpers::{TOKEN, TestApi, course_json, enrolled_json, envelope};
use coursehub_client::{
    application::{
        dashboard::use_case::DashboardUseCase, enroll_course::use_case::EnrollCourseUseCase,
        list_controller::ListController,
    },
    domain::{
        certificate::entity::{CertificateStatus, MyCertificates},
        course::entity::Course,
        enrollment::entity::{EnrolledCourses, EnrollmentStatus, ProgressSummary},
        listing::{load_state::ListErrorKind, resource::Resource},
        quiz::entity::MyQuizzes,
        shared::{errors::ApiError, pagination::Filter},
    },
    infrastructure::{
        http::{
            collection_source::HttpCollectionSource,
            rest_dashboard_repository::RestDashboardRepository,
            rest_enrollment_gateway::RestEnrollmentGateway,
        },
        notify::traits::{Notification, NotificationLevel, Notifier},
    },
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

fn source<R: Resource>(api: &TestApi) -> Arc<HttpCollectionSource<R>> {
    Arc::new(HttpCollectionSource::new(api.client.clone(), 6))
}

#[tokio::test]
async fn enrolled_courses_without_a_token_never_reach_the_backend() {
    let api = TestApi::anonymous().await;
    let list = ListController::<EnrolledCourses>::new(source::<EnrolledCourses>(&api));

    list.reload().await;

    let err = list.state().load.error().cloned().unwrap();
    assert_eq!(err.kind, ListErrorKind::Unauthenticated);
    assert_eq!(err.message, "Not authenticated. Please log in.");
    assert_eq!(api.request_count().await, 0);
}

#[tokio::test]
async fn enrolled_courses_filter_by_status_with_bearer_token() {
    let api = TestApi::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/enrolled-courses/"))
        .and(query_param("page", "1"))
        .and(query_param("status", "In Progress"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            1,
            6,
            vec![
                enrolled_json(1, 75, "In Progress"),
                enrolled_json(3, 30, "In Progress"),
            ],
        )))
        .expect(1)
        .mount(&api.server)
        .await;

    let list = ListController::<EnrolledCourses>::new(source::<EnrolledCourses>(&api));
    list.set_filter(Filter::Only(EnrollmentStatus::InProgress)).await;

    let state = list.state();
    let summary = ProgressSummary::from_courses(state.load.items());
    assert_eq!(summary.enrolled, 2);
    assert_eq!(summary.completed, 0);
    assert_eq!(summary.average_progress, 53);
}

#[tokio::test]
async fn quizzes_and_certificates_decode_their_pages() {
    let api = TestApi::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/quizzes/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            1,
            6,
            vec![json!({
                "id": 4,
                "course": "Network Security Fundamentals",
                "title": "Firewall Configuration",
                "questions": 15,
                "duration": "20 min",
                "difficulty": "Intermediate",
                "due_date": "2024-12-30",
                "status": "Available",
                "attempts": 0,
                "max_attempts": 3
            })],
        )))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/me/certificates/"))
        .and(query_param("status", "Issued"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            1,
            1,
            6,
            vec![json!({
                "certificate_id": "CERT-EH-2024-001",
                "title": "Ethical Hacking & Penetration Testing",
                "issue_date": "2024-11-15",
                "status": "Issued",
                "credits_earned": 40
            })],
        )))
        .mount(&api.server)
        .await;

    let quizzes = ListController::<MyQuizzes>::new(source::<MyQuizzes>(&api));
    quizzes.reload().await;
    let quiz_state = quizzes.state();
    assert_eq!(quiz_state.load.items().len(), 1);
    assert!(quiz_state.load.items()[0].can_attempt());

    let certificates = ListController::<MyCertificates>::new(source::<MyCertificates>(&api));
    certificates
        .set_filter(Filter::Only(CertificateStatus::Issued))
        .await;
    let cert_state = certificates.state();
    assert_eq!(cert_state.load.items()[0].credits_earned, 40);
}

#[tokio::test]
async fn dashboard_overview_tolerates_missing_fields() {
    let api = TestApi::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/overview/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enrolled_courses": 3,
            "hours_learned": 42
        })))
        .mount(&api.server)
        .await;

    let dashboard = DashboardUseCase::new(Box::new(RestDashboardRepository::new(api.client.clone())));
    let overview = dashboard.overview().await.unwrap();

    assert_eq!(overview.enrolled_courses, 3);
    assert_eq!(overview.hours_learned, 42);
    assert_eq!(overview.pending_quizzes, 0);
}

#[tokio::test]
async fn enrollment_posts_with_credential_and_notifies() {
    let api = TestApi::signed_in().await;
    Mock::given(method("POST"))
        .and(path("/api/courses/7/enroll/"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Enrolled"
        })))
        .expect(1)
        .mount(&api.server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let enroll = EnrollCourseUseCase::new(
        Box::new(RestEnrollmentGateway::new(api.client.clone())),
        notifier.clone(),
    );
    let course: Course = serde_json::from_value(course_json(7, "Beginner")).unwrap();

    let receipt = enroll.execute(&course).await.unwrap();

    assert_eq!(receipt.message.as_deref(), Some("Enrolled"));
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].level, NotificationLevel::Success);
    assert!(sent[0].description.contains("\"Course 7\""));
}

#[tokio::test]
async fn enrollment_conflict_surfaces_backend_detail() {
    let api = TestApi::signed_in().await;
    Mock::given(method("POST"))
        .and(path("/api/courses/7/enroll/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detail": "Already enrolled in this course."
        })))
        .mount(&api.server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let enroll = EnrollCourseUseCase::new(
        Box::new(RestEnrollmentGateway::new(api.client.clone())),
        notifier.clone(),
    );
    let course: Course = serde_json::from_value(course_json(7, "Beginner")).unwrap();

    let err = enroll.execute(&course).await.unwrap_err();

    assert!(matches!(err, ApiError::RequestFailed { status: Some(400), .. }));
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].title, "Enrollment Failed");
    assert_eq!(
        sent[0].description,
        "Bad Request: Already enrolled in this course."
    );
}

#[tokio::test]
async fn enrollment_without_login_asks_to_sign_in() {
    let api = TestApi::anonymous().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let enroll = EnrollCourseUseCase::new(
        Box::new(RestEnrollmentGateway::new(api.client.clone())),
        notifier.clone(),
    );
    let course: Course = serde_json::from_value(course_json(7, "Beginner")).unwrap();

    assert_eq!(enroll.execute(&course).await.unwrap_err(), ApiError::Unauthenticated);
    assert_eq!(api.request_count().await, 0);
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].description, "Please log in to enroll in this course.");
}
