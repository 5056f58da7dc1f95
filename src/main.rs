use coursehub_client::{
    application::{dashboard::use_case::DashboardUseCase, list_controller::ListController},
    config::Config,
    domain::{
        course::entity::CourseCatalog,
        enrollment::entity::{EnrolledCourses, ProgressSummary},
        shared::pagination::ListQuery,
        user::{credentials::SessionStore, entity::TokenPair},
    },
    infrastructure::{
        auth::session_store::InMemorySessionStore,
        http::{
            api_client::ApiClient, collection_source::HttpCollectionSource,
            rest_dashboard_repository::RestDashboardRepository,
        },
    },
    presentation::list_view::{ListViewModel, status_line},
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info,coursehub_client=debug"))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let session = Arc::new(InMemorySessionStore::new());
    if let Some(token) = config.api_token.clone() {
        session.store(TokenPair {
            access: token,
            refresh: None,
        });
    }

    let client = Arc::new(ApiClient::new(&config.api_settings(), session.clone())?);

    let catalog = ListController::<CourseCatalog>::with_query(
        Arc::new(HttpCollectionSource::<CourseCatalog>::new(client.clone(), config.page_size)),
        ListQuery::new(1, config.catalog_level.clone(), config.catalog_search.clone()),
    );
    catalog.reload().await;

    let state = catalog.state();
    let view = ListViewModel::from_state(&state);
    if let Some(error) = &view.error {
        tracing::error!(%error, "course catalog unavailable");
    }
    for course in &view.items {
        println!(
            "#{:<4} {:<12} {:>4.1}★ {:>6}  {}",
            course.id, course.level, course.rating, course.price, course.title
        );
    }
    println!("{}", status_line(&state.load, view.page, "courses"));

    if !session.is_authenticated() {
        tracing::info!("no API_TOKEN set, skipping dashboard");
        return Ok(());
    }

    let enrolled = ListController::<EnrolledCourses>::new(Arc::new(
        HttpCollectionSource::<EnrolledCourses>::new(client.clone(), config.page_size),
    ));
    enrolled.reload().await;
    let enrolled_state = enrolled.state();
    match enrolled_state.load.error() {
        Some(err) if err.needs_reauthentication() => {
            tracing::warn!(message = %err.message, "stored token rejected");
            session.clear();
            return Ok(());
        }
        Some(err) => tracing::error!(message = %err.message, "enrolled courses unavailable"),
        None => {
            let total = enrolled_state.load.page().map_or(0, |page| page.total_count);
            let summary = ProgressSummary::from_courses(enrolled_state.load.items());
            println!(
                "Enrolled: {}  (this page: {} shown, {} completed, {}% average progress)",
                total, summary.enrolled, summary.completed, summary.average_progress
            );
        }
    }

    let dashboard = DashboardUseCase::new(Box::new(RestDashboardRepository::new(client)));
    match dashboard.overview().await {
        Ok(overview) => println!(
            "Hours learned: {}  Certificates: {}  Pending quizzes: {}",
            overview.hours_learned, overview.certificates_earned, overview.pending_quizzes
        ),
        Err(err) => tracing::warn!(error = %err, "dashboard overview unavailable"),
    }

    Ok(())
}
