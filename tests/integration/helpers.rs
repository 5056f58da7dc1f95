use coursehub_client::{
    domain::user::entity::TokenPair,
    infrastructure::{
        auth::session_store::InMemorySessionStore,
        http::api_client::{ApiClient, ApiSettings},
    },
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use wiremock::MockServer;

pub const TOKEN: &str = "test-access-token";

pub struct TestApi {
    pub server: MockServer,
    pub client: Arc<ApiClient>,
    pub session: Arc<InMemorySessionStore>,
}

impl TestApi {
    pub async fn anonymous() -> Self {
        Self::start(InMemorySessionStore::new()).await
    }

    pub async fn signed_in() -> Self {
        Self::start(InMemorySessionStore::with_tokens(TokenPair {
            access: TOKEN.to_string(),
            refresh: None,
        }))
        .await
    }

    async fn start(session: InMemorySessionStore) -> Self {
        let server = MockServer::start().await;
        let session = Arc::new(session);
        let client = ApiClient::new(
            &ApiSettings {
                base_url: format!("{}/api", server.uri()),
                timeout: Duration::from_secs(5),
                user_agent: "coursehub-client/test".to_string(),
            },
            session.clone(),
        )
        .expect("client should build");
        Self {
            server,
            client: Arc::new(client),
            session,
        }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn course_json(id: u64, level: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Course {}", id),
        "description": "Hands-on security training.",
        "duration": "8 weeks",
        "level": level,
        "enrolled": 120,
        "rating": 4.7,
        "image": format!("/media/course-{}.jpg", id),
        "price": "$199"
    })
}

pub fn enrolled_json(id: u64, progress: u8, status: &str) -> Value {
    json!({
        "id": id,
        "title": format!("Course {}", id),
        "description": "Hands-on security training.",
        "image": format!("/media/course-{}.jpg", id),
        "progress": progress,
        "total_lessons": 20,
        "completed_lessons": u32::from(progress) / 5,
        "next_lesson": "Packet capture basics",
        "status": status,
        "time_spent": "4h 30m",
        "estimated_time": "6h remaining"
    })
}

/// `{ count, next, previous, results }` body for one page of a collection.
pub fn envelope(count: u64, page: u32, page_size: u32, results: Vec<Value>) -> Value {
    let pages = count.div_ceil(u64::from(page_size));
    let link = |p: u32| format!("http://backend.test/api/courses/?page={}", p);
    json!({
        "count": count,
        "next": (u64::from(page) < pages).then(|| link(page + 1)),
        "previous": (page > 1).then(|| link(page - 1)),
        "results": results
    })
}
