use super::helpers::{TOKEN, TestApi, course_json, envelope};
use coursehub_client::{
    application::list_controller::{FetchOutcome, ListController},
    domain::{
        course::entity::{CourseCatalog, CourseLevel},
        listing::{
            load_state::ListErrorKind,
            resource::{CollectionSource, ResourceQuery},
        },
        shared::{errors::ApiError, pagination::Filter},
    },
    infrastructure::http::collection_source::HttpCollectionSource,
    presentation::list_view::ListViewModel,
};
use serde_json::json;
use std::{sync::Arc, time::Duration};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{header, method, path, query_param, query_param_is_missing},
};

fn catalog(api: &TestApi) -> ListController<CourseCatalog> {
    ListController::<CourseCatalog>::new(Arc::new(HttpCollectionSource::<CourseCatalog>::new(
        api.client.clone(),
        6,
    )))
}

fn page_of_courses(ids: std::ops::Range<u64>, level: &str) -> Vec<serde_json::Value> {
    ids.map(|id| course_json(id, level)).collect()
}

#[tokio::test]
async fn first_load_requests_page_one_without_filter() {
    let api = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("level"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(16, 1, 6, page_of_courses(1..7, "Beginner"))),
        )
        .expect(1)
        .mount(&api.server)
        .await;

    let list = catalog(&api);
    assert_eq!(list.reload().await, FetchOutcome::Applied);

    let view = ListViewModel::from_state(&list.state());
    assert_eq!(view.items.len(), 6);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.total_count, 16);
    assert!(view.can_go_next);
    assert!(!view.can_go_previous);
    assert_eq!(view.active_filter, "All");
}

#[tokio::test]
async fn level_filter_and_search_are_sent_as_query_parameters() {
    let api = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("page", "1"))
        .and(query_param("level", "Advanced"))
        .and(query_param("search", "threat hunting"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(2, 1, 6, page_of_courses(40..42, "Advanced"))),
        )
        .expect(1)
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param_is_missing("search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(2, 1, 6, page_of_courses(40..42, "Advanced"))),
        )
        .mount(&api.server)
        .await;

    let list = catalog(&api);
    list.set_filter(Filter::Only(CourseLevel::Advanced)).await;
    list.set_search(Some("threat hunting".to_string())).await;

    let state = list.state();
    assert_eq!(state.load.items().len(), 2);
    assert!(state.load.items().iter().all(|c| c.level == CourseLevel::Advanced));
}

#[tokio::test]
async fn slow_response_for_an_older_page_is_discarded() {
    let api = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(16, 1, 6, page_of_courses(1..7, "Beginner"))),
        )
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(16, 2, 6, page_of_courses(7..13, "Beginner")))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("page", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(16, 3, 6, page_of_courses(13..17, "Beginner"))),
        )
        .mount(&api.server)
        .await;

    let list = catalog(&api);
    list.reload().await;
    let (stale, fresh) = tokio::join!(list.go_to_page(2), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        list.go_to_page(3).await
    });

    assert_eq!(stale, Some(FetchOutcome::Superseded));
    assert_eq!(fresh, Some(FetchOutcome::Applied));
    let ids: Vec<u64> = list.state().load.items().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![13, 14, 15, 16]);
    assert_eq!(list.query().page(), 3);
}

#[tokio::test]
async fn expired_session_is_distinct_from_server_error() {
    let api = TestApi::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("level", "Beginner"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Given token not valid for any token type"
        })))
        .mount(&api.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(query_param("level", "Intermediate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&api.server)
        .await;

    let list = catalog(&api);

    list.set_filter(Filter::Only(CourseLevel::Beginner)).await;
    let expired = list.state().load.error().cloned().unwrap();
    assert_eq!(expired.kind, ListErrorKind::SessionExpired);
    assert!(expired.needs_reauthentication());

    list.set_filter(Filter::Only(CourseLevel::Intermediate)).await;
    let failed = list.state().load.error().cloned().unwrap();
    assert_eq!(failed.kind, ListErrorKind::RequestFailed);
    assert_eq!(failed.message, "Internal Server Error");
    assert!(!failed.needs_reauthentication());
}

#[tokio::test]
async fn malformed_body_fails_closed() {
    let api = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [course_json(1, "Beginner")]
        })))
        .mount(&api.server)
        .await;

    let list = catalog(&api);
    list.reload().await;

    let state = list.state();
    assert!(state.load.items().is_empty());
    let err = state.load.error().unwrap();
    assert_eq!(err.kind, ListErrorKind::RequestFailed);
    assert!(err.message.starts_with("Malformed response"));
}

#[tokio::test]
async fn oversized_page_is_rejected() {
    let api = TestApi::anonymous().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(16, 1, 6, page_of_courses(1..8, "Beginner"))),
        )
        .mount(&api.server)
        .await;

    let source = HttpCollectionSource::<CourseCatalog>::new(api.client.clone(), 6);
    let result = source
        .fetch_page(&ResourceQuery::<CourseCatalog>::default())
        .await;

    assert!(matches!(
        result,
        Err(ApiError::RequestFailed { ref message, .. }) if message.contains("exceed page size")
    ));
}

#[tokio::test]
async fn catalog_sends_the_stored_credential_when_present() {
    let api = TestApi::signed_in().await;
    Mock::given(method("GET"))
        .and(path("/api/courses/"))
        .and(header("Authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(0, 1, 6, vec![])))
        .expect(1)
        .mount(&api.server)
        .await;

    let list = catalog(&api);
    list.reload().await;

    let view = ListViewModel::from_state(&list.state());
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(list.go_to_page(1).await, None);
}

#[tokio::test]
async fn walking_sixteen_courses_reports_next_and_previous_links() {
    let api = TestApi::anonymous().await;
    for (page, ids) in [(1u32, 1..7u64), (2, 7..13), (3, 13..17)] {
        Mock::given(method("GET"))
            .and(path("/api/courses/"))
            .and(query_param("page", page.to_string().as_str()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(16, page, 6, page_of_courses(ids, "Beginner"))),
            )
            .expect(1)
            .mount(&api.server)
            .await;
    }

    let list = catalog(&api);
    list.reload().await;
    let mut seen = Vec::new();
    let mut links = Vec::new();
    loop {
        let state = list.state();
        let page = state.load.page().cloned().unwrap();
        links.push((page.has_previous, page.has_next, page.items.len()));
        seen.extend(page.items.iter().map(|c| c.id));
        if list.go_next().await.is_none() {
            break;
        }
    }

    assert_eq!(
        links,
        vec![(false, true, 6), (true, true, 6), (true, false, 4)]
    );
    assert_eq!(seen, (1..17).collect::<Vec<u64>>());
    let view = ListViewModel::from_state(&list.state());
    assert_eq!(view.page, 3);
    assert!(!view.can_go_next);
}
