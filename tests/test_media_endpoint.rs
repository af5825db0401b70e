//! End-to-end tests of `GET /api/media` against an in-memory repository.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use notion_media_widget::{
    api::DatabaseQuery, router, ApiKey, AppError, AppState, DatabaseId, FileAttachment,
    MediaFetcher, NotionDefaults, NotionErrorCode, NotionRepository, PageProperties, PageRecord,
    PropertyNames, PropertyValue, RichTextItem,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

const DB: &str = "550e8400e29b41d4a716446655440000";
const ENV_DB: &str = "0123456789abcdef0123456789abcdef";

#[derive(Default)]
struct FakeRepository {
    pages: Vec<PageRecord>,
    fail: bool,
    calls: Mutex<Vec<(String, String, Vec<String>)>>,
}

#[async_trait]
impl NotionRepository for FakeRepository {
    async fn query_database(
        &self,
        database: &DatabaseId,
        credential: &ApiKey,
        query: &DatabaseQuery,
    ) -> Result<Vec<PageRecord>, AppError> {
        self.calls.lock().unwrap().push((
            database.as_str().to_string(),
            credential.as_str().to_string(),
            query.sorts.iter().map(|s| s.property.clone()).collect(),
        ));
        if self.fail {
            return Err(AppError::NotionService {
                code: NotionErrorCode::Unauthorized,
                message: "API token is invalid.".to_string(),
                status: reqwest::StatusCode::UNAUTHORIZED,
            });
        }
        Ok(self.pages.clone())
    }
}

fn page(id: &str, title: &str, files: Vec<FileAttachment>) -> PageRecord {
    PageRecord {
        id: id.to_string(),
        created_time: "2024-01-05T10:00:00Z".parse().unwrap(),
        properties: [
            (
                "Subject".to_string(),
                PropertyValue::Title {
                    title: vec![RichTextItem::plain_text(title)],
                },
            ),
            ("Visuals".to_string(), PropertyValue::Files { files }),
        ]
        .into_iter()
        .collect::<PageProperties>(),
    }
}

fn app(repository: Arc<FakeRepository>, defaults: NotionDefaults) -> Router {
    let fetcher = MediaFetcher::new(repository, defaults, PropertyNames::default());
    router(AppState::new(fetcher))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, cache_control, body)
}

#[tokio::test]
async fn test_missing_parameters_is_bad_request() {
    let repository = Arc::new(FakeRepository::default());
    let (status, _, body) = get(app(repository.clone(), NotionDefaults::default()), "/api/media").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Missing database ID or token" }));
    assert!(repository.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_token_alone_is_bad_request() {
    let repository = Arc::new(FakeRepository::default());
    let (status, _, _) = get(
        app(repository, NotionDefaults::default()),
        "/api/media?token=secret_abc",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreadable_query_string_is_json_bad_request() {
    let repository = Arc::new(FakeRepository::default());
    let uri = format!("/api/media?db={}&db={}&token=secret_abc", DB, DB);
    let response = app(repository.clone(), NotionDefaults::default())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Missing database ID or token" }));
    assert!(repository.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_database_id_is_bad_request() {
    let repository = Arc::new(FakeRepository::default());
    let (status, _, body) = get(
        app(repository, NotionDefaults::default()),
        "/api/media?db=not-an-id&token=secret_abc",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid Notion ID"));
}

#[tokio::test]
async fn test_success_returns_posts_in_order() {
    let repository = Arc::new(FakeRepository {
        pages: vec![
            page(
                "page-1",
                "Launch",
                vec![FileAttachment::hosted("clip.MP4", "https://cdn.example.com/clip.mp4")],
            ),
            page(
                "page-2",
                "Gallery",
                vec![
                    FileAttachment::hosted("a.png", "https://cdn.example.com/a.png"),
                    FileAttachment::external("b.jpg", "https://images.example.com/b.jpg"),
                ],
            ),
        ],
        ..Default::default()
    });

    let uri = format!("/api/media?db={}&token=secret_abc", DB);
    let (status, cache_control, body) =
        get(app(repository.clone(), NotionDefaults::default()), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));

    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], "page-1");
    assert_eq!(posts[0]["type"], "video");
    assert_eq!(posts[0]["videoUrl"], "https://cdn.example.com/clip.mp4");
    assert_eq!(posts[0]["date"], "Jan 5");
    assert!(posts[0].get("images").is_none());
    assert_eq!(posts[1]["type"], "carousel");
    assert_eq!(
        posts[1]["images"],
        serde_json::json!([
            "https://cdn.example.com/a.png",
            "https://images.example.com/b.jpg"
        ])
    );

    let calls = repository.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(
            DB.to_string(),
            "secret_abc".to_string(),
            vec!["Publish date".to_string()]
        )]
    );
}

#[tokio::test]
async fn test_empty_database_is_empty_list() {
    let repository = Arc::new(FakeRepository::default());
    let uri = format!("/api/media?db={}&token=secret_abc", DB);
    let (status, _, body) = get(app(repository, NotionDefaults::default()), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let repository = Arc::new(FakeRepository {
        fail: true,
        ..Default::default()
    });
    let uri = format!("/api/media?db={}&token=secret_abc", DB);
    let (status, cache_control, body) = get(app(repository, NotionDefaults::default()), &uri).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(cache_control, None);
    assert_eq!(
        body,
        serde_json::json!({
            "error": "Failed to fetch media posts",
            "code": "upstream_failure"
        })
    );
}

#[tokio::test]
async fn test_environment_defaults_and_override() {
    let defaults = NotionDefaults {
        database: Some(DatabaseId::parse(ENV_DB).unwrap()),
        credential: Some(ApiKey::new("secret_env").unwrap()),
    };

    let repository = Arc::new(FakeRepository::default());
    let (status, _, _) = get(app(repository.clone(), defaults.clone()), "/api/media").await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/media?db={}", DB);
    let (status, _, _) = get(app(repository.clone(), defaults), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let calls = repository.calls.lock().unwrap();
    assert_eq!(calls[0].0, ENV_DB);
    assert_eq!(calls[0].1, "secret_env");
    assert_eq!(calls[1].0, DB);
    assert_eq!(calls[1].1, "secret_env");
}

#[tokio::test]
async fn test_health() {
    let response = app(Arc::new(FakeRepository::default()), NotionDefaults::default())
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}
