//! Router tests driven through `tower::ServiceExt::oneshot`
//!
//! No socket is bound; requests go straight into the assembled app.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use board_api::create_app;
use board_core::entities::Comment;
use board_core::value_objects::CommentId;
use chrono::{TimeZone, Utc};
use integration_tests::{memory_state, state_with, CommentNodeResponse, InMemoryComments, InMemoryReactions};
use tower::ServiceExt;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn seeded(id: i64, parent: Option<i64>, millis: i64) -> Comment {
    Comment {
        id: CommentId::from(id),
        name: format!("author {id}"),
        message: format!("message {id}"),
        created_at: Utc.timestamp_millis_opt(millis).unwrap(),
        parent_id: parent.map(CommentId::from),
    }
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = create_app(memory_state());
    let (status, _) = send(app, get("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_thread_wire_format() {
    let comments = Arc::new(InMemoryComments::new());
    comments.seed(seeded(1, None, 1_700_000_000_000));
    comments.seed(seeded(2, Some(1), 1_700_000_000_500));
    let app = create_app(state_with(comments, Arc::new(InMemoryReactions::new())));

    let (status, body) = send(app, get("/comments")).await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "id": "1",
            "name": "author 1",
            "message": "message 1",
            "timestamp": 1_700_000_000_000_i64,
            "replies": [{
                "id": "2",
                "name": "author 2",
                "message": "message 2",
                "timestamp": 1_700_000_000_500_i64,
                "replies": [],
                "reactions": {}
            }],
            "reactions": {}
        }])
    );
}

#[tokio::test]
async fn test_listing_is_capped_at_fetch_limit() {
    let comments = Arc::new(InMemoryComments::new());
    for id in 1..=120 {
        comments.seed(seeded(id, None, 1_700_000_000_000 + id));
    }
    let app = create_app(state_with(comments, Arc::new(InMemoryReactions::new())));

    let (status, body) = send(app, get("/comments")).await;
    assert_eq!(status, StatusCode::OK);

    let thread: Vec<CommentNodeResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(thread.len(), 100);
    assert_eq!(thread[0].id, "120");
    assert_eq!(thread[99].id, "21");
}

#[tokio::test]
async fn test_reply_to_comment_outside_window_becomes_root() {
    let comments = Arc::new(InMemoryComments::new());
    for id in 1..=101 {
        comments.seed(seeded(id, None, 1_700_000_000_000 + id));
    }
    comments.seed(seeded(102, Some(1), 1_700_000_000_200));
    let app = create_app(state_with(comments, Arc::new(InMemoryReactions::new())));

    let (_, body) = send(app, get("/comments")).await;
    let thread: Vec<CommentNodeResponse> = serde_json::from_slice(&body).unwrap();
    assert_eq!(thread[0].id, "102");
    assert!(thread[0].replies.is_empty());
}

#[tokio::test]
async fn test_blank_parent_id_creates_root() {
    let app = create_app(memory_state());

    let (status, body) = send(
        app,
        post_json("/comments", r#"{"name":"Ada","message":"hi","parentId":""}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("parentCommentId").is_none());
}

#[tokio::test]
async fn test_null_fields_are_blank() {
    let app = create_app(memory_state());

    let (status, body) = send(
        app,
        post_json("/comments", r#"{"name":null,"message":"hi"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, br#"{"error":"Name and message are required"}"#);
}

#[tokio::test]
async fn test_extra_fields_are_ignored() {
    let app = create_app(memory_state());

    let (status, _) = send(
        app,
        post_json(
            "/comments",
            r#"{"name":"Ada","message":"hi","avatar":"cat.png"}"#,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_head_is_not_allowed() {
    for uri in ["/comments", "/reactions"] {
        let app = create_app(memory_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("HEAD")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "HEAD {uri}");
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }
}

#[tokio::test]
async fn test_null_body_is_invalid_json() {
    let app = create_app(memory_state());

    let (status, body) = send(app, post_json("/comments", "null")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, br#"{"error":"Invalid JSON body"}"#);
}
