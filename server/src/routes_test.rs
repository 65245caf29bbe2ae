use super::*;

use axum::body::Body;
use axum::http::{Method, Request};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn healthz_rejects_post() {
    let resp = base_routes()
        .oneshot(Request::builder().method(Method::POST).uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = base_routes()
        .oneshot(Request::builder().uri("/auth/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
