// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use leadrs::presentation::routes;
use serde_json::Value;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 验证健康检查端点不依赖数据库即可响应
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn banner_and_version() {
    let app = create_test_app().await;

    let banner = app.server.get("/").await.json::<Value>();
    assert_eq!(banner["name"], "leadrs");
    assert_eq!(banner["status"], "running");

    let health = app.server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "healthy");

    let version = app.server.get("/api/v1/version").await.json::<Value>();
    assert_eq!(version["version"], env!("CARGO_PKG_VERSION"));
}
