// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_tag_lifecycle() {
    let app = create_test_app().await;

    let created = app
        .server
        .post("/api/v1/tags")
        .json(&json!({ "name": "vip" }))
        .await;
    created.assert_status(StatusCode::CREATED);
    let tag = created.json::<Value>();
    assert_eq!(tag["color"], "#6B7280");

    app.server
        .post("/api/v1/tags")
        .json(&json!({ "name": "vip", "color": "#FF0000" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    app.server
        .post("/api/v1/tags")
        .json(&json!({ "name": "apac", "color": "#00AA00" }))
        .await
        .assert_status(StatusCode::CREATED);

    let tags = app.server.get("/api/v1/tags").await.json::<Value>();
    let names: Vec<&str> = tags
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["apac", "vip"]);

    let id = tag["id"].as_str().unwrap();
    app.server
        .delete(&format!("/api/v1/tags/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .delete(&format!("/api/v1/tags/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tag_color_must_be_hex() {
    let app = create_test_app().await;

    app.server
        .post("/api/v1/tags")
        .json(&json!({ "name": "red", "color": "red" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
