// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_widget_submission_flow() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/v1/widgets")
        .json(&json!({ "name": "Pricing page", "primary_color": "#112233" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created = response.json::<Value>();
    let widget_id = created["widget_id"].as_str().unwrap().to_string();
    assert!(created["api_key"].as_str().unwrap().starts_with("sk_"));
    assert!(created["embed_code"]
        .as_str()
        .unwrap()
        .contains("https://leads.example.com/static/widget.js"));

    let config = app
        .server
        .get(&format!("/api/v1/widgets/{widget_id}/config"))
        .await
        .json::<Value>();
    assert_eq!(config["primary_color"], "#112233");
    assert_eq!(config["title"], "Get in Touch");
    assert!(config.get("api_key").is_none());

    let submitted = app
        .server
        .post(&format!("/api/v1/widgets/{widget_id}/submit"))
        .json(&json!({
            "name": "Margaret Hamilton",
            "email": "margaret@apollo.example",
            "company": "MIT",
            "message": "Interested in a demo",
            "referrer": "https://search.example.com"
        }))
        .await;
    submitted.assert_status_ok();
    let submitted = submitted.json::<Value>();
    assert_eq!(submitted["success"], true);
    assert_eq!(submitted["message"], "Thank you! We'll be in touch soon.");

    let lead_id = submitted["lead_id"].as_str().unwrap();
    let lead = app
        .server
        .get(&format!("/api/v1/leads/{lead_id}"))
        .await
        .json::<Value>();
    assert_eq!(lead["source"], "web_form");
    assert_eq!(lead["utm_source"], "widget");
    assert_eq!(lead["utm_medium"], widget_id);
    assert_eq!(lead["referrer_url"], "https://search.example.com");
    assert_eq!(lead["notes"], "Interested in a demo");
}

#[tokio::test]
async fn test_widget_admin_endpoints() {
    let app = create_test_app().await;

    let created = app
        .server
        .post("/api/v1/widgets")
        .json(&json!({ "name": "Footer" }))
        .await
        .json::<Value>();
    let id = created["id"].as_str().unwrap();
    let widget_id = created["widget_id"].as_str().unwrap();

    let listed = app.server.get("/api/v1/widgets").await.json::<Value>();
    assert_eq!(listed["widgets"].as_array().unwrap().len(), 1);
    assert!(listed["widgets"][0].get("api_key").is_none());

    let updated = app
        .server
        .patch(&format!("/api/v1/widgets/{id}"))
        .json(&json!({ "name": "Footer v2", "is_active": false }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["name"], "Footer v2");

    app.server
        .get(&format!("/api/v1/widgets/{widget_id}/config"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .delete(&format!("/api/v1/widgets/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_widget_validation() {
    let app = create_test_app().await;

    app.server
        .post("/api/v1/widgets")
        .json(&json!({ "name": "Bad color", "primary_color": "blue" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .post("/api/v1/widgets")
        .json(&json!({ "name": "Bad delay", "auto_open_delay": -1 }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .post("/api/v1/widgets/wgt_unknown/submit")
        .json(&json!({ "name": "Nobody" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
