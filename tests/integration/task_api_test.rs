// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_lead, create_test_app, minimal_lead};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_task_crud() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;

    let due = Utc::now() + Duration::days(2);
    let response = app
        .server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": lead["id"],
            "title": "Send pricing",
            "task_type": "email",
            "due_date": due,
            "reminder_at": due - Duration::hours(2)
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let task = response.json::<Value>();
    assert_eq!(task["status"], "pending");
    assert_eq!(task["priority"], "medium");
    let id = task["id"].as_str().unwrap();

    let completer = Uuid::new_v4();
    let completed = app
        .server
        .patch(&format!("/api/v1/tasks/{id}"))
        .json(&json!({ "status": "completed", "completed_by": completer }))
        .await
        .json::<Value>();
    assert_eq!(completed["status"], "completed");
    assert_eq!(completed["completed_by"], completer.to_string());
    assert!(completed["completed_at"].is_string());

    app.server
        .delete(&format!("/api/v1/tasks/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    app.server
        .get(&format!("/api/v1/tasks/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reminder_must_precede_due_date() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;

    let due = Utc::now() + Duration::days(1);
    let response = app
        .server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": lead["id"],
            "title": "Late reminder",
            "task_type": "call",
            "due_date": due,
            "reminder_at": due + Duration::minutes(1)
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("reminder_at"));
}

#[tokio::test]
async fn test_task_for_unknown_lead_is_404() {
    let app = create_test_app().await;

    app.server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": Uuid::new_v4(),
            "title": "Orphan",
            "task_type": "call"
        }))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tasks_are_ordered_by_due_date_with_nulls_last() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;
    let now = Utc::now();

    for (title, due) in [
        ("no due", None),
        ("later", Some(now + Duration::days(5))),
        ("sooner", Some(now + Duration::days(1))),
    ] {
        app.server
            .post("/api/v1/tasks")
            .json(&json!({
                "lead_id": lead["id"],
                "title": title,
                "task_type": "note",
                "due_date": due
            }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let list = app.server.get("/api/v1/tasks").await.json::<Value>();
    let titles: Vec<&str> = list["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["sooner", "later", "no due"]);
}

#[tokio::test]
async fn test_deleting_lead_removes_its_tasks() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;
    let id = lead["id"].as_str().unwrap();

    app.server
        .patch(&format!("/api/v1/leads/{id}"))
        .json(&json!({ "stage": "proposal" }))
        .await
        .assert_status_ok();

    let before = app.server.get("/api/v1/tasks").await.json::<Value>();
    assert_eq!(before["total"], 2);

    app.server
        .delete(&format!("/api/v1/leads/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let after = app.server.get("/api/v1/tasks").await.json::<Value>();
    assert_eq!(after["total"], 0);
}
