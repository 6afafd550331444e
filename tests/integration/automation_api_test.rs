// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_lead, create_test_app, minimal_lead};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use leadrs::domain::models::lead::{Lead, LeadSource, LeadStage};
use leadrs::domain::repositories::lead_repository::LeadRepository;
use leadrs::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use serde_json::{json, Value};

#[tokio::test]
async fn test_stale_sweep_is_idempotent() {
    let app = create_test_app().await;
    let repo = LeadRepositoryImpl::new(app.db.clone());

    let mut dormant = Lead::new("Dormant", LeadSource::Event);
    dormant.updated_at = Utc::now() - Duration::days(10);
    repo.create(&dormant).await.unwrap();

    let mut closed = Lead::new("Closed", LeadSource::Event);
    closed.stage = LeadStage::Won;
    closed.updated_at = Utc::now() - Duration::days(30);
    repo.create(&closed).await.unwrap();

    create_lead(&app.server, minimal_lead("Fresh")).await;

    let first = app
        .server
        .post("/api/v1/automation/stale-leads")
        .add_query_param("days_inactive", 7)
        .await;
    first.assert_status_ok();
    let first = first.json::<Value>();
    assert_eq!(first["created"], 1);
    assert_eq!(first["tasks"][0]["title"], "Re-engage with Dormant");
    assert_eq!(first["tasks"][0]["lead_id"], dormant.id.to_string());

    let second = app
        .server
        .post("/api/v1/automation/stale-leads")
        .add_query_param("days_inactive", 7)
        .await
        .json::<Value>();
    assert_eq!(second["created"], 0);
}

#[tokio::test]
async fn test_overdue_and_reminder_scans() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;
    let now = Utc::now();

    // 已逾期
    app.server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": lead["id"],
            "title": "Missed call",
            "task_type": "call",
            "due_date": now - Duration::hours(1),
            "reminder_at": now - Duration::hours(3)
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // 提醒已到但未逾期
    app.server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": lead["id"],
            "title": "Upcoming call",
            "task_type": "call",
            "due_date": now + Duration::hours(1),
            "reminder_at": now - Duration::minutes(5)
        }))
        .await
        .assert_status(StatusCode::CREATED);

    // 尚未到提醒时间
    app.server
        .post("/api/v1/tasks")
        .json(&json!({
            "lead_id": lead["id"],
            "title": "Next week",
            "task_type": "call",
            "due_date": now + Duration::days(7),
            "reminder_at": now + Duration::days(6)
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let overdue = app
        .server
        .get("/api/v1/automation/overdue")
        .await
        .json::<Value>();
    assert_eq!(overdue["count"], 1);
    assert_eq!(overdue["tasks"][0]["title"], "Missed call");

    let reminders = app
        .server
        .get("/api/v1/automation/reminders")
        .await
        .json::<Value>();
    assert_eq!(reminders["count"], 2);
}

#[tokio::test]
async fn test_invalid_sweep_threshold_is_rejected() {
    let app = create_test_app().await;

    app.server
        .post("/api/v1/automation/stale-leads")
        .add_query_param("days_inactive", "soon")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
