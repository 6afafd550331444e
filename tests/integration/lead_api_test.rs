// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_lead, create_test_app, minimal_lead};
use axum::http::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

fn referral_lead() -> Value {
    json!({
        "name": "Grace Hopper",
        "source": "referral",
        "contact_info": {
            "email": "grace@navy.mil",
            "phone": "+1 555 0100",
            "company": "US Navy",
            "title": "Rear Admiral"
        },
        "product_interest": "Enterprise plan",
        "estimated_value": 120000.0,
        "utm_campaign": "spring"
    })
}

#[tokio::test]
async fn test_create_lead_is_scored() {
    let app = create_test_app().await;

    let lead = create_lead(&app.server, referral_lead()).await;

    assert_eq!(lead["score"], 95);
    assert_eq!(lead["priority"], "urgent");
    assert_eq!(lead["stage"], "new");
    let tags: Vec<String> = serde_json::from_value(lead["tags"].clone()).unwrap();
    assert!(tags.contains(&"hot-lead".to_string()));
    assert!(tags.contains(&"high-quality".to_string()));
    assert!(tags.contains(&"enterprise".to_string()));
}

#[tokio::test]
async fn test_create_lead_validation_errors_are_400() {
    let app = create_test_app().await;

    let empty_name = app
        .server
        .post("/api/v1/leads")
        .json(&json!({ "name": "", "source": "direct" }))
        .await;
    empty_name.assert_status(StatusCode::BAD_REQUEST);
    assert!(empty_name.json::<Value>()["error"].is_string());

    let negative_value = app
        .server
        .post("/api/v1/leads")
        .json(&json!({ "name": "Ada", "source": "direct", "estimated_value": -1.0 }))
        .await;
    negative_value.assert_status(StatusCode::BAD_REQUEST);

    let unknown_source = app
        .server
        .post("/api/v1/leads")
        .json(&json!({ "name": "Ada", "source": "carrier_pigeon" }))
        .await;
    unknown_source.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stage_change_creates_tasks() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Alan Turing")).await;
    let id = lead["id"].as_str().unwrap();

    let updated = app
        .server
        .patch(&format!("/api/v1/leads/{id}"))
        .json(&json!({ "stage": "qualified" }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["stage"], "qualified");

    let tasks = app
        .server
        .get("/api/v1/tasks")
        .add_query_param("lead_id", id)
        .await
        .json::<Value>();
    assert_eq!(tasks["total"], 1);
    assert_eq!(tasks["tasks"][0]["title"], "Schedule demo for Alan Turing");
    assert_eq!(tasks["tasks"][0]["task_type"], "demo");
}

#[tokio::test]
async fn test_get_and_delete_lead() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;
    let id = lead["id"].as_str().unwrap();

    app.server
        .get(&format!("/api/v1/leads/{id}"))
        .await
        .assert_status_ok();

    app.server
        .delete(&format!("/api/v1/leads/{id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    app.server
        .get(&format!("/api/v1/leads/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    app.server
        .delete(&format!("/api/v1/leads/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_leads_filters_and_searches() {
    let app = create_test_app().await;
    create_lead(&app.server, referral_lead()).await;
    create_lead(&app.server, minimal_lead("Alan Turing")).await;
    create_lead(&app.server, minimal_lead("Ada Lovelace")).await;

    let by_source = app
        .server
        .get("/api/v1/leads")
        .add_query_param("source", "referral")
        .await
        .json::<Value>();
    assert_eq!(by_source["total"], 1);

    let by_email = app
        .server
        .get("/api/v1/leads")
        .add_query_param("search", "NAVY.MIL")
        .await
        .json::<Value>();
    assert_eq!(by_email["total"], 1);
    assert_eq!(by_email["leads"][0]["name"], "Grace Hopper");

    let paged = app
        .server
        .get("/api/v1/leads")
        .add_query_param("page_size", 2)
        .await
        .json::<Value>();
    assert_eq!(paged["total"], 3);
    assert_eq!(paged["total_pages"], 2);
    assert_eq!(paged["leads"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_does_not_match_contact_field_names() {
    let app = create_test_app().await;
    create_lead(&app.server, minimal_lead("Alice")).await;
    create_lead(&app.server, referral_lead()).await;

    for term in ["email", "company", "null"] {
        let found = app
            .server
            .get("/api/v1/leads")
            .add_query_param("search", term)
            .await
            .json::<Value>();
        assert_eq!(found["total"], 0, "search term {term}");
    }
}

#[tokio::test]
async fn test_oversized_page_is_400() {
    let app = create_test_app().await;
    create_lead(&app.server, minimal_lead("Alice")).await;

    app.server
        .get("/api/v1/leads")
        .add_query_param("page", u64::MAX / 2)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    app.server
        .get("/api/v1/tasks")
        .add_query_param("page", u64::MAX / 2)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_and_stats() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/v1/leads/import")
        .json(&json!({
            "leads": [
                { "name": "One", "source": "direct", "estimated_value": 1000.0 },
                { "name": "", "source": "direct" },
                { "name": "Two", "source": "event", "estimated_value": 2000.0 }
            ]
        }))
        .await;
    response.assert_status_ok();
    let result = response.json::<Value>();
    assert_eq!(result["total"], 3);
    assert_eq!(result["successful"], 2);
    assert_eq!(result["failed"], 1);
    assert_eq!(result["errors"][0]["index"], 1);

    let stats = app
        .server
        .get("/api/v1/leads/stats/overview")
        .await
        .json::<Value>();
    assert_eq!(stats["total_leads"], 2);
    assert_eq!(stats["by_source"]["import"], 2);
    assert_eq!(stats["by_stage"]["new"], 2);
    assert_eq!(stats["total_estimated_value"], 3000.0);
}

#[tokio::test]
async fn test_follow_up_endpoint() {
    let app = create_test_app().await;
    let lead = create_lead(&app.server, minimal_lead("Ada")).await;
    let id = lead["id"].as_str().unwrap();

    let response = app
        .server
        .post(&format!("/api/v1/leads/{id}/follow-up"))
        .add_query_param("days", 5)
        .add_query_param("task_type", "call")
        .add_query_param("priority", "high")
        .await;
    response.assert_status(StatusCode::CREATED);
    let task = response.json::<Value>();
    assert_eq!(task["title"], "Follow up with Ada");
    assert_eq!(task["task_type"], "call");
    assert_eq!(task["priority"], "high");

    app.server
        .post(&format!("/api/v1/leads/{}/follow-up", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
