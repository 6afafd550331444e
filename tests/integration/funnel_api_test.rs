// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_lead, create_test_app};
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::{json, Value};

#[tokio::test]
async fn test_funnel_counts_and_conversion() {
    let app = create_test_app().await;

    let stages = ["new", "new", "new", "new", "contacted", "contacted", "won"];
    for (i, stage) in stages.iter().enumerate() {
        let lead = create_lead(
            &app.server,
            json!({ "name": format!("Lead {i}"), "source": "direct", "estimated_value": 1000.0 }),
        )
        .await;
        if *stage != "new" {
            let id = lead["id"].as_str().unwrap();
            app.server
                .patch(&format!("/api/v1/leads/{id}"))
                .json(&json!({ "stage": stage }))
                .await
                .assert_status_ok();
        }
    }

    let funnel = app.server.get("/api/v1/funnel").await.json::<Value>();
    assert_eq!(funnel["total_leads"], 7);
    assert_eq!(funnel["total_value"], 7000.0);
    assert_eq!(funnel["overall_conversion_rate"], 25.0);

    let stages = funnel["stages"].as_array().unwrap();
    assert_eq!(stages.len(), 7);
    assert_eq!(stages[0]["stage"], "new");
    assert_eq!(stages[0]["count"], 4);
    assert_eq!(stages[0]["conversion_rate"], 50.0);
    assert_eq!(stages[1]["stage"], "contacted");
    assert_eq!(stages[1]["conversion_rate"], 0.0);
    assert!(stages[2]["conversion_rate"].is_null());
    assert!(stages[6]["conversion_rate"].is_null());
}

#[tokio::test]
async fn test_funnel_respects_date_range() {
    let app = create_test_app().await;
    create_lead(&app.server, json!({ "name": "Today", "source": "direct" })).await;

    let future = Utc::now() + Duration::days(1);
    let funnel = app
        .server
        .get("/api/v1/funnel")
        .add_query_param("start_date", future.to_rfc3339())
        .await
        .json::<Value>();
    assert_eq!(funnel["total_leads"], 0);
    assert_eq!(funnel["overall_conversion_rate"], 0.0);

    app.server
        .get("/api/v1/funnel")
        .add_query_param("start_date", future.to_rfc3339())
        .add_query_param("end_date", Utc::now().to_rfc3339())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
