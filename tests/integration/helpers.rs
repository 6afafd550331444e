// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use leadrs::config::settings::{
    AutomationSettings, DatabaseSettings, LoggingSettings, MetricsSettings, ScoringSettings,
    ServerSettings, Settings, WidgetSettings,
};
use leadrs::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use serde_json::{json, Value};
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
}

/// 测试用配置，不读取文件与环境变量
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
        },
        scoring: ScoringSettings { enabled: true },
        automation: AutomationSettings {
            enabled: true,
            default_follow_up_days: 3,
            stale_after_days: 7,
        },
        widget: WidgetSettings {
            embed_base_url: "https://leads.example.com".to_string(),
        },
        metrics: MetricsSettings {
            enabled: false,
            listen: "127.0.0.1:0".to_string(),
        },
        logging: LoggingSettings { json: false },
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(test_settings()).await
}

pub async fn create_test_app_with(settings: Settings) -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db = Arc::new(db);

    let app = routes::app(db.clone(), Arc::new(settings));
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp { server, db }
}

/// 创建一条线索并返回响应体
pub async fn create_lead(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/v1/leads").json(&body).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

pub fn minimal_lead(name: &str) -> Value {
    json!({ "name": name, "source": "direct" })
}
