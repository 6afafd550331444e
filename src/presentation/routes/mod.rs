// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{ServerSettings, Settings};
use crate::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use crate::infrastructure::repositories::tag_repo_impl::TagRepositoryImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::infrastructure::repositories::widget_repo_impl::WidgetRepositoryImpl;
use crate::presentation::handlers::{
    automation_handler, funnel_handler, lead_handler, system_handler, tag_handler, task_handler,
    widget_handler,
};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

type Leads = LeadRepositoryImpl;
type Tasks = TaskRepositoryImpl;
type Tags = TagRepositoryImpl;
type Widgets = WidgetRepositoryImpl;

/// 创建应用路由
///
/// # 返回值
///
/// 返回只含路由表的 Router，仓库与配置通过 `Extension` 注入
pub fn routes() -> Router {
    let system_routes = Router::new()
        .route("/", get(system_handler::banner))
        .route("/health", get(system_handler::health_check))
        .route("/api/v1/version", get(system_handler::version));

    let lead_routes = Router::new()
        .route(
            "/api/v1/leads",
            post(lead_handler::create_lead::<Leads, Tasks>)
                .get(lead_handler::list_leads::<Leads, Tasks>),
        )
        .route(
            "/api/v1/leads/import",
            post(lead_handler::import_leads::<Leads, Tasks>),
        )
        .route(
            "/api/v1/leads/stats/overview",
            get(lead_handler::lead_stats::<Leads, Tasks>),
        )
        .route(
            "/api/v1/leads/{id}",
            get(lead_handler::get_lead::<Leads, Tasks>)
                .patch(lead_handler::update_lead::<Leads, Tasks>)
                .delete(lead_handler::delete_lead::<Leads, Tasks>),
        )
        .route(
            "/api/v1/leads/{id}/follow-up",
            post(lead_handler::create_follow_up::<Leads, Tasks>),
        );

    let task_routes = Router::new()
        .route(
            "/api/v1/tasks",
            post(task_handler::create_task::<Leads, Tasks>)
                .get(task_handler::list_tasks::<Leads, Tasks>),
        )
        .route(
            "/api/v1/tasks/{id}",
            get(task_handler::get_task::<Leads, Tasks>)
                .patch(task_handler::update_task::<Leads, Tasks>)
                .delete(task_handler::delete_task::<Leads, Tasks>),
        )
        .route(
            "/api/v1/automation/overdue",
            get(automation_handler::overdue_tasks::<Leads, Tasks>),
        )
        .route(
            "/api/v1/automation/reminders",
            get(automation_handler::reminder_tasks::<Leads, Tasks>),
        )
        .route(
            "/api/v1/automation/stale-leads",
            post(automation_handler::sweep_stale_leads::<Leads, Tasks>),
        )
        .route(
            "/api/v1/funnel",
            get(funnel_handler::get_funnel::<Leads, Tasks>),
        );

    let tag_routes = Router::new()
        .route(
            "/api/v1/tags",
            post(tag_handler::create_tag::<Tags>).get(tag_handler::list_tags::<Tags>),
        )
        .route(
            "/api/v1/tags/{id}",
            axum::routing::delete(tag_handler::delete_tag::<Tags>),
        );

    // 管理接口用数据库主键，公开接口用 widget_id，两者共用同一个路径段
    let widget_routes = Router::new()
        .route(
            "/api/v1/widgets",
            post(widget_handler::create_widget::<Widgets, Leads>)
                .get(widget_handler::list_widgets::<Widgets, Leads>),
        )
        .route(
            "/api/v1/widgets/{id}",
            axum::routing::patch(widget_handler::update_widget::<Widgets, Leads>)
                .delete(widget_handler::delete_widget::<Widgets, Leads>),
        )
        .route(
            "/api/v1/widgets/{id}/config",
            get(widget_handler::widget_config::<Widgets, Leads>),
        )
        .route(
            "/api/v1/widgets/{id}/submit",
            post(widget_handler::submit_widget::<Widgets, Leads>),
        );

    Router::new()
        .merge(system_routes)
        .merge(lead_routes)
        .merge(task_routes)
        .merge(tag_routes)
        .merge(widget_routes)
}

/// 组装完整应用：路由、仓库注入、CORS 与请求追踪
pub fn app(db: Arc<DatabaseConnection>, settings: Arc<Settings>) -> Router {
    let lead_repo = Arc::new(LeadRepositoryImpl::new(db.clone()));
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let tag_repo = Arc::new(TagRepositoryImpl::new(db.clone()));
    let widget_repo = Arc::new(WidgetRepositoryImpl::new(db));

    routes()
        .layer(Extension(lead_repo))
        .layer(Extension(task_repo))
        .layer(Extension(tag_repo))
        .layer(Extension(widget_repo))
        .layer(cors_layer(&settings.server))
        .layer(Extension(settings))
        .layer(TraceLayer::new_for_http())
}

/// 根据配置的来源列表构造 CORS 层，`*` 表示任意来源
fn cors_layer(server: &ServerSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if server.cors_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}
