// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::{
    application::{dto::task_request::StaleLeadsQueryDto, use_cases::task_use_case::TaskUseCase},
    config::settings::Settings,
    domain::repositories::{lead_repository::LeadRepository, task_repository::TaskRepository},
    presentation::{errors::AppError, extractors::validated::ValidatedQuery},
};

/// 已逾期的待处理任务
pub async fn overdue_tasks<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    let tasks = use_case.overdue_tasks().await?;
    Ok(Json(json!({ "count": tasks.len(), "tasks": tasks })))
}

/// 已到提醒时间的待处理任务
pub async fn reminder_tasks<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    let tasks = use_case.tasks_needing_reminder().await?;
    Ok(Json(json!({ "count": tasks.len(), "tasks": tasks })))
}

/// 沉睡线索清理，可重复调用
pub async fn sweep_stale_leads<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedQuery(query): ValidatedQuery<StaleLeadsQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    let tasks = use_case.sweep_stale_leads(query).await?;
    Ok(Json(json!({ "created": tasks.len(), "tasks": tasks })))
}
