// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::{
        dto::task_request::{CreateTaskRequestDto, TaskListQueryDto, UpdateTaskRequestDto},
        use_cases::task_use_case::TaskUseCase,
    },
    config::settings::Settings,
    domain::repositories::{lead_repository::LeadRepository, task_repository::TaskRepository},
    presentation::{
        errors::AppError,
        extractors::validated::{ValidatedJson, ValidatedQuery},
    },
};

/// 创建任务
pub async fn create_task<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    let task = use_case.create_task(payload).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// 分页查询任务
pub async fn list_tasks<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedQuery(query): ValidatedQuery<TaskListQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    Ok(Json(use_case.list_tasks(query).await?))
}

pub async fn get_task<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    Ok(Json(use_case.get_task(id).await?))
}

pub async fn update_task<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTaskRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    Ok(Json(use_case.update_task(id, payload).await?))
}

pub async fn delete_task<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = TaskUseCase::new(lead_repo, task_repo, &settings.automation);
    use_case.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
