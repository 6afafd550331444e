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
        dto::lead_request::{
            CreateLeadRequestDto, FollowUpQueryDto, ImportLeadsRequestDto, LeadListQueryDto,
            UpdateLeadRequestDto,
        },
        use_cases::lead_use_case::LeadUseCase,
    },
    config::settings::Settings,
    domain::repositories::{lead_repository::LeadRepository, task_repository::TaskRepository},
    presentation::{
        errors::AppError,
        extractors::validated::{ValidatedJson, ValidatedQuery},
    },
};

fn use_case<LR, TR>(
    lead_repo: Arc<LR>,
    task_repo: Arc<TR>,
    settings: &Settings,
) -> LeadUseCase<LR, TR>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    LeadUseCase::new(lead_repo, task_repo, &settings.scoring, &settings.automation)
}

/// 创建线索
pub async fn create_lead<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedJson(payload): ValidatedJson<CreateLeadRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let lead = use_case(lead_repo, task_repo, &settings)
        .create_lead(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// 分页列出线索
pub async fn list_leads<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedQuery(query): ValidatedQuery<LeadListQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let page = use_case(lead_repo, task_repo, &settings)
        .list_leads(query)
        .await?;
    Ok(Json(page))
}

pub async fn get_lead<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let lead = use_case(lead_repo, task_repo, &settings).get_lead(id).await?;
    Ok(Json(lead))
}

/// 更新线索，阶段变化可能触发任务生成
pub async fn update_lead<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateLeadRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let lead = use_case(lead_repo, task_repo, &settings)
        .update_lead(id, payload)
        .await?;
    Ok(Json(lead))
}

pub async fn delete_lead<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    use_case(lead_repo, task_repo, &settings)
        .delete_lead(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 批量导入线索
pub async fn import_leads<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedJson(payload): ValidatedJson<ImportLeadsRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let result = use_case(lead_repo, task_repo, &settings)
        .import_leads(payload)
        .await?;
    Ok(Json(result))
}

pub async fn lead_stats<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let stats = use_case(lead_repo, task_repo, &settings)
        .lead_stats()
        .await?;
    Ok(Json(stats))
}

/// 为线索创建手动跟进任务
pub async fn create_follow_up<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
    ValidatedQuery(query): ValidatedQuery<FollowUpQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let task = use_case(lead_repo, task_repo, &settings)
        .follow_up(id, query)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}
