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
        dto::widget_request::{CreateWidgetRequestDto, UpdateWidgetRequestDto, WidgetSubmissionDto},
        use_cases::widget_use_case::WidgetUseCase,
    },
    config::settings::Settings,
    domain::repositories::{lead_repository::LeadRepository, widget_repository::WidgetRepository},
    presentation::{errors::AppError, extractors::validated::ValidatedJson},
};

fn use_case<WR, LR>(
    widget_repo: Arc<WR>,
    lead_repo: Arc<LR>,
    settings: &Settings,
) -> WidgetUseCase<WR, LR>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    WidgetUseCase::new(widget_repo, lead_repo, &settings.scoring, &settings.widget)
}

/// 创建组件
pub async fn create_widget<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedJson(payload): ValidatedJson<CreateWidgetRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    let created = use_case(widget_repo, lead_repo, &settings)
        .create_widget(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_widgets<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    let widgets = use_case(widget_repo, lead_repo, &settings)
        .list_widgets()
        .await?;
    Ok(Json(widgets))
}

pub async fn update_widget<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateWidgetRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    let updated = use_case(widget_repo, lead_repo, &settings)
        .update_widget(id, payload)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_widget<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    use_case(widget_repo, lead_repo, &settings)
        .delete_widget(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 组件公开配置，路径参数为公开的 widget_id
pub async fn widget_config<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(widget_id): Path<String>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    let config = use_case(widget_repo, lead_repo, &settings)
        .widget_config(&widget_id)
        .await?;
    Ok(Json(config))
}

/// 表单提交
pub async fn submit_widget<WR, LR>(
    Extension(widget_repo): Extension<Arc<WR>>,
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(widget_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<WidgetSubmissionDto>,
) -> Result<impl IntoResponse, AppError>
where
    WR: WidgetRepository + 'static,
    LR: LeadRepository + 'static,
{
    let response = use_case(widget_repo, lead_repo, &settings)
        .submit(&widget_id, payload)
        .await?;
    Ok(Json(response))
}
