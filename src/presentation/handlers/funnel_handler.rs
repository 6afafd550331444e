// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, response::IntoResponse, Json};
use std::sync::Arc;

use crate::{
    application::{dto::funnel_request::FunnelQueryDto, use_cases::lead_use_case::LeadUseCase},
    config::settings::Settings,
    domain::repositories::{lead_repository::LeadRepository, task_repository::TaskRepository},
    presentation::{errors::AppError, extractors::validated::ValidatedQuery},
};

/// 销售漏斗统计
pub async fn get_funnel<LR, TR>(
    Extension(lead_repo): Extension<Arc<LR>>,
    Extension(task_repo): Extension<Arc<TR>>,
    Extension(settings): Extension<Arc<Settings>>,
    ValidatedQuery(query): ValidatedQuery<FunnelQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    LR: LeadRepository + 'static,
    TR: TaskRepository + 'static,
{
    let use_case = LeadUseCase::new(lead_repo, task_repo, &settings.scoring, &settings.automation);
    let funnel = use_case.funnel(query).await?;
    Ok(Json(funnel))
}
