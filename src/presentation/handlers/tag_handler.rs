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
    application::{dto::tag_request::CreateTagRequestDto, use_cases::tag_use_case::TagUseCase},
    domain::repositories::tag_repository::TagRepository,
    presentation::{errors::AppError, extractors::validated::ValidatedJson},
};

pub async fn create_tag<R>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateTagRequestDto>,
) -> Result<impl IntoResponse, AppError>
where
    R: TagRepository + 'static,
{
    let tag = TagUseCase::new(repo).create_tag(payload).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

pub async fn list_tags<R>(Extension(repo): Extension<Arc<R>>) -> Result<impl IntoResponse, AppError>
where
    R: TagRepository + 'static,
{
    Ok(Json(TagUseCase::new(repo).list_tags().await?))
}

pub async fn delete_tag<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError>
where
    R: TagRepository + 'static,
{
    TagUseCase::new(repo).delete_tag(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
