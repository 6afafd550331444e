// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::UseCaseError;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::services::task_automation_service::AutomationError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 状态码通过向下转型到具体错误类型确定。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的HTTP状态码
    pub fn status(&self) -> StatusCode {
        if let Some(err) = self.0.downcast_ref::<UseCaseError>() {
            return match err {
                UseCaseError::Validation(_) => StatusCode::BAD_REQUEST,
                UseCaseError::NotFound(_) => StatusCode::NOT_FOUND,
                UseCaseError::Repository(e) => repository_status(e),
                UseCaseError::Automation(e) => automation_status(e),
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        if let Some(err) = self.0.downcast_ref::<AutomationError>() {
            return automation_status(err);
        }
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        RepositoryError::NotFound => StatusCode::NOT_FOUND,
        RepositoryError::AlreadyExists(_) => StatusCode::CONFLICT,
    }
}

fn automation_status(err: &AutomationError) -> StatusCode {
    match err {
        AutomationError::LeadNotFound(_) => StatusCode::NOT_FOUND,
        AutomationError::Repository(e) => repository_status(e),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = self.0.to_string();

        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
