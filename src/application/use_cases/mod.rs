// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::DomainError;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::services::task_automation_service::AutomationError;
use thiserror::Error;
use validator::ValidationErrors;

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 每个用例代表一个完整的业务流程，遵循单一职责原则
pub mod lead_use_case;
pub mod tag_use_case;
pub mod task_use_case;
pub mod widget_use_case;

/// 用例层错误
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Automation error: {0}")]
    Automation(#[from] AutomationError),
}

impl From<ValidationErrors> for UseCaseError {
    fn from(errors: ValidationErrors) -> Self {
        UseCaseError::Validation(errors.to_string())
    }
}

impl From<DomainError> for UseCaseError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::ValidationError(message) => UseCaseError::Validation(message),
        }
    }
}

/// 页码与每页条数换算为偏移量，上限为数据库可绑定的 `i64::MAX`
pub(crate) fn page_offset(page: u64, page_size: u64) -> u64 {
    page.saturating_sub(1)
        .saturating_mul(page_size)
        .min(i64::MAX as u64)
}
