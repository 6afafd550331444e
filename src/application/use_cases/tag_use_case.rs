// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::UseCaseError;
use crate::application::dto::tag_request::CreateTagRequestDto;
use crate::domain::models::tag::LeadTag;
use crate::domain::repositories::tag_repository::TagRepository;
use crate::utils::validators::normalize_optional;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// 标签用例
pub struct TagUseCase<R: TagRepository> {
    repo: Arc<R>,
}

impl<R: TagRepository> TagUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建标签，名称重复时返回 `AlreadyExists`
    pub async fn create_tag(&self, dto: CreateTagRequestDto) -> Result<LeadTag, UseCaseError> {
        dto.validate()?;

        let name = dto.name.trim();
        if name.is_empty() {
            return Err(UseCaseError::Validation("name must not be blank".to_string()));
        }

        let tag = LeadTag::new(name, dto.color, normalize_optional(dto.description));
        Ok(self.repo.create(&tag).await?)
    }

    pub async fn list_tags(&self) -> Result<Vec<LeadTag>, UseCaseError> {
        Ok(self.repo.list().await?)
    }

    pub async fn delete_tag(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
