// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::tag::LeadTag;
use async_trait::async_trait;
use uuid::Uuid;

/// 标签仓库特质
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// 创建标签，名称重复时返回 `AlreadyExists`
    async fn create(&self, tag: &LeadTag) -> Result<LeadTag, RepositoryError>;
    /// 按名称排序列出全部标签
    async fn list(&self) -> Result<Vec<LeadTag>, RepositoryError>;
    /// 删除标签
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
