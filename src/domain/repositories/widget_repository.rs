// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::widget::Widget;
use async_trait::async_trait;
use uuid::Uuid;

/// 表单组件仓库特质
#[async_trait]
pub trait WidgetRepository: Send + Sync {
    /// 创建组件
    async fn create(&self, widget: &Widget) -> Result<Widget, RepositoryError>;
    /// 列出全部组件
    async fn list(&self) -> Result<Vec<Widget>, RepositoryError>;
    /// 根据内部ID查找
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Widget>, RepositoryError>;
    /// 根据公开ID查找处于启用状态的组件
    async fn find_active_by_widget_id(
        &self,
        widget_id: &str,
    ) -> Result<Option<Widget>, RepositoryError>;
    /// 更新组件
    async fn update(&self, widget: &Widget) -> Result<Widget, RepositoryError>;
    /// 删除组件
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
