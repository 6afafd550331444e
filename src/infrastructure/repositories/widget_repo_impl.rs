// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::widget::Widget;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::repositories::widget_repository::WidgetRepository;
use crate::infrastructure::database::entities::widget as widget_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 表单组件仓库实现
#[derive(Clone)]
pub struct WidgetRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl WidgetRepositoryImpl {
    /// 创建新的组件仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<widget_entity::Model> for Widget {
    fn from(model: widget_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            widget_id: model.widget_id,
            api_key: model.api_key,
            title: model.title,
            description: model.description,
            submit_button_text: model.submit_button_text,
            success_message: model.success_message,
            fields: serde_json::from_value(model.fields).unwrap_or_default(),
            primary_color: model.primary_color,
            button_position: model.button_position,
            auto_open: model.auto_open,
            auto_open_delay: model.auto_open_delay,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Widget> for widget_entity::ActiveModel {
    fn from(widget: Widget) -> Self {
        Self {
            id: Set(widget.id),
            name: Set(widget.name),
            widget_id: Set(widget.widget_id),
            api_key: Set(widget.api_key),
            title: Set(widget.title),
            description: Set(widget.description),
            submit_button_text: Set(widget.submit_button_text),
            success_message: Set(widget.success_message),
            fields: Set(serde_json::Value::from(widget.fields)),
            primary_color: Set(widget.primary_color),
            button_position: Set(widget.button_position),
            auto_open: Set(widget.auto_open),
            auto_open_delay: Set(widget.auto_open_delay),
            is_active: Set(widget.is_active),
            created_at: Set(widget.created_at),
            updated_at: Set(widget.updated_at),
        }
    }
}

#[async_trait]
impl WidgetRepository for WidgetRepositoryImpl {
    async fn create(&self, widget: &Widget) -> Result<Widget, RepositoryError> {
        let model: widget_entity::ActiveModel = widget.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn list(&self) -> Result<Vec<Widget>, RepositoryError> {
        let models = widget_entity::Entity::find()
            .order_by_desc(widget_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Widget::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Widget>, RepositoryError> {
        let model = widget_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_active_by_widget_id(
        &self,
        widget_id: &str,
    ) -> Result<Option<Widget>, RepositoryError> {
        let model = widget_entity::Entity::find()
            .filter(widget_entity::Column::WidgetId.eq(widget_id))
            .filter(widget_entity::Column::IsActive.eq(true))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, widget: &Widget) -> Result<Widget, RepositoryError> {
        let model: widget_entity::ActiveModel = widget.clone().into();

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = widget_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
