// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::tag::LeadTag;
use crate::domain::repositories::tag_repository::TagRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::lead_tag as tag_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 标签仓库实现
#[derive(Clone)]
pub struct TagRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<tag_entity::Model> for LeadTag {
    fn from(model: tag_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            color: model.color,
            description: model.description,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryImpl {
    async fn create(&self, tag: &LeadTag) -> Result<LeadTag, RepositoryError> {
        let existing = tag_entity::Entity::find()
            .filter(tag_entity::Column::Name.eq(tag.name.as_str()))
            .count(self.db.as_ref())
            .await?;
        if existing > 0 {
            return Err(RepositoryError::AlreadyExists(tag.name.clone()));
        }

        let model = tag_entity::ActiveModel {
            id: Set(tag.id),
            name: Set(tag.name.clone()),
            color: Set(tag.color.clone()),
            description: Set(tag.description.clone()),
            created_at: Set(tag.created_at),
        };

        match model.insert(self.db.as_ref()).await {
            Ok(inserted) => Ok(inserted.into()),
            // 并发创建同名标签时由唯一索引兜底
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(RepositoryError::AlreadyExists(tag.name.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn list(&self) -> Result<Vec<LeadTag>, RepositoryError> {
        let models = tag_entity::Entity::find()
            .order_by_asc(tag_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(LeadTag::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = tag_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
