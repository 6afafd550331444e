// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::task::{Task, TaskStatus};
use crate::domain::repositories::task_repository::{
    RepositoryError, TaskQueryParams, TaskRepository,
};
use crate::infrastructure::database::entities::{lead as lead_entity, task as task_entity};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{LockType, NullOrdering, Order},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的任务仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<task_entity::Model> for Task {
    fn from(model: task_entity::Model) -> Self {
        Self {
            id: model.id,
            lead_id: model.lead_id,
            title: model.title,
            description: model.description,
            task_type: model.task_type.parse().unwrap_or_default(),
            status: model.status.parse().unwrap_or_default(),
            priority: model.priority.parse().unwrap_or_default(),
            assigned_to: model.assigned_to,
            due_date: model.due_date,
            reminder_at: model.reminder_at,
            completed_at: model.completed_at,
            completed_by: model.completed_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Task> for task_entity::ActiveModel {
    fn from(task: Task) -> Self {
        Self {
            id: Set(task.id),
            lead_id: Set(task.lead_id),
            title: Set(task.title),
            description: Set(task.description),
            task_type: Set(task.task_type.to_string()),
            status: Set(task.status.to_string()),
            priority: Set(task.priority.to_string()),
            assigned_to: Set(task.assigned_to),
            due_date: Set(task.due_date),
            reminder_at: Set(task.reminder_at),
            completed_at: Set(task.completed_at),
            completed_by: Set(task.completed_by),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}

fn pending() -> String {
    TaskStatus::Pending.to_string()
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(&self, task: &Task) -> Result<Task, RepositoryError> {
        let model: task_entity::ActiveModel = task.clone().into();

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = task_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn query(&self, params: TaskQueryParams) -> Result<(Vec<Task>, u64), RepositoryError> {
        let mut query = task_entity::Entity::find();

        if let Some(lead_id) = params.lead_id {
            query = query.filter(task_entity::Column::LeadId.eq(lead_id));
        }
        if let Some(status) = params.status {
            query = query.filter(task_entity::Column::Status.eq(status.to_string()));
        }
        if let Some(assigned_to) = params.assigned_to {
            query = query.filter(task_entity::Column::AssignedTo.eq(assigned_to));
        }

        let total = query.clone().count(self.db.as_ref()).await?;

        let models = query
            .order_by_with_nulls(task_entity::Column::DueDate, Order::Asc, NullOrdering::Last)
            .order_by_desc(task_entity::Column::CreatedAt)
            .offset(params.offset)
            .limit(params.limit)
            .all(self.db.as_ref())
            .await?;

        Ok((models.into_iter().map(Task::from).collect(), total))
    }

    async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::Status.eq(pending()))
            .filter(task_entity::Column::DueDate.is_not_null())
            .filter(task_entity::Column::DueDate.lt(now))
            .order_by_asc(task_entity::Column::DueDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn find_needing_reminder(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .filter(task_entity::Column::Status.eq(pending()))
            .filter(task_entity::Column::ReminderAt.is_not_null())
            .filter(task_entity::Column::ReminderAt.lte(now))
            .order_by_asc(task_entity::Column::ReminderAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn create_unless_pending(&self, task: &Task) -> Result<Option<Task>, RepositoryError> {
        let txn = self.db.begin().await?;

        // 锁住线索行，串行化同一线索上的并发检查
        let lead = lead_entity::Entity::find_by_id(task.lead_id)
            .lock(LockType::Update)
            .one(&txn)
            .await?;
        if lead.is_none() {
            txn.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        let pending_count = task_entity::Entity::find()
            .filter(task_entity::Column::LeadId.eq(task.lead_id))
            .filter(task_entity::Column::Status.eq(pending()))
            .count(&txn)
            .await?;
        if pending_count > 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let model: task_entity::ActiveModel = task.clone().into();
        let inserted = model.insert(&txn).await?;

        txn.commit().await?;

        Ok(Some(inserted.into()))
    }
}
