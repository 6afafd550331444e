// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{Task, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 违反唯一约束
    #[error("Record already exists: {0}")]
    AlreadyExists(String),
}

/// 任务查询参数
#[derive(Debug, Default, Clone)]
pub struct TaskQueryParams {
    pub lead_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<Uuid>,
    pub limit: u64,
    pub offset: u64,
}

/// 任务仓库特质
///
/// 定义任务数据访问接口
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建新任务
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 根据ID查找任务
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError>;
    /// 更新任务
    async fn update(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 删除任务
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 分页查询，按截止时间升序（空值在后）、创建时间降序
    async fn query(&self, params: TaskQueryParams) -> Result<(Vec<Task>, u64), RepositoryError>;
    /// 查找待处理且截止时间早于 `now` 的任务
    async fn find_overdue(&self, now: DateTime<Utc>) -> Result<Vec<Task>, RepositoryError>;
    /// 查找待处理且提醒时间不晚于 `now` 的任务
    async fn find_needing_reminder(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, RepositoryError>;
    /// 原子地“检查并插入”
    ///
    /// 在同一事务内锁定线索行，仅当该线索没有待处理任务时插入 `task`。
    /// 返回 `Ok(None)` 表示已存在待处理任务而跳过。
    async fn create_unless_pending(&self, task: &Task) -> Result<Option<Task>, RepositoryError>;
}
