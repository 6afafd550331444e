// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_repository::RepositoryError;
use crate::domain::models::lead::{Lead, LeadSource, LeadStage, Priority};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 线索查询参数
#[derive(Debug, Default, Clone)]
pub struct LeadQueryParams {
    pub stage: Option<LeadStage>,
    pub source: Option<LeadSource>,
    /// 名称或联系方式的模糊匹配（不区分大小写）
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

/// 统计用的线索摘要
#[derive(Debug, Clone, PartialEq)]
pub struct LeadSummary {
    pub stage: LeadStage,
    pub source: LeadSource,
    pub priority: Priority,
    pub score: i32,
    pub estimated_value: Option<f64>,
}

/// 线索仓库特质
///
/// 定义线索数据访问接口
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// 创建线索
    async fn create(&self, lead: &Lead) -> Result<Lead, RepositoryError>;
    /// 根据ID查找线索
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Lead>, RepositoryError>;
    /// 整体更新线索
    async fn update(&self, lead: &Lead) -> Result<Lead, RepositoryError>;
    /// 删除线索及其全部任务
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// 分页查询，按创建时间倒序
    async fn query(&self, params: LeadQueryParams) -> Result<(Vec<Lead>, u64), RepositoryError>;
    /// 查找处于 `stages` 且 `updated_at` 早于 `cutoff` 的线索
    async fn find_stale(
        &self,
        stages: &[LeadStage],
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Lead>, RepositoryError>;
    /// 获取创建时间位于区间内的线索摘要
    async fn summaries(
        &self,
        created_after: Option<DateTime<Utc>>,
        created_before: Option<DateTime<Utc>>,
    ) -> Result<Vec<LeadSummary>, RepositoryError>;
}
