// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scheduling_policy::{self, is_overdue, is_stale, needs_reminder, stale_cutoff};
use super::task_planner::{follow_up_spec, plan_tasks_for_transition, re_engagement_spec};
use crate::domain::models::lead::{Lead, LeadStage, Priority};
use crate::domain::models::task::{Task, TaskType};
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use chrono::Utc;
use metrics::counter;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

/// 自动化编排错误
#[derive(Error, Debug)]
pub enum AutomationError {
    /// 引用的线索不存在
    #[error("Lead {0} not found")]
    LeadNotFound(Uuid),
    /// 仓库错误
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 任务自动化服务
///
/// 负责加载线索、调用任务规划器、去重并持久化任务，
/// 以及对外暴露到期扫描、提醒扫描和沉睡线索清理等批量操作。
/// 每次创建都立即提交，批量操作中单条线索的失败不会回滚其他线索。
pub struct TaskAutomationService<LR: LeadRepository, TR: TaskRepository> {
    lead_repo: Arc<LR>,
    task_repo: Arc<TR>,
}

impl<LR: LeadRepository, TR: TaskRepository> TaskAutomationService<LR, TR> {
    /// 创建新的自动化服务实例
    pub fn new(lead_repo: Arc<LR>, task_repo: Arc<TR>) -> Self {
        Self {
            lead_repo,
            task_repo,
        }
    }

    async fn load_lead(&self, lead_id: Uuid) -> Result<Lead, AutomationError> {
        self.lead_repo
            .find_by_id(lead_id)
            .await?
            .ok_or(AutomationError::LeadNotFound(lead_id))
    }

    /// 为线索创建一条手动跟进任务
    ///
    /// # 参数
    ///
    /// * `lead_id` - 线索ID
    /// * `days_from_now` - 几天后到期
    /// * `task_type` - 任务类型
    /// * `priority` - 任务优先级
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 已持久化的任务
    /// * `Err(AutomationError::LeadNotFound)` - 线索不存在
    pub async fn create_follow_up_task(
        &self,
        lead_id: Uuid,
        days_from_now: i64,
        task_type: TaskType,
        priority: Priority,
    ) -> Result<Task, AutomationError> {
        let lead = self.load_lead(lead_id).await?;

        let spec = follow_up_spec(&lead, days_from_now, task_type, priority);
        let task = scheduling_policy::materialize(&spec, &lead, Utc::now());
        let task = self.task_repo.create(&task).await?;

        counter!("tasks_created_total", "origin" => "follow_up").increment(1);
        info!(lead_id = %lead_id, task_id = %task.id, "Created follow-up task");

        Ok(task)
    }

    /// 根据新阶段生成跟进任务
    ///
    /// 不做去重，同一阶段重复调用会生成重复任务。线索不存在时返回 `LeadNotFound`。
    pub async fn create_stage_transition_tasks(
        &self,
        lead_id: Uuid,
        new_stage: LeadStage,
    ) -> Result<Vec<Task>, AutomationError> {
        let lead = self.load_lead(lead_id).await?;
        let now = Utc::now();

        let mut created = Vec::new();
        for spec in plan_tasks_for_transition(&lead, new_stage) {
            let task = scheduling_policy::materialize(&spec, &lead, now);
            created.push(self.task_repo.create(&task).await?);
        }

        if !created.is_empty() {
            counter!("tasks_created_total", "origin" => "stage_transition")
                .increment(created.len() as u64);
        }
        info!(
            lead_id = %lead_id,
            stage = %new_stage,
            count = created.len(),
            "Created stage transition tasks"
        );

        Ok(created)
    }

    /// 所有已逾期的待处理任务
    pub async fn get_overdue_tasks(&self) -> Result<Vec<Task>, AutomationError> {
        let now = Utc::now();
        let tasks = self.task_repo.find_overdue(now).await?;
        Ok(tasks.into_iter().filter(|t| is_overdue(t, now)).collect())
    }

    /// 所有已到提醒时间的待处理任务
    pub async fn get_tasks_needing_reminder(&self) -> Result<Vec<Task>, AutomationError> {
        let now = Utc::now();
        let tasks = self.task_repo.find_needing_reminder(now).await?;
        Ok(tasks.into_iter().filter(|t| needs_reminder(t, now)).collect())
    }

    /// 为沉睡线索创建重新激活任务
    ///
    /// 已有待处理任务的线索会被跳过；检查与插入由仓库在同一事务内原子完成。
    /// 单条线索失败只记录日志，不影响其他线索。
    ///
    /// # 返回值
    ///
    /// 本次新建的任务列表
    pub async fn auto_create_stale_lead_tasks(
        &self,
        days_inactive: i64,
    ) -> Result<Vec<Task>, AutomationError> {
        let now = Utc::now();
        let cutoff = stale_cutoff(days_inactive, now);
        let leads = self.lead_repo.find_stale(&LeadStage::EARLY, cutoff).await?;

        let mut created = Vec::new();
        for lead in leads.iter().filter(|l| is_stale(l, days_inactive, now)) {
            let spec = re_engagement_spec(lead, days_inactive);
            let task = scheduling_policy::materialize(&spec, lead, now);

            match self.task_repo.create_unless_pending(&task).await {
                Ok(Some(task)) => {
                    counter!("tasks_created_total", "origin" => "stale_sweep").increment(1);
                    created.push(task);
                }
                Ok(None) => {
                    counter!("stale_sweep_skipped_total").increment(1);
                    debug!(lead_id = %lead.id, "Lead already has a pending task, skipping");
                }
                Err(e) => {
                    error!(lead_id = %lead.id, "Failed to create re-engagement task: {}", e);
                }
            }
        }

        info!(
            scanned = leads.len(),
            created = created.len(),
            days_inactive,
            "Stale lead sweep finished"
        );

        Ok(created)
    }
}

#[cfg(test)]
#[path = "task_automation_service_test.rs"]
mod tests;
