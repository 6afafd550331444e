// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::lead::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 任务实体
///
/// 表示与某条线索关联的一次跟进动作（电话、邮件、会议等）。
/// 任务可以由用户直接创建，也可以由自动化编排器根据阶段变化生成。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符
    pub id: Uuid,
    /// 所属线索ID，线索删除时级联删除
    pub lead_id: Uuid,
    /// 任务标题
    pub title: String,
    /// 任务描述
    pub description: Option<String>,
    /// 任务类型
    pub task_type: TaskType,
    /// 任务状态
    pub status: TaskStatus,
    /// 任务优先级
    pub priority: Priority,
    /// 负责人
    pub assigned_to: Option<Uuid>,
    /// 截止时间
    pub due_date: Option<DateTime<Utc>>,
    /// 提醒时间，与截止时间同时存在时必须早于截止时间
    pub reminder_at: Option<DateTime<Utc>>,
    /// 完成时间，与 `completed_by` 一起首次完成时写入
    pub completed_at: Option<DateTime<Utc>>,
    /// 完成人
    pub completed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 任务类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Call,
    Email,
    Meeting,
    #[default]
    FollowUp,
    Proposal,
    Demo,
    Note,
    Other,
}

impl TaskType {
    pub const ALL: [TaskType; 8] = [
        TaskType::Call,
        TaskType::Email,
        TaskType::Meeting,
        TaskType::FollowUp,
        TaskType::Proposal,
        TaskType::Demo,
        TaskType::Note,
        TaskType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Call => "call",
            TaskType::Email => "email",
            TaskType::Meeting => "meeting",
            TaskType::FollowUp => "follow_up",
            TaskType::Proposal => "proposal",
            TaskType::Demo => "demo",
            TaskType::Note => "note",
            TaskType::Other => "other",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskType::ALL
            .into_iter()
            .find(|task_type| task_type.as_str() == s)
            .ok_or(())
    }
}

/// 任务状态枚举
///
/// `Overdue` 只用于展示，自动化流程只会写入 `Pending`。
/// Pending → InProgress → Completed/Cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
        TaskStatus::Cancelled,
        TaskStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Overdue => "overdue",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// 领域错误类型
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl Task {
    /// 创建一个待处理任务
    pub fn new(lead_id: Uuid, title: impl Into<String>, task_type: TaskType) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            lead_id,
            title: title.into(),
            description: None,
            task_type,
            status: TaskStatus::Pending,
            priority: Priority::Medium,
            assigned_to: None,
            due_date: None,
            reminder_at: None,
            completed_at: None,
            completed_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 校验提醒时间早于截止时间
    pub fn validate_schedule(&self) -> Result<(), DomainError> {
        match (self.reminder_at, self.due_date) {
            (Some(reminder), Some(due)) if reminder >= due => Err(DomainError::ValidationError(
                "reminder_at must be earlier than due_date".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// 变更任务状态
    ///
    /// 首次变为 Completed 时同时写入 `completed_at` 与 `completed_by`，
    /// 之后再次完成不会覆盖。
    pub fn set_status(&mut self, status: TaskStatus, completed_by: Option<Uuid>, now: DateTime<Utc>) {
        self.status = status;
        if status == TaskStatus::Completed && self.completed_at.is_none() {
            self.completed_at = Some(now);
            self.completed_by = completed_by;
        }
    }
}
