// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::lead_request::{default_page, default_page_size};
use crate::domain::models::lead::Priority;
use crate::domain::models::task::{Task, TaskStatus, TaskType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建任务请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateTaskRequestDto {
    pub lead_id: Uuid,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    #[serde(default)]
    pub priority: Priority,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_at: Option<DateTime<Utc>>,
}

impl CreateTaskRequestDto {
    pub fn into_task(self) -> Task {
        let mut task = Task::new(self.lead_id, self.title, self.task_type);
        task.description = self.description;
        task.priority = self.priority;
        task.assigned_to = self.assigned_to;
        task.due_date = self.due_date;
        task.reminder_at = self.reminder_at;
        task
    }
}

/// 更新任务请求DTO，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateTaskRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub task_type: Option<TaskType>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
    pub reminder_at: Option<DateTime<Utc>>,
    /// 完成人，仅在首次完成时记录
    pub completed_by: Option<Uuid>,
}

/// 任务列表查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TaskListQueryDto {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,
    pub lead_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<Uuid>,
}

impl Default for TaskListQueryDto {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            lead_id: None,
            status: None,
            assigned_to: None,
        }
    }
}

/// 分页任务列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListResponseDto {
    pub tasks: Vec<Task>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// 沉睡线索清理参数
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StaleLeadsQueryDto {
    #[validate(range(min = 0, max = 3650))]
    pub days_inactive: Option<i64>,
}
