// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::task_planner::TaskSpec;
use crate::domain::models::lead::Lead;
use crate::domain::models::task::{Task, TaskStatus};
use chrono::{DateTime, Duration, Utc};

/// 提醒时间相对截止时间提前的小时数
pub const REMINDER_LEAD_HOURS: i64 = 2;

/// 由“几天后”计算截止时间与提醒时间
pub fn schedule(days_from_now: i64, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let due = now + Duration::days(days_from_now);
    (due, due - Duration::hours(REMINDER_LEAD_HOURS))
}

/// 待处理且已过截止时间
pub fn is_overdue(task: &Task, now: DateTime<Utc>) -> bool {
    task.status == TaskStatus::Pending && task.due_date.is_some_and(|due| due < now)
}

/// 待处理且已到提醒时间
pub fn needs_reminder(task: &Task, now: DateTime<Utc>) -> bool {
    task.status == TaskStatus::Pending && task.reminder_at.is_some_and(|at| at <= now)
}

/// 早期阶段的线索在阈值天数内没有任何更新
pub fn is_stale(lead: &Lead, threshold_days: i64, now: DateTime<Utc>) -> bool {
    lead.stage.is_early() && lead.updated_at < stale_cutoff(threshold_days, now)
}

/// 沉睡判定的时间分界点
pub fn stale_cutoff(threshold_days: i64, now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(threshold_days)
}

/// 将任务描述落成一个待处理任务，负责人继承自线索
pub fn materialize(spec: &TaskSpec, lead: &Lead, now: DateTime<Utc>) -> Task {
    let (due, reminder) = schedule(spec.days_from_now, now);

    let mut task = Task::new(lead.id, spec.title.clone(), spec.task_type);
    task.description = Some(spec.description.clone());
    task.priority = spec.priority;
    task.assigned_to = lead.assigned_to;
    task.due_date = Some(due);
    task.reminder_at = Some(reminder);
    task.created_at = now;
    task.updated_at = now;
    task
}
