// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{page_offset, UseCaseError};
use crate::application::dto::lead_request::total_pages;
use crate::application::dto::task_request::{
    CreateTaskRequestDto, StaleLeadsQueryDto, TaskListQueryDto, TaskListResponseDto,
    UpdateTaskRequestDto,
};
use crate::config::settings::AutomationSettings;
use crate::domain::models::task::Task;
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::domain::repositories::task_repository::{TaskQueryParams, TaskRepository};
use crate::domain::services::task_automation_service::TaskAutomationService;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 任务用例
///
/// 任务的增删改查，以及到期、提醒和沉睡线索三类自动化扫描入口。
pub struct TaskUseCase<LR: LeadRepository, TR: TaskRepository> {
    lead_repo: Arc<LR>,
    task_repo: Arc<TR>,
    automation: TaskAutomationService<LR, TR>,
    stale_after_days: i64,
}

impl<LR: LeadRepository, TR: TaskRepository> TaskUseCase<LR, TR> {
    pub fn new(lead_repo: Arc<LR>, task_repo: Arc<TR>, settings: &AutomationSettings) -> Self {
        Self {
            automation: TaskAutomationService::new(lead_repo.clone(), task_repo.clone()),
            lead_repo,
            task_repo,
            stale_after_days: settings.stale_after_days,
        }
    }

    /// 创建任务，所属线索必须存在
    pub async fn create_task(&self, dto: CreateTaskRequestDto) -> Result<Task, UseCaseError> {
        dto.validate()?;

        if self.lead_repo.find_by_id(dto.lead_id).await?.is_none() {
            return Err(UseCaseError::NotFound("Lead"));
        }

        let task = dto.into_task();
        task.validate_schedule()?;

        let task = self.task_repo.create(&task).await?;
        info!(task_id = %task.id, lead_id = %task.lead_id, "Created task");
        Ok(task)
    }

    /// 分页列出任务，按截止时间升序（无截止时间的排在最后）
    pub async fn list_tasks(
        &self,
        query: TaskListQueryDto,
    ) -> Result<TaskListResponseDto, UseCaseError> {
        query.validate()?;

        let params = TaskQueryParams {
            lead_id: query.lead_id,
            status: query.status,
            assigned_to: query.assigned_to,
            limit: query.page_size,
            offset: page_offset(query.page, query.page_size),
        };
        let (tasks, total) = self.task_repo.query(params).await?;

        Ok(TaskListResponseDto {
            tasks,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: total_pages(total, query.page_size),
        })
    }

    pub async fn get_task(&self, id: Uuid) -> Result<Task, UseCaseError> {
        self.task_repo
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::NotFound("Task"))
    }

    /// 更新任务
    ///
    /// 首次完成时记录完成时间与完成人；修改后重新校验提醒时间。
    pub async fn update_task(
        &self,
        id: Uuid,
        dto: UpdateTaskRequestDto,
    ) -> Result<Task, UseCaseError> {
        dto.validate()?;

        let mut task = self.get_task(id).await?;
        let now = Utc::now();

        if let Some(title) = dto.title {
            task.title = title;
        }
        if dto.description.is_some() {
            task.description = dto.description;
        }
        if let Some(task_type) = dto.task_type {
            task.task_type = task_type;
        }
        if let Some(priority) = dto.priority {
            task.priority = priority;
        }
        if dto.assigned_to.is_some() {
            task.assigned_to = dto.assigned_to;
        }
        if dto.due_date.is_some() {
            task.due_date = dto.due_date;
        }
        if dto.reminder_at.is_some() {
            task.reminder_at = dto.reminder_at;
        }
        if let Some(status) = dto.status {
            task.set_status(status, dto.completed_by, now);
        }
        task.validate_schedule()?;
        task.updated_at = now;

        Ok(self.task_repo.update(&task).await?)
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.task_repo.delete(id).await?;
        Ok(())
    }

    pub async fn overdue_tasks(&self) -> Result<Vec<Task>, UseCaseError> {
        Ok(self.automation.get_overdue_tasks().await?)
    }

    pub async fn tasks_needing_reminder(&self) -> Result<Vec<Task>, UseCaseError> {
        Ok(self.automation.get_tasks_needing_reminder().await?)
    }

    /// 沉睡线索清理，缺省天数取配置值
    pub async fn sweep_stale_leads(
        &self,
        query: StaleLeadsQueryDto,
    ) -> Result<Vec<Task>, UseCaseError> {
        query.validate()?;

        let days = query.days_inactive.unwrap_or(self.stale_after_days);
        Ok(self.automation.auto_create_stale_lead_tasks(days).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::lead::{Lead, LeadSource};
    use crate::domain::models::task::{TaskStatus, TaskType};
    use crate::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
    use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
    use chrono::Duration;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;

    async fn setup() -> (
        TaskUseCase<LeadRepositoryImpl, TaskRepositoryImpl>,
        Arc<LeadRepositoryImpl>,
    ) {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let db = Arc::new(db);

        let lead_repo = Arc::new(LeadRepositoryImpl::new(db.clone()));
        let task_repo = Arc::new(TaskRepositoryImpl::new(db));
        let settings = AutomationSettings {
            enabled: true,
            default_follow_up_days: 3,
            stale_after_days: 7,
        };

        (
            TaskUseCase::new(lead_repo.clone(), task_repo, &settings),
            lead_repo,
        )
    }

    fn request(lead_id: Uuid) -> CreateTaskRequestDto {
        CreateTaskRequestDto {
            lead_id,
            title: "Call back".to_string(),
            description: None,
            task_type: TaskType::Call,
            priority: Default::default(),
            assigned_to: None,
            due_date: None,
            reminder_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_task_requires_existing_lead() {
        let (use_case, _) = setup().await;

        let result = use_case.create_task(request(Uuid::new_v4())).await;
        assert!(matches!(result, Err(UseCaseError::NotFound("Lead"))));
    }

    #[tokio::test]
    async fn test_create_task_rejects_reminder_after_due() {
        let (use_case, lead_repo) = setup().await;
        let lead = lead_repo.create(&Lead::new("Ada", LeadSource::Direct)).await.unwrap();

        let due = Utc::now() + Duration::days(1);
        let mut dto = request(lead.id);
        dto.due_date = Some(due);
        dto.reminder_at = Some(due);

        let result = use_case.create_task(dto).await;
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn test_completion_is_recorded_once() {
        let (use_case, lead_repo) = setup().await;
        let lead = lead_repo.create(&Lead::new("Ada", LeadSource::Direct)).await.unwrap();
        let task = use_case.create_task(request(lead.id)).await.unwrap();

        let first_user = Uuid::new_v4();
        let completed = use_case
            .update_task(
                task.id,
                UpdateTaskRequestDto {
                    status: Some(TaskStatus::Completed),
                    completed_by: Some(first_user),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(completed.completed_by, Some(first_user));
        let completed_at = completed.completed_at.unwrap();

        let again = use_case
            .update_task(
                task.id,
                UpdateTaskRequestDto {
                    status: Some(TaskStatus::Completed),
                    completed_by: Some(Uuid::new_v4()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(again.completed_by, Some(first_user));
        assert_eq!(again.completed_at, Some(completed_at));
    }

    #[tokio::test]
    async fn test_update_rechecks_reminder_invariant() {
        let (use_case, lead_repo) = setup().await;
        let lead = lead_repo.create(&Lead::new("Ada", LeadSource::Direct)).await.unwrap();

        let due = Utc::now() + Duration::days(2);
        let mut dto = request(lead.id);
        dto.due_date = Some(due);
        dto.reminder_at = Some(due - Duration::hours(2));
        let task = use_case.create_task(dto).await.unwrap();

        let result = use_case
            .update_task(
                task.id,
                UpdateTaskRequestDto {
                    due_date: Some(due - Duration::days(1)),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unknown_task_is_not_found() {
        let (use_case, _) = setup().await;

        assert!(matches!(
            use_case.get_task(Uuid::new_v4()).await,
            Err(UseCaseError::NotFound("Task"))
        ));
    }

    #[tokio::test]
    async fn test_stale_sweep_uses_configured_threshold() {
        let (use_case, lead_repo) = setup().await;
        let mut lead = Lead::new("Dormant", LeadSource::Direct);
        lead.updated_at = Utc::now() - Duration::days(8);
        lead_repo.create(&lead).await.unwrap();

        let created = use_case
            .sweep_stale_leads(StaleLeadsQueryDto::default())
            .await
            .unwrap();
        assert_eq!(created.len(), 1);

        let again = use_case
            .sweep_stale_leads(StaleLeadsQueryDto::default())
            .await
            .unwrap();
        assert!(again.is_empty());
    }
}
