// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{page_offset, UseCaseError};
use crate::application::dto::funnel_request::{FunnelQueryDto, FunnelResponseDto};
use crate::application::dto::lead_request::{
    total_pages, CreateLeadRequestDto, FollowUpQueryDto, ImportErrorDto, ImportLeadsRequestDto,
    ImportLeadsResponseDto, LeadListQueryDto, LeadListResponseDto, UpdateLeadRequestDto,
};
use crate::config::settings::{AutomationSettings, ScoringSettings};
use crate::domain::models::lead::{merge_tags, Lead, LeadSource, Priority};
use crate::domain::models::task::{Task, TaskType};
use crate::domain::repositories::lead_repository::{LeadQueryParams, LeadRepository};
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::services::funnel_service::{build_funnel, build_stats, LeadStats};
use crate::domain::services::lead_scorer::LeadScorer;
use crate::domain::services::task_automation_service::TaskAutomationService;
use crate::utils::validators::normalize_optional;
use chrono::Utc;
use metrics::{counter, histogram};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// 为新线索打分
///
/// 评分开启时写入分数与优先级，并把建议标签并入用户标签；
/// 关闭时保持 0 分、中等优先级，只保留用户标签。
pub fn score_new_lead(scorer: &LeadScorer, scoring_enabled: bool, mut lead: Lead) -> Lead {
    if !scoring_enabled {
        lead.score = 0;
        lead.priority = Priority::Medium;
        return lead;
    }

    let assessment = scorer.assess(&lead);
    lead.score = assessment.score;
    lead.priority = assessment.priority;
    lead.tags = merge_tags(std::mem::take(&mut lead.tags), assessment.tags);
    lead
}

/// 记录线索创建指标
pub fn record_lead_created(origin: &'static str, lead: &Lead) {
    counter!("leads_created_total", "origin" => origin).increment(1);
    histogram!("lead_score").record(f64::from(lead.score));
}

/// 线索用例
///
/// 负责线索的增删改查、批量导入、统计与漏斗，
/// 阶段变化时委托自动化服务生成跟进任务。
pub struct LeadUseCase<LR: LeadRepository, TR: TaskRepository> {
    lead_repo: Arc<LR>,
    automation: TaskAutomationService<LR, TR>,
    scorer: LeadScorer,
    scoring_enabled: bool,
    automation_enabled: bool,
    default_follow_up_days: i64,
}

impl<LR: LeadRepository, TR: TaskRepository> LeadUseCase<LR, TR> {
    pub fn new(
        lead_repo: Arc<LR>,
        task_repo: Arc<TR>,
        scoring: &ScoringSettings,
        automation: &AutomationSettings,
    ) -> Self {
        Self {
            automation: TaskAutomationService::new(lead_repo.clone(), task_repo),
            lead_repo,
            scorer: LeadScorer::default(),
            scoring_enabled: scoring.enabled,
            automation_enabled: automation.enabled,
            default_follow_up_days: automation.default_follow_up_days,
        }
    }

    /// 创建线索
    pub async fn create_lead(&self, dto: CreateLeadRequestDto) -> Result<Lead, UseCaseError> {
        dto.validate()?;

        let lead = score_new_lead(&self.scorer, self.scoring_enabled, dto.into_lead());
        let lead = self.lead_repo.create(&lead).await?;

        record_lead_created("api", &lead);
        info!(lead_id = %lead.id, score = lead.score, priority = %lead.priority, "Created lead");

        Ok(lead)
    }

    /// 分页列出线索
    pub async fn list_leads(
        &self,
        query: LeadListQueryDto,
    ) -> Result<LeadListResponseDto, UseCaseError> {
        query.validate()?;

        let params = LeadQueryParams {
            stage: query.stage,
            source: query.source,
            search: normalize_optional(query.search),
            limit: query.page_size,
            offset: page_offset(query.page, query.page_size),
        };
        let (leads, total) = self.lead_repo.query(params).await?;

        Ok(LeadListResponseDto {
            leads,
            total,
            page: query.page,
            page_size: query.page_size,
            total_pages: total_pages(total, query.page_size),
        })
    }

    pub async fn get_lead(&self, id: Uuid) -> Result<Lead, UseCaseError> {
        self.lead_repo
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::NotFound("Lead"))
    }

    /// 更新线索
    ///
    /// 阶段真正发生变化且自动化开启时，持久化之后再生成阶段任务。
    pub async fn update_lead(
        &self,
        id: Uuid,
        dto: UpdateLeadRequestDto,
    ) -> Result<Lead, UseCaseError> {
        dto.validate()?;

        let mut lead = self.get_lead(id).await?;
        let now = Utc::now();

        if let Some(name) = dto.name {
            lead.name = name;
        }
        let stage_changed = match dto.stage {
            Some(stage) => lead.move_to_stage(stage, now),
            None => false,
        };
        if let Some(priority) = dto.priority {
            lead.priority = priority;
        }
        if let Some(contact_info) = dto.contact_info {
            lead.contact_info = contact_info;
        }
        if let Some(tags) = dto.tags {
            lead.set_tags(tags);
        }
        if dto.product_interest.is_some() {
            lead.product_interest = dto.product_interest;
        }
        if dto.estimated_value.is_some() {
            lead.estimated_value = dto.estimated_value;
        }
        if dto.notes.is_some() {
            lead.notes = dto.notes;
        }
        if dto.assigned_to.is_some() {
            lead.assigned_to = dto.assigned_to;
        }
        lead.updated_at = now;

        let lead = self.lead_repo.update(&lead).await?;

        if stage_changed && self.automation_enabled {
            self.automation
                .create_stage_transition_tasks(lead.id, lead.stage)
                .await?;
        }

        Ok(lead)
    }

    /// 删除线索及其全部任务
    pub async fn delete_lead(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.lead_repo.delete(id).await?;
        info!(lead_id = %id, "Deleted lead");
        Ok(())
    }

    /// 批量导入线索
    ///
    /// 所有记录统一使用请求中的来源；每条记录独立校验、评分和写入。
    pub async fn import_leads(
        &self,
        dto: ImportLeadsRequestDto,
    ) -> Result<ImportLeadsResponseDto, UseCaseError> {
        dto.validate()?;

        let total = dto.leads.len();
        let mut successful = 0;
        let mut errors = Vec::new();

        for (index, entry) in dto.leads.into_iter().enumerate() {
            let name = entry.name.clone();
            match self.import_one(entry, dto.source).await {
                Ok(_) => successful += 1,
                Err(e) => {
                    warn!(index, name = %name, "Failed to import lead: {}", e);
                    errors.push(ImportErrorDto {
                        index,
                        name,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(total, successful, failed = errors.len(), "Lead import finished");

        Ok(ImportLeadsResponseDto {
            total,
            successful,
            failed: errors.len(),
            errors,
        })
    }

    async fn import_one(
        &self,
        entry: CreateLeadRequestDto,
        source: LeadSource,
    ) -> Result<Lead, UseCaseError> {
        entry.validate()?;

        let mut lead = entry.into_lead();
        lead.source = source;
        let lead = score_new_lead(&self.scorer, self.scoring_enabled, lead);
        let lead = self.lead_repo.create(&lead).await?;

        record_lead_created("import", &lead);
        Ok(lead)
    }

    /// 线索统计概览
    pub async fn lead_stats(&self) -> Result<LeadStats, UseCaseError> {
        let summaries = self.lead_repo.summaries(None, None).await?;
        Ok(build_stats(&summaries))
    }

    /// 按创建时间区间统计销售漏斗
    pub async fn funnel(&self, query: FunnelQueryDto) -> Result<FunnelResponseDto, UseCaseError> {
        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(UseCaseError::Validation(
                    "start_date must not be later than end_date".to_string(),
                ));
            }
        }

        let summaries = self
            .lead_repo
            .summaries(query.start_date, query.end_date)
            .await?;

        Ok(FunnelResponseDto {
            funnel: build_funnel(&summaries),
            period_start: query.start_date,
            period_end: query.end_date,
        })
    }

    /// 为线索手动创建跟进任务，缺省参数取配置值
    pub async fn follow_up(&self, id: Uuid, query: FollowUpQueryDto) -> Result<Task, UseCaseError> {
        query.validate()?;

        let task = self
            .automation
            .create_follow_up_task(
                id,
                query.days.unwrap_or(self.default_follow_up_days),
                query.task_type.unwrap_or(TaskType::FollowUp),
                query.priority.unwrap_or(Priority::Medium),
            )
            .await?;

        Ok(task)
    }
}

#[cfg(test)]
#[path = "lead_use_case_test.rs"]
mod tests;
