// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::lead_use_case::{record_lead_created, score_new_lead};
use super::UseCaseError;
use crate::application::dto::widget_request::{
    CreateWidgetRequestDto, UpdateWidgetRequestDto, WidgetConfigResponseDto,
    WidgetCreatedResponseDto, WidgetListResponseDto, WidgetSubmissionDto,
    WidgetSubmissionResponseDto, WidgetUpdatedResponseDto,
};
use crate::config::settings::{ScoringSettings, WidgetSettings};
use crate::domain::models::lead::{ContactInfo, Lead, LeadSource};
use crate::domain::models::widget::Widget;
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::domain::repositories::widget_repository::WidgetRepository;
use crate::domain::services::lead_scorer::LeadScorer;
use crate::utils::validators::normalize_optional;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 组件用例
///
/// 管理可嵌入表单组件，并把公开提交转换为已评分的线索。
pub struct WidgetUseCase<WR: WidgetRepository, LR: LeadRepository> {
    widget_repo: Arc<WR>,
    lead_repo: Arc<LR>,
    scorer: LeadScorer,
    scoring_enabled: bool,
    embed_base_url: String,
}

impl<WR: WidgetRepository, LR: LeadRepository> WidgetUseCase<WR, LR> {
    pub fn new(
        widget_repo: Arc<WR>,
        lead_repo: Arc<LR>,
        scoring: &ScoringSettings,
        widget: &WidgetSettings,
    ) -> Self {
        Self {
            widget_repo,
            lead_repo,
            scorer: LeadScorer::default(),
            scoring_enabled: scoring.enabled,
            embed_base_url: widget.embed_base_url.clone(),
        }
    }

    /// 创建组件，密钥只在这一次返回
    pub async fn create_widget(
        &self,
        dto: CreateWidgetRequestDto,
    ) -> Result<WidgetCreatedResponseDto, UseCaseError> {
        dto.validate()?;

        let widget = self.widget_repo.create(&dto.into_widget()).await?;
        info!(widget_id = %widget.widget_id, "Created widget");

        Ok(WidgetCreatedResponseDto {
            embed_code: widget.embed_code(&self.embed_base_url),
            id: widget.id,
            widget_id: widget.widget_id,
            api_key: widget.api_key,
            name: widget.name,
        })
    }

    pub async fn list_widgets(&self) -> Result<WidgetListResponseDto, UseCaseError> {
        let widgets = self.widget_repo.list().await?;
        Ok(WidgetListResponseDto {
            widgets: widgets.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn update_widget(
        &self,
        id: Uuid,
        dto: UpdateWidgetRequestDto,
    ) -> Result<WidgetUpdatedResponseDto, UseCaseError> {
        dto.validate()?;

        let mut widget = self
            .widget_repo
            .find_by_id(id)
            .await?
            .ok_or(UseCaseError::NotFound("Widget"))?;

        apply_update(&mut widget, dto);
        widget.updated_at = Utc::now();

        let widget = self.widget_repo.update(&widget).await?;
        Ok(WidgetUpdatedResponseDto {
            id: widget.id,
            widget_id: widget.widget_id,
            name: widget.name,
        })
    }

    pub async fn delete_widget(&self, id: Uuid) -> Result<(), UseCaseError> {
        self.widget_repo.delete(id).await?;
        Ok(())
    }

    async fn active_widget(&self, widget_id: &str) -> Result<Widget, UseCaseError> {
        self.widget_repo
            .find_active_by_widget_id(widget_id)
            .await?
            .ok_or(UseCaseError::NotFound("Widget"))
    }

    /// 公开配置，仅对启用中的组件可见
    pub async fn widget_config(
        &self,
        widget_id: &str,
    ) -> Result<WidgetConfigResponseDto, UseCaseError> {
        Ok(self.active_widget(widget_id).await?.into())
    }

    /// 处理表单提交，生成一条 web_form 线索
    pub async fn submit(
        &self,
        widget_id: &str,
        dto: WidgetSubmissionDto,
    ) -> Result<WidgetSubmissionResponseDto, UseCaseError> {
        dto.validate()?;
        let widget = self.active_widget(widget_id).await?;

        let lead = submission_to_lead(&widget, dto);
        let lead = score_new_lead(&self.scorer, self.scoring_enabled, lead);
        let lead = self.lead_repo.create(&lead).await?;

        record_lead_created("widget", &lead);
        info!(lead_id = %lead.id, widget_id = %widget.widget_id, "Widget submission received");

        Ok(WidgetSubmissionResponseDto {
            success: true,
            message: widget.success_message,
            lead_id: lead.id,
        })
    }
}

fn apply_update(widget: &mut Widget, dto: UpdateWidgetRequestDto) {
    if let Some(name) = dto.name {
        widget.name = name;
    }
    if let Some(title) = dto.title {
        widget.title = title;
    }
    if dto.description.is_some() {
        widget.description = dto.description;
    }
    if let Some(text) = dto.submit_button_text {
        widget.submit_button_text = text;
    }
    if let Some(message) = dto.success_message {
        widget.success_message = message;
    }
    if let Some(fields) = dto.fields {
        widget.fields = fields;
    }
    if let Some(color) = dto.primary_color {
        widget.primary_color = color;
    }
    if let Some(position) = dto.button_position {
        widget.button_position = position;
    }
    if let Some(auto_open) = dto.auto_open {
        widget.auto_open = auto_open;
    }
    if let Some(delay) = dto.auto_open_delay {
        widget.auto_open_delay = delay;
    }
    if let Some(active) = dto.is_active {
        widget.is_active = active;
    }
}

/// 提交数据到线索的映射，来源固定为 web_form
fn submission_to_lead(widget: &Widget, dto: WidgetSubmissionDto) -> Lead {
    let mut lead = Lead::new(dto.name, LeadSource::WebForm);
    lead.contact_info = ContactInfo {
        email: normalize_optional(dto.email),
        phone: normalize_optional(dto.phone),
        company: normalize_optional(dto.company),
        ..Default::default()
    };
    lead.notes = normalize_optional(dto.message);
    lead.referrer_url = normalize_optional(dto.referrer).or(normalize_optional(dto.url));
    lead.utm_source = Some("widget".to_string());
    lead.utm_medium = Some(widget.widget_id.clone());
    lead
}
