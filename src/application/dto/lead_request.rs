// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{ContactInfo, Lead, LeadSource, LeadStage, Priority};
use crate::domain::models::task::TaskType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建线索请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateLeadRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub source: LeadSource,
    #[serde(default)]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub tags: Vec<String>,
    #[validate(length(max = 200))]
    pub product_interest: Option<String>,
    #[validate(range(min = 0.0))]
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    #[validate(length(max = 100))]
    pub utm_source: Option<String>,
    #[validate(length(max = 100))]
    pub utm_medium: Option<String>,
    #[validate(length(max = 100))]
    pub utm_campaign: Option<String>,
    #[validate(length(max = 500))]
    pub referrer_url: Option<String>,
}

impl CreateLeadRequestDto {
    /// 转换为待评分的新线索
    pub fn into_lead(self) -> Lead {
        let mut lead = Lead::new(self.name, self.source);
        lead.contact_info = self.contact_info;
        lead.set_tags(self.tags);
        lead.product_interest = self.product_interest;
        lead.estimated_value = self.estimated_value;
        lead.notes = self.notes;
        lead.utm_source = self.utm_source;
        lead.utm_medium = self.utm_medium;
        lead.utm_campaign = self.utm_campaign;
        lead.referrer_url = self.referrer_url;
        lead
    }
}

/// 更新线索请求DTO，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateLeadRequestDto {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub stage: Option<LeadStage>,
    pub priority: Option<Priority>,
    pub contact_info: Option<ContactInfo>,
    pub tags: Option<Vec<String>>,
    #[validate(length(max = 200))]
    pub product_interest: Option<String>,
    #[validate(range(min = 0.0))]
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub assigned_to: Option<Uuid>,
}

/// 批量导入请求DTO
///
/// 每条记录单独校验，失败记录不会影响其他记录
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct ImportLeadsRequestDto {
    #[validate(length(min = 1, max = 1000))]
    pub leads: Vec<CreateLeadRequestDto>,
    #[serde(default = "default_import_source")]
    pub source: LeadSource,
}

fn default_import_source() -> LeadSource {
    LeadSource::Import
}

/// 单条导入失败的记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportErrorDto {
    pub index: usize,
    pub name: String,
    pub error: String,
}

/// 批量导入结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportLeadsResponseDto {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub errors: Vec<ImportErrorDto>,
}

/// 线索列表查询参数
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LeadListQueryDto {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub page: u64,
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,
    pub stage: Option<LeadStage>,
    pub source: Option<LeadSource>,
    pub search: Option<String>,
}

impl Default for LeadListQueryDto {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            stage: None,
            source: None,
            search: None,
        }
    }
}

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_page_size() -> u64 {
    20
}

/// 分页线索列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadListResponseDto {
    pub leads: Vec<Lead>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// 手动跟进任务查询参数，缺省值由配置给出
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FollowUpQueryDto {
    #[validate(range(min = 0, max = 365))]
    pub days: Option<i64>,
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
}

/// 总页数
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
