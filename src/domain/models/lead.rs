// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 联系方式
///
/// 所有字段均可选，以 JSON 形式整体存储在线索记录中。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl ContactInfo {
    /// 邮箱、电话、公司、职位是否全部填写
    pub fn is_complete(&self) -> bool {
        is_present(&self.email)
            && is_present(&self.phone)
            && is_present(&self.company)
            && is_present(&self.title)
    }
}

/// 字段存在且非空
pub fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// 线索来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    WebForm,
    GoogleAds,
    MetaAds,
    TiktokAds,
    LandingPage,
    Event,
    Import,
    Referral,
    Direct,
    #[default]
    Other,
}

impl LeadSource {
    pub const ALL: [LeadSource; 10] = [
        LeadSource::WebForm,
        LeadSource::GoogleAds,
        LeadSource::MetaAds,
        LeadSource::TiktokAds,
        LeadSource::LandingPage,
        LeadSource::Event,
        LeadSource::Import,
        LeadSource::Referral,
        LeadSource::Direct,
        LeadSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::WebForm => "web_form",
            LeadSource::GoogleAds => "google_ads",
            LeadSource::MetaAds => "meta_ads",
            LeadSource::TiktokAds => "tiktok_ads",
            LeadSource::LandingPage => "landing_page",
            LeadSource::Event => "event",
            LeadSource::Import => "import",
            LeadSource::Referral => "referral",
            LeadSource::Direct => "direct",
            LeadSource::Other => "other",
        }
    }

    /// 付费广告渠道
    pub fn is_paid(&self) -> bool {
        matches!(
            self,
            LeadSource::GoogleAds | LeadSource::MetaAds | LeadSource::TiktokAds
        )
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or(())
    }
}

/// 销售管道阶段
///
/// 声明顺序即管道顺序：
/// New → Contacted → Qualified → Proposal → Negotiation → Won/Lost
///
/// 阶段之间允许任意跳转，顺序只用于漏斗统计和展示。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum LeadStage {
    #[default]
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
}

impl LeadStage {
    /// 按管道顺序排列的全部阶段
    pub const PIPELINE: [LeadStage; 7] = [
        LeadStage::New,
        LeadStage::Contacted,
        LeadStage::Qualified,
        LeadStage::Proposal,
        LeadStage::Negotiation,
        LeadStage::Won,
        LeadStage::Lost,
    ];

    /// 仍处于早期跟进的阶段，长期无更新即视为沉睡线索
    pub const EARLY: [LeadStage; 3] = [LeadStage::New, LeadStage::Contacted, LeadStage::Qualified];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStage::New => "new",
            LeadStage::Contacted => "contacted",
            LeadStage::Qualified => "qualified",
            LeadStage::Proposal => "proposal",
            LeadStage::Negotiation => "negotiation",
            LeadStage::Won => "won",
            LeadStage::Lost => "lost",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStage::Won | LeadStage::Lost)
    }

    pub fn is_early(&self) -> bool {
        LeadStage::EARLY.contains(self)
    }
}

impl fmt::Display for LeadStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStage {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadStage::PIPELINE
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or(())
    }
}

/// 优先级（线索与任务共用）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or(())
    }
}

/// 线索实体
///
/// 表示销售管道中的一个潜在客户。评分、标签和优先级在创建时
/// 由评分引擎一次性计算，之后只随用户修改而变化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    /// 线索唯一标识符
    pub id: Uuid,
    /// 线索名称（通常为联系人姓名）
    pub name: String,
    /// 获客渠道
    pub source: LeadSource,
    /// 当前管道阶段
    pub stage: LeadStage,
    /// 优先级
    pub priority: Priority,
    /// 评分，始终位于 0..=100
    pub score: i32,
    /// 联系方式
    pub contact_info: ContactInfo,
    /// 标签集合，按字典序保存
    pub tags: Vec<String>,
    pub product_interest: Option<String>,
    /// 预估成交金额，非负
    pub estimated_value: Option<f64>,
    pub notes: Option<String>,
    pub utm_source: Option<String>,
    pub utm_medium: Option<String>,
    pub utm_campaign: Option<String>,
    pub referrer_url: Option<String>,
    /// 负责人
    pub assigned_to: Option<Uuid>,
    /// 创建时间，只写一次
    pub created_at: DateTime<Utc>,
    /// 每次修改都会刷新
    pub updated_at: DateTime<Utc>,
    /// 首次进入 Contacted 阶段的时间
    pub contacted_at: Option<DateTime<Utc>>,
    /// 首次进入 Won/Lost 阶段的时间
    pub closed_at: Option<DateTime<Utc>>,
}

impl Lead {
    /// 创建一个处于 New 阶段的新线索
    pub fn new(name: impl Into<String>, source: LeadSource) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            source,
            stage: LeadStage::New,
            priority: Priority::Medium,
            score: 0,
            contact_info: ContactInfo::default(),
            tags: Vec::new(),
            product_interest: None,
            estimated_value: None,
            notes: None,
            utm_source: None,
            utm_medium: None,
            utm_campaign: None,
            referrer_url: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
            contacted_at: None,
            closed_at: None,
        }
    }

    /// 切换管道阶段
    ///
    /// 首次进入 Contacted 时记录 `contacted_at`，首次进入 Won/Lost 时记录
    /// `closed_at`，两者一经写入不再覆盖。返回阶段是否真的发生了变化。
    pub fn move_to_stage(&mut self, stage: LeadStage, now: DateTime<Utc>) -> bool {
        let changed = self.stage != stage;
        self.stage = stage;

        if stage == LeadStage::Contacted && self.contacted_at.is_none() {
            self.contacted_at = Some(now);
        }
        if stage.is_closed() && self.closed_at.is_none() {
            self.closed_at = Some(now);
        }

        changed
    }

    /// 用给定集合替换标签，去重并保持稳定顺序
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = merge_tags(tags, std::iter::empty::<String>());
    }
}

/// 合并两组标签（并集），去除空白标签，结果按字典序排列
pub fn merge_tags<A, B, S, T>(user_tags: A, suggested: B) -> Vec<String>
where
    A: IntoIterator<Item = S>,
    B: IntoIterator<Item = T>,
    S: Into<String>,
    T: Into<String>,
{
    user_tags
        .into_iter()
        .map(Into::into)
        .chain(suggested.into_iter().map(Into::into))
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_stage_round_trips_through_str() {
        for stage in LeadStage::PIPELINE {
            assert_eq!(stage.as_str().parse::<LeadStage>(), Ok(stage));
        }
        assert!("archived".parse::<LeadStage>().is_err());
    }

    #[test]
    fn test_contacted_at_is_set_only_once() {
        let mut lead = Lead::new("Ada", LeadSource::Direct);
        let first = Utc::now();
        let later = first + Duration::days(3);

        assert!(lead.move_to_stage(LeadStage::Contacted, first));
        lead.move_to_stage(LeadStage::Qualified, later);
        lead.move_to_stage(LeadStage::Contacted, later);

        assert_eq!(lead.contacted_at, Some(first));
    }

    #[test]
    fn test_closed_at_is_set_on_first_close() {
        let mut lead = Lead::new("Ada", LeadSource::Direct);
        let won_at = Utc::now();

        lead.move_to_stage(LeadStage::Won, won_at);
        lead.move_to_stage(LeadStage::Lost, won_at + Duration::hours(1));

        assert_eq!(lead.closed_at, Some(won_at));
        assert!(lead.contacted_at.is_none());
    }

    #[test]
    fn test_same_stage_is_not_a_change() {
        let mut lead = Lead::new("Ada", LeadSource::Direct);
        assert!(!lead.move_to_stage(LeadStage::New, Utc::now()));
    }

    #[test]
    fn test_merge_tags_collapses_duplicates() {
        let merged = merge_tags(vec!["vip", "hot-lead", " vip "], vec!["hot-lead", "smb"]);
        assert_eq!(merged, vec!["hot-lead", "smb", "vip"]);
    }
}
