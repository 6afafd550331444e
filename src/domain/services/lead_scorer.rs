// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{is_present, Lead, LeadSource, Priority};
use std::collections::{BTreeSet, HashMap};

/// 评分上限
pub const MAX_SCORE: i32 = 100;

const CONTACT_SUBTOTAL_CAP: i32 = 25;

/// 来源权重表
///
/// 不可变配置对象，未登记的来源走显式的兜底权重。
#[derive(Debug, Clone)]
pub struct ScoringWeights {
    source_weights: HashMap<LeadSource, i32>,
    unknown_source_weight: i32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        let source_weights = HashMap::from([
            (LeadSource::Referral, 30),
            (LeadSource::Event, 25),
            (LeadSource::WebForm, 20),
            (LeadSource::LandingPage, 18),
            (LeadSource::GoogleAds, 15),
            (LeadSource::Direct, 15),
            (LeadSource::MetaAds, 12),
            (LeadSource::TiktokAds, 10),
            (LeadSource::Import, 5),
            (LeadSource::Other, 5),
        ]);

        Self {
            source_weights,
            unknown_source_weight: 5,
        }
    }
}

impl ScoringWeights {
    /// 使用自定义权重表创建
    pub fn new(source_weights: HashMap<LeadSource, i32>, unknown_source_weight: i32) -> Self {
        Self {
            source_weights,
            unknown_source_weight,
        }
    }

    /// 查询来源权重
    pub fn source_weight(&self, source: LeadSource) -> i32 {
        match self.source_weights.get(&source) {
            Some(weight) => *weight,
            None => self.unknown_source_weight,
        }
    }
}

/// 一次评估的结果，三者由同一版本的公式得出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadAssessment {
    pub score: i32,
    pub tags: BTreeSet<String>,
    pub priority: Priority,
}

/// 线索评分引擎
///
/// 纯函数式的规则引擎：根据来源、联系方式完整度、预估金额、
/// 产品意向和 UTM 追踪信息计算 0..=100 的分数，并据此给出标签与优先级建议。
#[derive(Debug, Clone, Default)]
pub struct LeadScorer {
    weights: ScoringWeights,
}

impl LeadScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// 计算线索评分
    ///
    /// # 参数
    ///
    /// * `lead` - 待评分的线索快照
    ///
    /// # 返回值
    ///
    /// 位于 `0..=100` 的整数分数
    pub fn calculate_score(&self, lead: &Lead) -> i32 {
        let contact = &lead.contact_info;

        let source = self.weights.source_weight(lead.source);

        let mut completeness = 0;
        if is_present(&contact.email) {
            completeness += 10;
        }
        if is_present(&contact.phone) {
            completeness += 8;
        }
        if is_present(&contact.company) {
            completeness += 5;
        }
        if is_present(&contact.title) {
            completeness += 2;
        }
        let completeness = completeness.min(CONTACT_SUBTOTAL_CAP);

        let value = match lead.estimated_value {
            Some(v) if v >= 100_000.0 => 20,
            Some(v) if v >= 50_000.0 => 15,
            Some(v) if v >= 10_000.0 => 10,
            Some(_) => 5,
            None => 0,
        };

        let interest = if is_present(&lead.product_interest) { 10 } else { 0 };

        let mut utm = 0;
        if is_present(&lead.utm_campaign) {
            utm += 5;
        }
        if is_present(&lead.utm_source) {
            utm += 3;
        }
        if is_present(&lead.utm_medium) {
            utm += 2;
        }

        // 公司信息在完整度中已计一次，这里再单独加分
        let company = if is_present(&contact.company) { 5 } else { 0 };

        (source + completeness + value + interest + utm + company).clamp(0, MAX_SCORE)
    }

    /// 生成标签建议
    ///
    /// 分数档位标签（hot-lead / warm-lead / cold-lead）总是恰好出现一个，
    /// 依据的是 `lead.score` 当前的值。
    pub fn suggest_tags(&self, lead: &Lead) -> BTreeSet<String> {
        let mut tags = BTreeSet::new();

        if let Some(value) = lead.estimated_value {
            let tier = if value >= 100_000.0 {
                "enterprise"
            } else if value >= 50_000.0 {
                "mid-market"
            } else {
                "smb"
            };
            tags.insert(tier.to_string());
        }

        let temperature = if lead.score >= 75 {
            "hot-lead"
        } else if lead.score >= 50 {
            "warm-lead"
        } else {
            "cold-lead"
        };
        tags.insert(temperature.to_string());

        if matches!(lead.source, LeadSource::Referral | LeadSource::Event) {
            tags.insert("high-quality".to_string());
        }
        if lead.source.is_paid() {
            tags.insert("paid-traffic".to_string());
        }
        if lead.contact_info.is_complete() {
            tags.insert("complete-profile".to_string());
        }

        if let Some(interest) = lead.product_interest.as_deref() {
            let interest = interest.to_lowercase();
            if interest.contains("enterprise") {
                tags.insert("enterprise-interest".to_string());
            }
            if interest.contains("demo") {
                tags.insert("demo-request".to_string());
            }
        }

        tags
    }

    /// 根据 `lead.score` 给出优先级建议
    pub fn suggest_priority(&self, lead: &Lead) -> Priority {
        priority_for_score(lead.score)
    }

    /// 依次计算分数、标签和优先级
    ///
    /// 标签和优先级基于携带新分数的快照计算，保证三者一致。
    pub fn assess(&self, lead: &Lead) -> LeadAssessment {
        let score = self.calculate_score(lead);

        let mut snapshot = lead.clone();
        snapshot.score = score;

        LeadAssessment {
            score,
            tags: self.suggest_tags(&snapshot),
            priority: self.suggest_priority(&snapshot),
        }
    }
}

/// 分数到优先级的映射：80/60/40 三个断点
pub fn priority_for_score(score: i32) -> Priority {
    match score {
        s if s >= 80 => Priority::Urgent,
        s if s >= 60 => Priority::High,
        s if s >= 40 => Priority::Medium,
        _ => Priority::Low,
    }
}

#[cfg(test)]
#[path = "lead_scorer_test.rs"]
mod tests;
