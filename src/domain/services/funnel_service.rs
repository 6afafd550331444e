// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::LeadStage;
use crate::domain::repositories::lead_repository::LeadSummary;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// 漏斗中单个阶段的数据
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    pub stage: LeadStage,
    pub count: u64,
    pub total_value: f64,
    /// 到下一阶段的转化率（百分比）；最后一个阶段或本阶段为空时为 None
    pub conversion_rate: Option<f64>,
}

/// 销售漏斗
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Funnel {
    pub stages: Vec<FunnelStage>,
    pub total_leads: u64,
    pub total_value: f64,
    /// New → Won 的整体转化率（百分比）
    pub overall_conversion_rate: f64,
}

/// 线索统计概览
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadStats {
    pub total_leads: u64,
    pub by_stage: BTreeMap<String, u64>,
    pub by_source: BTreeMap<String, u64>,
    pub by_priority: BTreeMap<String, u64>,
    pub average_score: f64,
    pub total_estimated_value: f64,
}

/// 按管道顺序汇总漏斗数据
pub fn build_funnel(summaries: &[LeadSummary]) -> Funnel {
    let mut per_stage: HashMap<LeadStage, (u64, f64)> = HashMap::new();
    for summary in summaries {
        let entry = per_stage.entry(summary.stage).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += summary.estimated_value.unwrap_or(0.0);
    }

    let count_of = |stage: LeadStage| per_stage.get(&stage).map_or(0, |(count, _)| *count);

    let pipeline = LeadStage::PIPELINE;
    let stages = pipeline
        .iter()
        .enumerate()
        .map(|(idx, stage)| {
            let (count, total_value) = per_stage.get(stage).copied().unwrap_or((0, 0.0));
            let conversion_rate = match pipeline.get(idx + 1) {
                Some(next) if count > 0 => Some(count_of(*next) as f64 / count as f64 * 100.0),
                _ => None,
            };
            FunnelStage {
                stage: *stage,
                count,
                total_value,
                conversion_rate,
            }
        })
        .collect();

    let new_count = count_of(LeadStage::New);
    let overall_conversion_rate = if new_count > 0 {
        count_of(LeadStage::Won) as f64 / new_count as f64 * 100.0
    } else {
        0.0
    };

    Funnel {
        stages,
        total_leads: summaries.len() as u64,
        total_value: summaries.iter().filter_map(|s| s.estimated_value).sum(),
        overall_conversion_rate,
    }
}

/// 汇总线索统计，只列出实际出现过的分组
pub fn build_stats(summaries: &[LeadSummary]) -> LeadStats {
    let mut by_stage = BTreeMap::new();
    let mut by_source = BTreeMap::new();
    let mut by_priority = BTreeMap::new();

    for summary in summaries {
        *by_stage.entry(summary.stage.to_string()).or_insert(0) += 1;
        *by_source.entry(summary.source.to_string()).or_insert(0) += 1;
        *by_priority.entry(summary.priority.to_string()).or_insert(0) += 1;
    }

    let total_leads = summaries.len() as u64;
    let average_score = if total_leads > 0 {
        summaries.iter().map(|s| s.score as f64).sum::<f64>() / total_leads as f64
    } else {
        0.0
    };

    LeadStats {
        total_leads,
        by_stage,
        by_source,
        by_priority,
        average_score,
        total_estimated_value: summaries.iter().filter_map(|s| s.estimated_value).sum(),
    }
}
