// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::funnel_service::Funnel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 漏斗查询时间范围（按线索创建时间）
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FunnelQueryDto {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// 漏斗响应
#[derive(Debug, Clone, Serialize)]
pub struct FunnelResponseDto {
    #[serde(flatten)]
    pub funnel: Funnel,
    pub period_start: Option<DateTime<Utc>>,
    pub period_end: Option<DateTime<Utc>>,
}
