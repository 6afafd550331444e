// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 默认标签颜色
pub const DEFAULT_TAG_COLOR: &str = "#6B7280";

/// 线索标签定义
///
/// 标签名全局唯一，线索上的标签按名称引用。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadTag {
    pub id: Uuid,
    /// 标签名，1..=50 个字符
    pub name: String,
    /// 十六进制颜色，形如 `#RRGGBB`
    pub color: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeadTag {
    pub fn new(name: impl Into<String>, color: Option<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            description,
            created_at: Utc::now(),
        }
    }
}
