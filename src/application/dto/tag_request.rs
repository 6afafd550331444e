// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::validators::HEX_COLOR;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建标签请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateTagRequestDto {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(regex(path = *HEX_COLOR))]
    pub color: Option<String>,
    pub description: Option<String>,
}
