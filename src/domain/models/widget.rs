// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_WIDGET_TITLE: &str = "Get in Touch";
pub const DEFAULT_WIDGET_DESCRIPTION: &str =
    "Fill out the form below and we'll get back to you soon.";
pub const DEFAULT_SUBMIT_TEXT: &str = "Submit";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch soon.";
pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";
pub const DEFAULT_BUTTON_POSITION: &str = "bottom-right";
pub const DEFAULT_AUTO_OPEN_DELAY: i32 = 5;

/// 默认表单字段
pub fn default_fields() -> Vec<String> {
    ["name", "email", "phone", "company", "message"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// 可嵌入的网页表单组件
///
/// `widget_id` 是公开标识，写在嵌入代码里；`api_key` 只在创建时返回一次。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Widget {
    pub id: Uuid,
    pub name: String,
    /// 公开ID，形如 `wgt_xxxxxxxxxxxxxxxx`
    pub widget_id: String,
    /// 私有密钥，形如 `sk_...`
    pub api_key: String,
    pub title: String,
    pub description: Option<String>,
    pub submit_button_text: String,
    pub success_message: String,
    pub fields: Vec<String>,
    pub primary_color: String,
    pub button_position: String,
    pub auto_open: bool,
    /// 自动弹出延迟（秒）
    pub auto_open_delay: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Widget {
    /// 以默认外观创建组件，并生成公开ID与密钥
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            widget_id: generate_widget_id(),
            api_key: generate_api_key(),
            title: DEFAULT_WIDGET_TITLE.to_string(),
            description: Some(DEFAULT_WIDGET_DESCRIPTION.to_string()),
            submit_button_text: DEFAULT_SUBMIT_TEXT.to_string(),
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            fields: default_fields(),
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
            button_position: DEFAULT_BUTTON_POSITION.to_string(),
            auto_open: false,
            auto_open_delay: DEFAULT_AUTO_OPEN_DELAY,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 生成嵌入代码
    pub fn embed_code(&self, base_url: &str) -> String {
        format!(
            r#"<script src="{}/static/widget.js" data-widget-id="{}"></script>"#,
            base_url.trim_end_matches('/'),
            self.widget_id
        )
    }
}

fn url_safe_token(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// 生成公开组件ID
pub fn generate_widget_id() -> String {
    format!("wgt_{}", url_safe_token(12))
}

/// 生成组件密钥
pub fn generate_api_key() -> String {
    format!("sk_{}", url_safe_token(32))
}
