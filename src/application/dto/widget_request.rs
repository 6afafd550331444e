// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::widget::{self, Widget};
use crate::utils::validators::HEX_COLOR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建组件请求DTO
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CreateWidgetRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default = "default_title")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default = "default_description")]
    pub description: Option<String>,
    #[serde(default = "default_submit_text")]
    #[validate(length(min = 1, max = 50))]
    pub submit_button_text: String,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default = "widget::default_fields")]
    pub fields: Vec<String>,
    #[serde(default = "default_primary_color")]
    #[validate(regex(path = *HEX_COLOR))]
    pub primary_color: String,
    #[serde(default = "default_button_position")]
    #[validate(length(min = 1, max = 20))]
    pub button_position: String,
    #[serde(default)]
    pub auto_open: bool,
    #[serde(default = "default_auto_open_delay")]
    #[validate(range(min = 0))]
    pub auto_open_delay: i32,
}

fn default_title() -> String {
    widget::DEFAULT_WIDGET_TITLE.to_string()
}

fn default_description() -> Option<String> {
    Some(widget::DEFAULT_WIDGET_DESCRIPTION.to_string())
}

fn default_submit_text() -> String {
    widget::DEFAULT_SUBMIT_TEXT.to_string()
}

fn default_success_message() -> String {
    widget::DEFAULT_SUCCESS_MESSAGE.to_string()
}

fn default_primary_color() -> String {
    widget::DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_button_position() -> String {
    widget::DEFAULT_BUTTON_POSITION.to_string()
}

fn default_auto_open_delay() -> i32 {
    widget::DEFAULT_AUTO_OPEN_DELAY
}

impl CreateWidgetRequestDto {
    pub fn into_widget(self) -> Widget {
        let mut widget = Widget::new(self.name);
        widget.title = self.title;
        widget.description = self.description;
        widget.submit_button_text = self.submit_button_text;
        widget.success_message = self.success_message;
        widget.fields = self.fields;
        widget.primary_color = self.primary_color;
        widget.button_position = self.button_position;
        widget.auto_open = self.auto_open;
        widget.auto_open_delay = self.auto_open_delay;
        widget
    }
}

/// 更新组件请求DTO，缺省字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UpdateWidgetRequestDto {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub submit_button_text: Option<String>,
    pub success_message: Option<String>,
    pub fields: Option<Vec<String>>,
    #[validate(regex(path = *HEX_COLOR))]
    pub primary_color: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub button_position: Option<String>,
    pub auto_open: Option<bool>,
    #[validate(range(min = 0))]
    pub auto_open_delay: Option<i32>,
    pub is_active: Option<bool>,
}

/// 创建组件的返回，密钥只在此处出现
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetCreatedResponseDto {
    pub id: Uuid,
    pub widget_id: String,
    pub api_key: String,
    pub name: String,
    pub embed_code: String,
}

/// 组件列表中的条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub widget_id: String,
    pub title: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Widget> for WidgetSummaryDto {
    fn from(widget: Widget) -> Self {
        Self {
            id: widget.id,
            name: widget.name,
            widget_id: widget.widget_id,
            title: widget.title,
            is_active: widget.is_active,
            created_at: widget.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetListResponseDto {
    pub widgets: Vec<WidgetSummaryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetUpdatedResponseDto {
    pub id: Uuid,
    pub widget_id: String,
    pub name: String,
}

/// 组件公开配置，不含密钥
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfigResponseDto {
    pub widget_id: String,
    pub title: String,
    pub description: Option<String>,
    pub submit_button_text: String,
    pub success_message: String,
    pub fields: Vec<String>,
    pub primary_color: String,
    pub button_position: String,
    pub auto_open: bool,
    pub auto_open_delay: i32,
}

impl From<Widget> for WidgetConfigResponseDto {
    fn from(widget: Widget) -> Self {
        Self {
            widget_id: widget.widget_id,
            title: widget.title,
            description: widget.description,
            submit_button_text: widget.submit_button_text,
            success_message: widget.success_message,
            fields: widget.fields,
            primary_color: widget.primary_color,
            button_position: widget.button_position,
            auto_open: widget.auto_open,
            auto_open_delay: widget.auto_open_delay,
        }
    }
}

/// 嵌入表单提交的数据
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct WidgetSubmissionDto {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: Option<String>,
    /// 提交表单的页面地址
    pub url: Option<String>,
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSubmissionResponseDto {
    pub success: bool,
    pub message: String,
    pub lead_id: Uuid,
}
