// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义 HTTP 层与用例层之间交换的请求/响应结构，
/// 请求结构通过 `validator` 派生校验规则
pub mod funnel_request;
pub mod lead_request;
pub mod tag_request;
pub mod task_request;
pub mod widget_request;
