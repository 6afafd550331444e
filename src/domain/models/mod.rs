// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 线索（lead）：销售管道中的潜在客户及其枚举类型
/// - 任务（task）：与线索关联的跟进动作
/// - 标签（tag）：可复用的线索标签定义
/// - 组件（widget）：可嵌入网页、用于收集线索的表单
pub mod lead;
pub mod tag;
pub mod task;
pub mod widget;
