// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 线索仓库（lead_repository）：线索的增删改查、沉睡线索扫描与统计摘要
/// - 标签仓库（tag_repository）：标签定义的管理
/// - 任务仓库（task_repository）：任务的持久化、到期/提醒查询与原子去重插入
/// - 组件仓库（widget_repository）：嵌入式表单组件配置
pub mod lead_repository;
pub mod tag_repository;
pub mod task_repository;
pub mod widget_repository;
