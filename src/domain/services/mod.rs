// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了复杂的
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 线索评分（lead_scorer）：计算线索评分、标签建议和优先级建议
/// - 任务规划（task_planner）：阶段切换后应生成的跟进任务
/// - 调度策略（scheduling_policy）：截止/提醒时间及逾期、提醒、沉睡判定
/// - 任务自动化（task_automation_service）：加载、规划、去重并持久化任务
/// - 漏斗统计（funnel_service）：漏斗转化率与线索概览
///
/// 前三者是纯函数，不做任何 I/O；任务自动化服务通过仓库接口访问存储。
pub mod funnel_service;
pub mod lead_scorer;
pub mod scheduling_policy;
pub mod task_automation_service;
pub mod task_planner;
