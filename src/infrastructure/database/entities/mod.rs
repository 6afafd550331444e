// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 枚举字段统一以小写蛇形字符串存储
pub mod lead;
pub mod lead_tag;
pub mod task;
pub mod widget;
