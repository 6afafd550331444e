// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现
/// 包括各种实体仓库的数据库实现
pub mod lead_repo_impl;
pub mod tag_repo_impl;
pub mod task_repo_impl;
pub mod widget_repo_impl;
