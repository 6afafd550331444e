// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP 处理器模块
///
/// 处理器对仓库 trait 泛型，按请求构造用例；具体实现类型在路由中绑定
pub mod automation_handler;
pub mod funnel_handler;
pub mod lead_handler;
pub mod system_handler;
pub mod tag_handler;
pub mod task_handler;
pub mod widget_handler;
