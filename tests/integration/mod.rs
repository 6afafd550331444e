// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod helpers;

mod automation_api_test;
mod funnel_api_test;
mod health_check;
mod lead_api_test;
mod tag_api_test;
mod task_api_test;
mod widget_api_test;
