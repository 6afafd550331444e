// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Utc};
use leadrs::domain::models::lead::{Lead, LeadSource, LeadStage};
use leadrs::domain::models::task::TaskStatus;
use leadrs::domain::services::scheduling_policy::{
    is_overdue, is_stale, materialize, needs_reminder, REMINDER_LEAD_HOURS,
};
use leadrs::domain::services::task_planner::plan_tasks_for_transition;
use uuid::Uuid;

#[test]
fn test_planned_tasks_are_pending_and_well_formed() {
    let mut lead = Lead::new("Katherine", LeadSource::Event);
    lead.assigned_to = Some(Uuid::new_v4());
    let now = Utc::now();

    for stage in LeadStage::PIPELINE {
        for spec in plan_tasks_for_transition(&lead, stage) {
            let task = materialize(&spec, &lead, now);

            assert_eq!(task.status, TaskStatus::Pending);
            assert_eq!(task.lead_id, lead.id);
            assert_eq!(task.assigned_to, lead.assigned_to);
            assert!(task.title.contains("Katherine"));

            let due = task.due_date.unwrap();
            let reminder = task.reminder_at.unwrap();
            assert_eq!(due - reminder, Duration::hours(REMINDER_LEAD_HOURS));
            assert!(task.validate_schedule().is_ok());
        }
    }
}

#[test]
fn test_closed_stages_plan_nothing() {
    let lead = Lead::new("Katherine", LeadSource::Event);

    assert!(plan_tasks_for_transition(&lead, LeadStage::Won).is_empty());
    assert!(plan_tasks_for_transition(&lead, LeadStage::Lost).is_empty());
    assert_eq!(plan_tasks_for_transition(&lead, LeadStage::Proposal).len(), 2);
}

#[test]
fn test_time_predicates() {
    let lead = Lead::new("Katherine", LeadSource::Event);
    let spec = &plan_tasks_for_transition(&lead, LeadStage::New)[0];
    let created = Utc::now();
    let task = materialize(spec, &lead, created);

    assert!(!is_overdue(&task, created));
    assert!(!needs_reminder(&task, created));
    assert!(needs_reminder(&task, created + Duration::hours(23)));
    assert!(is_overdue(&task, created + Duration::days(2)));

    let mut done = task.clone();
    done.set_status(TaskStatus::Completed, None, created);
    assert!(!is_overdue(&done, created + Duration::days(2)));
    assert!(!needs_reminder(&done, created + Duration::days(2)));

    let mut stale = Lead::new("Old", LeadSource::Direct);
    stale.updated_at = created - Duration::days(8);
    assert!(is_stale(&stale, 7, created));
    stale.stage = LeadStage::Proposal;
    assert!(!is_stale(&stale, 7, created));
}
