// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{Lead, LeadStage, Priority};
use crate::domain::models::task::TaskType;

/// 待生成任务的描述
///
/// 规划器只产出描述，不涉及持久化；具体的截止时间由调度策略在落库前计算。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    pub title: String,
    pub description: String,
    pub task_type: TaskType,
    pub priority: Priority,
    pub days_from_now: i64,
}

impl TaskSpec {
    fn new(
        title: String,
        description: &str,
        task_type: TaskType,
        priority: Priority,
        days_from_now: i64,
    ) -> Self {
        Self {
            title,
            description: description.to_string(),
            task_type,
            priority,
            days_from_now,
        }
    }
}

/// 规划阶段切换后应当存在的跟进任务
///
/// 固定映射，纯函数：只读取线索名称，不访问也不修改任何持久化状态。
/// Won / Lost 不产生任务。
pub fn plan_tasks_for_transition(lead: &Lead, new_stage: LeadStage) -> Vec<TaskSpec> {
    let name = &lead.name;

    match new_stage {
        LeadStage::New => vec![TaskSpec::new(
            format!("Initial contact with {name}"),
            "Reach out to new lead within 24 hours",
            TaskType::Call,
            Priority::High,
            1,
        )],
        LeadStage::Contacted => vec![TaskSpec::new(
            format!("Follow up with {name}"),
            "Follow up on initial conversation",
            TaskType::FollowUp,
            Priority::Medium,
            3,
        )],
        LeadStage::Qualified => vec![TaskSpec::new(
            format!("Schedule demo for {name}"),
            "Set up product demonstration",
            TaskType::Demo,
            Priority::High,
            2,
        )],
        LeadStage::Proposal => vec![
            TaskSpec::new(
                format!("Send proposal to {name}"),
                "Prepare and send detailed proposal",
                TaskType::Proposal,
                Priority::Urgent,
                1,
            ),
            TaskSpec::new(
                format!("Follow up on proposal with {name}"),
                "Check if they received and reviewed the proposal",
                TaskType::FollowUp,
                Priority::High,
                5,
            ),
        ],
        LeadStage::Negotiation => vec![TaskSpec::new(
            format!("Negotiation meeting with {name}"),
            "Discuss terms and finalize details",
            TaskType::Meeting,
            Priority::Urgent,
            2,
        )],
        LeadStage::Won | LeadStage::Lost => Vec::new(),
    }
}

/// 手动跟进任务
pub fn follow_up_spec(
    lead: &Lead,
    days_from_now: i64,
    task_type: TaskType,
    priority: Priority,
) -> TaskSpec {
    TaskSpec::new(
        format!("Follow up with {}", lead.name),
        &format!("Scheduled follow-up for {} stage lead", lead.stage),
        task_type,
        priority,
        days_from_now,
    )
}

/// 沉睡线索的重新激活任务，次日到期
pub fn re_engagement_spec(lead: &Lead, days_inactive: i64) -> TaskSpec {
    TaskSpec::new(
        format!("Re-engage with {}", lead.name),
        &format!(
            "This lead has been inactive for {days_inactive}+ days. Reach out to re-engage."
        ),
        TaskType::FollowUp,
        Priority::Medium,
        1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::lead::LeadSource;

    fn lead() -> Lead {
        Lead::new("Grace", LeadSource::WebForm)
    }

    #[test]
    fn test_closed_stages_plan_nothing() {
        assert!(plan_tasks_for_transition(&lead(), LeadStage::Won).is_empty());
        assert!(plan_tasks_for_transition(&lead(), LeadStage::Lost).is_empty());
    }

    #[test]
    fn test_proposal_plans_two_tasks() {
        let specs = plan_tasks_for_transition(&lead(), LeadStage::Proposal);

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].task_type, TaskType::Proposal);
        assert_eq!(specs[0].priority, Priority::Urgent);
        assert_eq!(specs[0].days_from_now, 1);
        assert_eq!(specs[1].task_type, TaskType::FollowUp);
        assert_eq!(specs[1].priority, Priority::High);
        assert_eq!(specs[1].days_from_now, 5);
    }

    #[test]
    fn test_single_task_stages() {
        let cases = [
            (LeadStage::New, TaskType::Call, Priority::High, 1),
            (LeadStage::Contacted, TaskType::FollowUp, Priority::Medium, 3),
            (LeadStage::Qualified, TaskType::Demo, Priority::High, 2),
            (LeadStage::Negotiation, TaskType::Meeting, Priority::Urgent, 2),
        ];

        for (stage, task_type, priority, days) in cases {
            let specs = plan_tasks_for_transition(&lead(), stage);
            assert_eq!(specs.len(), 1, "stage {stage}");
            assert_eq!(specs[0].task_type, task_type);
            assert_eq!(specs[0].priority, priority);
            assert_eq!(specs[0].days_from_now, days);
        }
    }

    #[test]
    fn test_titles_use_lead_name() {
        let specs = plan_tasks_for_transition(&lead(), LeadStage::Qualified);
        assert_eq!(specs[0].title, "Schedule demo for Grace");
    }

    #[test]
    fn test_re_engagement_spec() {
        let spec = re_engagement_spec(&lead(), 7);
        assert_eq!(spec.title, "Re-engage with Grace");
        assert!(spec.description.contains("7+ days"));
        assert_eq!(spec.task_type, TaskType::FollowUp);
        assert_eq!(spec.priority, Priority::Medium);
        assert_eq!(spec.days_from_now, 1);
    }
}
