use serde::Serialize;

use crate::domain::task::Task;
use crate::domain::utils::id::{ProcessorId, TaskId};

/// A task released into the waiting queue at the start of a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskArrival {
    pub task_id: TaskId,
    pub execution_time: u64,
    pub priority: i64,
}

impl From<&Task> for TaskArrival {
    fn from(task: &Task) -> Self {
        TaskArrival { task_id: task.id().clone(), execution_time: task.execution_time(), priority: task.priority() }
    }
}

/// What one processor did during a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ProcessorOutcome {
    /// The task ran its last unit of work in this cycle.
    #[serde(rename_all = "camelCase")]
    Completed { processor_id: ProcessorId, task_id: TaskId },

    /// The task ran and still has work left.
    #[serde(rename_all = "camelCase")]
    Running { processor_id: ProcessorId, task_id: TaskId },

    #[serde(rename_all = "camelCase")]
    Idle { processor_id: ProcessorId },
}

impl ProcessorOutcome {
    pub fn processor_id(&self) -> &ProcessorId {
        match self {
            ProcessorOutcome::Completed { processor_id, .. }
            | ProcessorOutcome::Running { processor_id, .. }
            | ProcessorOutcome::Idle { processor_id } => processor_id,
        }
    }

    pub fn task_id(&self) -> Option<&TaskId> {
        match self {
            ProcessorOutcome::Completed { task_id, .. } | ProcessorOutcome::Running { task_id, .. } => Some(task_id),
            ProcessorOutcome::Idle { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ProcessorOutcome::Completed { .. })
    }
}

/// Everything that happened in one simulated cycle, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleReport {
    /// 1-based cycle number.
    pub cycle: u64,
    pub arrivals: Vec<TaskArrival>,
    /// One entry per processor, in pool order.
    pub outcomes: Vec<ProcessorOutcome>,
}

impl CycleReport {
    pub fn completed_task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.outcomes.iter().filter(|o| o.is_completed()).filter_map(ProcessorOutcome::task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_with_tagged_outcomes() {
        let report = CycleReport {
            cycle: 1,
            arrivals: vec![TaskArrival { task_id: TaskId::new("T1"), execution_time: 2, priority: 1 }],
            outcomes: vec![
                ProcessorOutcome::Running { processor_id: ProcessorId::new("P1"), task_id: TaskId::new("T1") },
                ProcessorOutcome::Idle { processor_id: ProcessorId::new("P2") },
            ],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cycle": 1,
                "arrivals": [{"taskId": "T1", "executionTime": 2, "priority": 1}],
                "outcomes": [
                    {"status": "running", "processorId": "P1", "taskId": "T1"},
                    {"status": "idle", "processorId": "P2"}
                ]
            })
        );
    }

    #[test]
    fn test_completed_task_ids_skips_running_and_idle() {
        let report = CycleReport {
            cycle: 3,
            arrivals: vec![],
            outcomes: vec![
                ProcessorOutcome::Completed { processor_id: ProcessorId::new("P1"), task_id: TaskId::new("T4") },
                ProcessorOutcome::Running { processor_id: ProcessorId::new("P2"), task_id: TaskId::new("T2") },
                ProcessorOutcome::Idle { processor_id: ProcessorId::new("P3") },
            ],
        };

        let ids: Vec<&str> = report.completed_task_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["T4"]);
    }
}
