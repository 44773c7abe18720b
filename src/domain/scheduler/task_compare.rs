use std::cmp::Ordering;

use crate::domain::task::Task;

/// Orders tasks by dispatch precedence.
///
/// `Ordering::Greater` means the first task is dispatched before the second:
/// 1. the smaller `priority` value wins,
/// 2. on equal priority, the larger `execution_time` wins.
///
/// Tasks equal under both keys compare as `Ordering::Equal`; the waiting queue
/// breaks those ties by arrival order (see [`WaitingTask`]).
pub struct TaskPriorityCompare;

impl TaskPriorityCompare {
    pub fn compare(task0: &Task, task1: &Task) -> Ordering {
        task1.priority().cmp(&task0.priority()).then_with(|| task0.execution_time().cmp(&task1.execution_time()))
    }
}

/// Entry of the scheduler's waiting queue.
///
/// `sequence` is the insertion counter of the queue; among tasks equal under
/// [`TaskPriorityCompare`] the one inserted first is the greatest.
#[derive(Debug)]
pub struct WaitingTask {
    pub task: Task,
    pub sequence: u64,
}

impl Ord for WaitingTask {
    fn cmp(&self, other: &Self) -> Ordering {
        TaskPriorityCompare::compare(&self.task, &other.task).then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for WaitingTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for WaitingTask {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WaitingTask {}
