use crate::domain::utils::id::TaskId;

/// A unit of work released into the simulation at `creation_time`.
///
/// Everything except `remaining_time` is fixed at load time. `remaining_time`
/// starts at `execution_time` and only ever moves down, one unit per cycle the
/// task occupies a processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    creation_time: u64,
    execution_time: u64,
    priority: i64,
    remaining_time: u64,
}

impl Task {
    pub fn new(id: TaskId, creation_time: u64, execution_time: u64, priority: i64) -> Self {
        Task { id, creation_time, execution_time, priority, remaining_time: execution_time }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Cycle (1-based) in which the task becomes eligible for scheduling.
    pub fn creation_time(&self) -> u64 {
        self.creation_time
    }

    pub fn execution_time(&self) -> u64 {
        self.execution_time
    }

    /// Lower value means dispatched sooner.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    pub fn remaining_time(&self) -> u64 {
        self.remaining_time
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Performs one unit of work. Saturates at zero.
    pub fn tick(&mut self) {
        if self.remaining_time > 0 {
            self.remaining_time -= 1;
        }
    }
}
