use crate::domain::task::Task;
use crate::domain::utils::id::ProcessorId;

/// A processor of the simulated pool. Runs at most one task and advances it by
/// one unit of work per cycle.
#[derive(Debug, Clone)]
pub struct Processor {
    id: ProcessorId,
    current_task: Option<Task>,
}

impl Processor {
    pub fn new(id: ProcessorId) -> Self {
        Processor { id, current_task: None }
    }

    pub fn id(&self) -> &ProcessorId {
        &self.id
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.current_task.is_none()
    }

    /// Hands `task` to this processor.
    ///
    /// The caller must check [`Processor::is_available`] first. Assigning to a
    /// busy processor keeps the running task and drops the new one, which is
    /// logged as an error since the scheduler never does this.
    pub fn assign(&mut self, task: Task) {
        if let Some(running) = &self.current_task {
            log::error!(
                "Processor {} is busy with task {}; rejected assignment of task {}.",
                self.id,
                running.id(),
                task.id()
            );
            return;
        }

        self.current_task = Some(task);
    }

    /// Advances the current task by one unit of work.
    ///
    /// # Returns
    /// The task if this step finished it (the slot is cleared and the task handed
    /// back to the caller), `None` if the task is still running or the processor
    /// is idle.
    pub fn step_and_maybe_complete(&mut self) -> Option<Task> {
        let task = self.current_task.as_mut()?;
        task.tick();
        log::trace!("{} ran {}, remaining time {}.", self.id, task.id(), task.remaining_time());

        if task.is_complete() { self.current_task.take() } else { None }
    }
}
