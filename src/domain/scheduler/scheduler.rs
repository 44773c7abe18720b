use std::collections::BinaryHeap;

use crate::domain::processor::Processor;
use crate::domain::scheduler::task_compare::WaitingTask;
use crate::domain::simulator::cycle_report::ProcessorOutcome;
use crate::domain::task::Task;
use crate::domain::utils::id::ProcessorId;

/// Dispatches waiting tasks onto a fixed pool of processors.
///
/// A task is always in exactly one place: the waiting queue, the slot of one
/// processor, or (after completion) handed back through [`Scheduler::execute_tasks`]
/// and gone.
#[derive(Debug)]
pub struct Scheduler {
    processors: Vec<Processor>,
    waiting: BinaryHeap<WaitingTask>,
    next_sequence: u64,
}

impl Scheduler {
    pub fn new(processors: Vec<Processor>) -> Self {
        Scheduler { processors, waiting: BinaryHeap::new(), next_sequence: 0 }
    }

    /// Creates a pool of `num_processors` processors named "P1".."Pn".
    pub fn with_processor_pool(num_processors: usize) -> Self {
        let processors = (1..=num_processors).map(|i| Processor::new(ProcessorId::from_pool_index(i))).collect();
        Self::new(processors)
    }

    pub fn processors(&self) -> &[Processor] {
        &self.processors
    }

    pub fn waiting_len(&self) -> usize {
        self.waiting.len()
    }

    pub fn running_len(&self) -> usize {
        self.processors.iter().filter(|p| !p.is_available()).count()
    }

    /// Waiting tasks in the order they would be dispatched.
    pub fn waiting_tasks(&self) -> Vec<&Task> {
        let mut entries: Vec<&WaitingTask> = self.waiting.iter().collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries.into_iter().map(|entry| &entry.task).collect()
    }

    pub fn add_task(&mut self, task: Task) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.waiting.push(WaitingTask { task, sequence });
    }

    /// Fills idle processors, in pool order, with the highest-precedence waiting tasks.
    pub fn schedule_tasks(&mut self) {
        for processor in self.processors.iter_mut() {
            if !processor.is_available() {
                continue;
            }

            let Some(entry) = self.waiting.pop() else {
                break;
            };

            log::debug!("Dispatching task {} (priority {}) to {}.", entry.task.id(), entry.task.priority(), processor.id());
            processor.assign(entry.task);
        }
    }

    /// Advances every processor by one unit of work and reports, in pool order,
    /// what each processor did this cycle.
    pub fn execute_tasks(&mut self) -> Vec<ProcessorOutcome> {
        self.processors
            .iter_mut()
            .map(|processor| {
                let processor_id = processor.id().clone();

                if let Some(finished) = processor.step_and_maybe_complete() {
                    ProcessorOutcome::Completed { processor_id, task_id: finished.id().clone() }
                } else if let Some(running) = processor.current_task() {
                    ProcessorOutcome::Running { processor_id, task_id: running.id().clone() }
                } else {
                    ProcessorOutcome::Idle { processor_id }
                }
            })
            .collect()
    }
}
