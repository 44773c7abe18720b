use crate::config::SimulationConfig;
use crate::domain::scheduler::scheduler::Scheduler;
use crate::domain::simulator::clock::ClockCycle;
use crate::domain::simulator::cycle_report::{CycleReport, TaskArrival};
use crate::domain::task::Task;
use crate::error::Result;

/// Receives the report of every simulated cycle, in order.
///
/// This is the seam for everything outside the simulation core: printing,
/// exporting, pacing the run in wall-clock time.
pub trait CycleObserver {
    fn on_cycle(&mut self, report: &CycleReport) -> Result<()>;
}

/// Drives the scheduler through a fixed number of cycles.
///
/// All tasks are known up front; each cycle releases the ones whose creation
/// time is reached, dispatches, executes and reports. Tasks still waiting or
/// running when the last cycle ends are abandoned without further notice.
#[derive(Debug)]
pub struct Simulator {
    config: SimulationConfig,
    tasks: Vec<Task>,
    scheduler: Scheduler,
    clock: ClockCycle,
}

impl Simulator {
    pub fn new(config: SimulationConfig, tasks: Vec<Task>) -> Self {
        let scheduler = Scheduler::with_processor_pool(config.num_processors());
        Simulator { config, tasks, scheduler, clock: ClockCycle::new() }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Number of cycles already simulated.
    pub fn current_cycle(&self) -> u64 {
        self.clock.elapsed()
    }

    pub fn is_finished(&self) -> bool {
        self.clock.elapsed() >= self.config.num_cycles()
    }

    /// Simulates the next cycle.
    ///
    /// # Returns
    /// The report of that cycle, or `None` once all configured cycles have run.
    pub fn step(&mut self) -> Option<CycleReport> {
        if self.is_finished() {
            return None;
        }

        let cycle = self.clock.upcoming();

        let mut arrivals = Vec::new();
        for task in self.tasks.iter().filter(|t| t.creation_time() == cycle) {
            log::debug!(
                "Cycle {}: task {} arrived (execution time {}, priority {}).",
                cycle,
                task.id(),
                task.execution_time(),
                task.priority()
            );
            arrivals.push(TaskArrival::from(task));
            self.scheduler.add_task(task.clone());
        }

        self.scheduler.schedule_tasks();
        let outcomes = self.scheduler.execute_tasks();

        self.clock.next_cycle();

        Some(CycleReport { cycle, arrivals, outcomes })
    }

    /// Runs all remaining cycles, handing each report to `observer`.
    ///
    /// The simulation itself cannot fail; an error here always comes from the
    /// observer and stops the run after the cycle it was reporting.
    pub fn run<O: CycleObserver + ?Sized>(&mut self, observer: &mut O) -> Result<()> {
        log::info!(
            "Starting simulation: {} processor(s), {} cycle(s), {} task(s).",
            self.config.num_processors(),
            self.config.num_cycles(),
            self.tasks.len()
        );

        while let Some(report) = self.step() {
            observer.on_cycle(&report)?;
        }

        self.log_end_of_run();
        Ok(())
    }

    /// Runs all remaining cycles and collects their reports.
    pub fn run_to_end(&mut self) -> Vec<CycleReport> {
        let reports: Vec<CycleReport> = std::iter::from_fn(|| self.step()).collect();
        self.log_end_of_run();
        reports
    }

    /// Rewinds to cycle 0 with every task back in its loaded state.
    pub fn reset(&mut self) {
        self.scheduler = Scheduler::with_processor_pool(self.config.num_processors());
        self.clock.reset();
    }

    fn log_end_of_run(&self) {
        log::info!(
            "Simulation ended after {} cycle(s); {} task(s) still waiting, {} still running.",
            self.clock.elapsed(),
            self.scheduler.waiting_len(),
            self.scheduler.running_len()
        );
    }
}
