use std::io::Write;

use crate::domain::simulator::cycle_report::{CycleReport, ProcessorOutcome};
use crate::domain::simulator::simulator::CycleObserver;
use crate::error::Result;

/// Prints each cycle as a human readable block:
///
/// ```text
/// Clock Cycle C1:
///   Task T1 is created with execution time 2 and priority 1
///   Task T1 is running on P1
///   P2 is empty
///
/// ```
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CycleObserver for ConsoleReporter<W> {
    fn on_cycle(&mut self, report: &CycleReport) -> Result<()> {
        writeln!(self.out, "Clock Cycle C{}:", report.cycle)?;

        for arrival in &report.arrivals {
            writeln!(
                self.out,
                "  Task {} is created with execution time {} and priority {}",
                arrival.task_id, arrival.execution_time, arrival.priority
            )?;
        }

        for outcome in &report.outcomes {
            match outcome {
                ProcessorOutcome::Completed { processor_id, task_id } => {
                    writeln!(self.out, "  Task {} is completed on {}", task_id, processor_id)?
                }
                ProcessorOutcome::Running { processor_id, task_id } => {
                    writeln!(self.out, "  Task {} is running on {}", task_id, processor_id)?
                }
                ProcessorOutcome::Idle { processor_id } => writeln!(self.out, "  {} is empty", processor_id)?,
            }
        }

        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
