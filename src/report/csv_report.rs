use serde::Serialize;
use std::io::Write;

use crate::domain::simulator::cycle_report::{CycleReport, ProcessorOutcome};
use crate::domain::simulator::simulator::CycleObserver;
use crate::error::Result;

/// One CSV row: a single arrival or processor outcome of a cycle.
#[derive(Debug, Serialize)]
struct CycleEventRow<'a> {
    cycle: u64,
    event: &'static str,
    processor: Option<&'a str>,
    task: Option<&'a str>,
    execution_time: Option<u64>,
    priority: Option<i64>,
}

/// Writes every arrival and every processor outcome as a `;`-separated row.
/// Cells that do not apply to an event are left empty.
pub struct CsvReporter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReporter<W> {
    pub fn new(out: W) -> Self {
        CsvReporter { writer: csv::WriterBuilder::new().delimiter(b';').from_writer(out) }
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer.into_inner().map_err(|e| crate::error::Error::IoError(e.into_error()))
    }
}

impl<W: Write> CycleObserver for CsvReporter<W> {
    fn on_cycle(&mut self, report: &CycleReport) -> Result<()> {
        for arrival in &report.arrivals {
            self.writer.serialize(CycleEventRow {
                cycle: report.cycle,
                event: "created",
                processor: None,
                task: Some(arrival.task_id.as_str()),
                execution_time: Some(arrival.execution_time),
                priority: Some(arrival.priority),
            })?;
        }

        for outcome in &report.outcomes {
            let event = match outcome {
                ProcessorOutcome::Completed { .. } => "completed",
                ProcessorOutcome::Running { .. } => "running",
                ProcessorOutcome::Idle { .. } => "idle",
            };

            self.writer.serialize(CycleEventRow {
                cycle: report.cycle,
                event,
                processor: Some(outcome.processor_id().as_str()),
                task: outcome.task_id().map(|id| id.as_str()),
                execution_time: None,
                priority: None,
            })?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
