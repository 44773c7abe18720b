use std::io::Write;

use crate::domain::simulator::cycle_report::CycleReport;
use crate::domain::simulator::simulator::CycleObserver;
use crate::error::Result;

/// Writes one JSON object per cycle, one per line.
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        JsonReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CycleObserver for JsonReporter<W> {
    fn on_cycle(&mut self, report: &CycleReport) -> Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }
}
