use std::thread;
use std::time::Duration;

use crate::domain::simulator::cycle_report::CycleReport;
use crate::domain::simulator::simulator::CycleObserver;
use crate::error::Result;

/// Blocks for a fixed wall-clock delay after every cycle, so a run can be
/// watched in real time.
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Pacer { delay }
    }
}

impl CycleObserver for Pacer {
    fn on_cycle(&mut self, _report: &CycleReport) -> Result<()> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}
