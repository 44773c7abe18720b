use crate::domain::simulator::cycle_report::CycleReport;
use crate::domain::simulator::simulator::CycleObserver;
use crate::error::Result;

pub mod console;
pub mod csv_report;
pub mod json_report;
pub mod pacer;


/// Forwards each report to several observers in registration order, stopping
/// at the first error.
#[derive(Default)]
pub struct ObserverChain {
    observers: Vec<Box<dyn CycleObserver>>,
}

impl ObserverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, observer: impl CycleObserver + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }
}

impl CycleObserver for ObserverChain {
    fn on_cycle(&mut self, report: &CycleReport) -> Result<()> {
        for observer in self.observers.iter_mut() {
            observer.on_cycle(report)?;
        }
        Ok(())
    }
}
