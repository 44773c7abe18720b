pub mod clock;
pub mod cycle_report;
pub mod simulator;
