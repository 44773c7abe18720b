pub mod processor;
pub mod scheduler;
pub mod simulator;
pub mod task;
pub mod utils;
