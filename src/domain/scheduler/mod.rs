pub mod scheduler;
pub mod task_compare;
