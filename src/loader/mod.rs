pub mod parser;
pub mod task_parser;
