use crate::api::simulation_dto::SimulationConfigDto;
use crate::config::SimulationConfig;
use crate::domain::simulator::simulator::Simulator;
use crate::error::Result;
use crate::loader::parser::parse_json_file;
use crate::loader::task_parser::load_tasks_from_file;

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;

/// Loads the task list at `tasks_file` and builds a simulator ready to run
/// from cycle 1.
pub fn generate_simulator(tasks_file: &str, config: SimulationConfig) -> Result<Simulator> {
    let tasks = load_tasks_from_file(tasks_file)?;
    log::info!("Task list '{}' parsed successfully.", tasks_file);

    Ok(Simulator::new(config, tasks))
}

/// Reads a JSON run configuration file.
///
/// # Returns
/// The validated run parameters and the task file named in the configuration, if any.
pub fn load_run_config(config_file: &str) -> Result<(SimulationConfig, Option<String>)> {
    let dto: SimulationConfigDto = parse_json_file(config_file)?;
    let config = SimulationConfig::try_from(&dto)?;
    log::info!("Run configuration '{}' loaded: {:?}.", config_file, config);

    Ok((config, dto.tasks_file))
}
