use serde::Deserialize;

/// Run configuration file, e.g.
/// `{"numProcessors": 2, "numCycles": 10, "tasksFile": "tasks.txt"}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfigDto {
    pub num_processors: i64,
    pub num_cycles: i64,
    #[serde(default)]
    pub tasks_file: Option<String>,
}
