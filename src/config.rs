use crate::api::simulation_dto::SimulationConfigDto;
use crate::error::ConfigError;

/// Largest processor pool a run may ask for. The pool is allocated up front.
pub const MAX_PROCESSORS: usize = 1 << 16;

/// Validated run parameters: a non-empty processor pool and at least one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    num_processors: usize,
    num_cycles: u64,
}

impl SimulationConfig {
    pub fn new(num_processors: i64, num_cycles: i64) -> Result<Self, ConfigError> {
        if num_processors <= 0 {
            return Err(ConfigError::NonPositiveProcessors(num_processors));
        }
        if num_processors as u64 > MAX_PROCESSORS as u64 {
            return Err(ConfigError::TooManyProcessors { requested: num_processors, max: MAX_PROCESSORS });
        }
        if num_cycles <= 0 {
            return Err(ConfigError::NonPositiveCycles(num_cycles));
        }

        Ok(SimulationConfig { num_processors: num_processors as usize, num_cycles: num_cycles as u64 })
    }

    /// Reads the two run parameters the way the interactive program asks for
    /// them: processor count, then cycle count, separated by whitespace.
    pub fn from_run_parameters(input: &str) -> Result<Self, ConfigError> {
        let mut values = input.split_whitespace().map(|token| {
            token.parse::<i64>().map_err(|_| ConfigError::MissingRunParameters(format!("'{}' is not an integer", token)))
        });

        let num_processors =
            values.next().ok_or_else(|| ConfigError::MissingRunParameters("expected number of processors".to_string()))??;
        let num_cycles = values.next().ok_or_else(|| ConfigError::MissingRunParameters("expected number of cycles".to_string()))??;

        Self::new(num_processors, num_cycles)
    }

    pub fn num_processors(&self) -> usize {
        self.num_processors
    }

    pub fn num_cycles(&self) -> u64 {
        self.num_cycles
    }
}

impl TryFrom<&SimulationConfigDto> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(dto: &SimulationConfigDto) -> Result<Self, Self::Error> {
        SimulationConfig::new(dto.num_processors, dto.num_cycles)
    }
}
