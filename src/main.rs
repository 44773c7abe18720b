use std::io::{self, Read};
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};

use processor_execution_simulator::config::SimulationConfig;
use processor_execution_simulator::report::{
    ObserverChain, console::ConsoleReporter, csv_report::CsvReporter, json_report::JsonReporter, pacer::Pacer,
};
use processor_execution_simulator::{generate_simulator, load_run_config, logger};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Console,
    Csv,
    Json,
}

/// Simulates priority scheduling of tasks on a pool of processors, one clock cycle at a time.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Task list: task count on the first line, then `creation_time execution_time priority` per task.
    tasks_file: Option<String>,

    /// Number of processors in the pool.
    #[arg(short, long, requires = "cycles", allow_negative_numbers = true)]
    processors: Option<i64>,

    /// Number of clock cycles to simulate.
    #[arg(short, long, requires = "processors", allow_negative_numbers = true)]
    cycles: Option<i64>,

    /// JSON run configuration (`numProcessors`, `numCycles`, optional `tasksFile`).
    #[arg(long, conflicts_with_all = ["processors", "cycles"])]
    config: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    format: ReportFormat,

    /// Wall-clock delay after each cycle, in milliseconds.
    #[arg(long, default_value_t = 0)]
    pace_ms: u64,
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let (config, configured_tasks_file) = match (&args.config, args.processors, args.cycles) {
        (Some(config_file), _, _) => {
            load_run_config(config_file).with_context(|| format!("Could not load run configuration '{}'", config_file))?
        }
        (None, Some(processors), Some(cycles)) => (SimulationConfig::new(processors, cycles)?, None),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).context("Could not read run parameters from stdin")?;
            (SimulationConfig::from_run_parameters(&input)?, None)
        }
    };

    let Some(tasks_file) = args.tasks_file.or(configured_tasks_file) else {
        bail!("No task list given; pass a task file or set `tasksFile` in the configuration");
    };

    let mut simulator =
        generate_simulator(&tasks_file, config).with_context(|| format!("Could not load task list '{}'", tasks_file))?;

    let chain = match args.format {
        ReportFormat::Console => ObserverChain::new().with(ConsoleReporter::new(io::stdout())),
        ReportFormat::Csv => ObserverChain::new().with(CsvReporter::new(io::stdout())),
        ReportFormat::Json => ObserverChain::new().with(JsonReporter::new(io::stdout())),
    };
    let mut chain = chain.with(Pacer::new(Duration::from_millis(args.pace_ms)));

    simulator.run(&mut chain).context("Simulation output failed")?;

    Ok(())
}
