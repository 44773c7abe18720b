use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;
use std::path::Path;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "simulation.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Installs the global logger for the simulator binary.
///
/// Level comes from `RUST_LOG` (default `info`). Records go to stderr in colour
/// and, when `logs/` is writable, to `logs/simulation.log` in plain text.
/// Stdout is left to the cycle reports.
pub fn init() {
    let level = std::env::var("RUST_LOG").ok().and_then(|value| value.parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info);

    let mut dispatch = Dispatch::new().level(level).chain(console_dispatch());

    match file_dispatch(Path::new(LOG_DIR).join(LOG_FILE).as_path()) {
        Ok(file) => dispatch = dispatch.chain(file),
        Err(e) => eprintln!("Log file unavailable ({}); logging to stderr only.", e),
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
    }
}

fn console_dispatch() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format(TIMESTAMP_FORMAT),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
}

fn file_dispatch(path: &Path) -> std::io::Result<Dispatch> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fern::log_file(path)?;

    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {} {}] {}", Local::now().format(TIMESTAMP_FORMAT), record.level(), record.target(), message))
        })
        .chain(file))
}
