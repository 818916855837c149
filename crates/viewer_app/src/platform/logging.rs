//! Logger setup for the viewer binary.
//!
//! Records from this workspace's crates pass at the configured level. The GUI
//! and HTTP stacks only get through at `Error`.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "scrape_viewer.log";

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    File,
    Terminal,
    Both,
}

impl LogDestination {
    /// Accepts `file`, `terminal` (or `term`) and `both`, in any case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "file" => Some(Self::File),
            "terminal" | "term" => Some(Self::Terminal),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    fn writes_terminal(self) -> bool {
        matches!(self, Self::Terminal | Self::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, Self::File | Self::Both)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LevelFilter,
    /// Truncated on every start.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            destination: LogDestination::Both,
            level: LevelFilter::Info,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

pub fn initialize(settings: &LogSettings) {
    let loggers = loggers_for(settings);
    if loggers.is_empty() {
        return;
    }
    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Logger was already installed: {err}");
    }
}

fn loggers_for(settings: &LogSettings) -> Vec<Box<dyn SharedLogger>> {
    let config = viewer_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::with_capacity(2);

    if settings.destination.writes_terminal() {
        loggers.push(TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if settings.destination.writes_file() {
        match File::create(&settings.file) {
            Ok(file) => loggers.push(WriteLogger::new(settings.level, config, file)),
            // No logger exists yet, so stderr is the only place to say so.
            Err(err) => eprintln!(
                "Cannot open log file {}: {err}",
                settings.file.display()
            ),
        }
    }
    loggers
}

fn viewer_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("viewer_")
        .add_filter_allow_str("scrape_viewer")
        .build()
}
