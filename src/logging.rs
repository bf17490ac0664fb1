use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct SimLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl SimLogger {
    // Debug and trace records are limited to the filtered topics, if any
    fn topic_enabled(&self, metadata: &Metadata) -> bool {
        match &self.debug_filters {
            Some(filters)
                if metadata.level() == log::Level::Debug
                    || metadata.level() == log::Level::Trace =>
            {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }

    fn format(&self, record: &Record) -> String {
        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        format!(
            "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
            level = record.level(),
            target = record.target(),
            message = record.args()
        )
    }
}

impl log::Log for SimLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && self.topic_enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stdout = io::stdout().lock();
            // Nowhere to report a broken stdout
            let _ = writeln!(stdout, "{}", self.format(record));
            let _ = stdout.flush();
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

static LOGGER: OnceLock<SimLogger> = OnceLock::new();

/// Parses a `--log-level` value, falling back to `Info` for unknown names.
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn parse_filters(filter: Option<&str>) -> Option<HashSet<String>> {
    filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    })
}

// Initialize the logger with optional debug filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<&str>) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| SimLogger {
        level,
        debug_filters: parse_filters(debug_filter),
    });
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

// Topic macros. The frame form prefixes the frame counter.
#[macro_export]
macro_rules! debug_map {
    ($($arg:tt)*) => {
        log::debug!(target: "map", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_sensor {
    (frame: $frame:expr, $($arg:tt)*) => {
        log::debug!(target: "sensor", "[F{:05}] {}", $frame, format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        log::debug!(target: "sensor", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_player {
    (frame: $frame:expr, $($arg:tt)*) => {
        log::debug!(target: "player", "[F{:05}] {}", $frame, format_args!($($arg)*))
    };
    ($($arg:tt)*) => {
        log::debug!(target: "player", "{}", format_args!($($arg)*))
    }
}
