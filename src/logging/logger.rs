use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

static LOGGER: once_cell::sync::Lazy<Mutex<Logger>> =
    once_cell::sync::Lazy::new(|| Mutex::new(Logger::new()));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevelEnum {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevelEnum {
    fn label(&self) -> &'static str {
        match self {
            LogLevelEnum::Debug => "DEBUG",
            LogLevelEnum::Info => "INFO",
            LogLevelEnum::Warn => "WARN",
            LogLevelEnum::Error => "ERROR",
        }
    }
}

impl FromStr for LogLevelEnum {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevelEnum::Debug),
            "info" => Ok(LogLevelEnum::Info),
            "warn" | "warning" => Ok(LogLevelEnum::Warn),
            "error" => Ok(LogLevelEnum::Error),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

struct Logger {
    path: Option<PathBuf>,
    min_level: LogLevelEnum,
}

impl Logger {
    fn new() -> Self {
        Self {
            path: None,
            min_level: LogLevelEnum::Info,
        }
    }

    fn initialize(&mut self, path: PathBuf, min_level: LogLevelEnum) {
        self.path = Some(path);
        self.min_level = min_level;
    }

    fn write(&self, level: LogLevelEnum, message: &str) {
        if level < self.min_level {
            return;
        }
        if let Some(path) = &self.path {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let line = format!("[{}] {} - {}\n", timestamp, level.label(), message);
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = file.write_all(line.as_bytes());
            }
        }
    }
}

/// Messages logged before this call are dropped.
pub fn init_logger(log_path: PathBuf, min_level: LogLevelEnum) {
    if let Ok(mut logger) = LOGGER.lock() {
        logger.initialize(log_path, min_level);
    }
}

fn log(level: LogLevelEnum, message: &str) {
    if let Ok(logger) = LOGGER.lock() {
        logger.write(level, message);
    }
}

pub fn log_debug(message: &str) {
    log(LogLevelEnum::Debug, message);
}

pub fn log_info(message: &str) {
    log(LogLevelEnum::Info, message);
}

pub fn log_warn(message: &str) {
    log(LogLevelEnum::Warn, message);
}

pub fn log_error(message: &str) {
    log(LogLevelEnum::Error, message);
}
