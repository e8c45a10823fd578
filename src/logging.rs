use crate::error::LoggingError;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::OnceCell;
use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE: &str = "log.txt";

#[derive(Debug)]
struct FileLogger {
    log_path: PathBuf,
}

static LOGGER: OnceCell<FileLogger> = OnceCell::new();

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_entry = format!(
                "{} [{}] {}\n",
                record.level(),
                record.target(),
                record.args()
            );
            let log_file = self.log_path.join(LOG_FILE);

            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_file) {
                let _ = file.write_all(log_entry.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

// Default location: ~/character_sheet/data
pub fn default_log_dir() -> Result<PathBuf, LoggingError> {
    dir::home_dir()
        .map(|home| home.join("character_sheet").join("data"))
        .ok_or(LoggingError::NoHomeDirectory)
}

pub fn init_default() -> Result<(), LoggingError> {
    init(default_log_dir()?)
}

// Install the file logger. Can only succeed once per process.
pub fn init(log_dir: impl AsRef<Path>) -> Result<(), LoggingError> {
    let log_path = log_dir.as_ref().to_path_buf();
    create_dir_all(&log_path)?;

    LOGGER
        .set(FileLogger { log_path })
        .map_err(|_| LoggingError::AlreadyInitialized)?;
    let logger = LOGGER.get().ok_or(LoggingError::AlreadyInitialized)?;

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
