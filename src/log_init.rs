use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, SiteError};

struct FileLogger {
    file_path: PathBuf,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Appends `debug` and louder records to the file at `path`.
///
/// Fails if `path` cannot be opened for appending or a logger is already
/// installed.
pub fn init_logger(path: impl Into<PathBuf>) -> Result<()> {
    let file_path = path.into();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&file_path)?;

    log::set_boxed_logger(Box::new(FileLogger { file_path }))
        .map_err(|_| SiteError::LoggerAlreadySet)?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
