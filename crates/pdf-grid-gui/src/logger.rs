use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

#[derive(Clone)]
pub struct AppLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
    max_entries: usize,
    error_file: Option<PathBuf>,
}

impl AppLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
            error_file: None,
        }
    }

    /// Also append every error record to `path`
    pub fn with_error_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_file = Some(path.into());
        self
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(LevelFilter::Info);
        Ok(())
    }

    pub fn get_entries(&self) -> Vec<LogEntry> {
        self.lock_entries().clone()
    }

    pub fn latest_message(&self) -> Option<String> {
        self.lock_entries()
            .last()
            .map(|entry| entry.message.clone())
    }

    pub fn clear(&self) {
        self.lock_entries().clear();
    }

    fn lock_entries(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn append_error_line(&self, timestamp: DateTime<Local>, message: &str) {
        let Some(path) = &self.error_file else {
            return;
        };

        let line = format_error_line(timestamp, message);
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{}", line));

        if let Err(e) = written {
            eprintln!("Failed to write {}: {}", path.display(), e);
        }
    }
}

/// One line of the error log file
pub fn format_error_line(timestamp: DateTime<Local>, message: &str) -> String {
    format!("{} - ERROR - {}", timestamp.format("%Y-%m-%d %H:%M:%S"), message)
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            message: format!("{}", record.args()),
        };

        if entry.level == Level::Error {
            self.append_error_line(entry.timestamp, &entry.message);
        }

        let mut entries = self.lock_entries();
        entries.push(entry);

        // Keep only the most recent entries
        if entries.len() > self.max_entries {
            let excess = entries.len() - self.max_entries;
            entries.drain(0..excess);
        }
    }

    fn flush(&self) {}
}

/// Route panics through the logger so they reach the error file
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("Unhandled exception: {}", info);
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use log::Log;

    fn record(level: Level, message: &str, logger: &AppLogger) {
        logger.log(
            &Record::builder()
                .level(level)
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_error_line_format() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            format_error_line(timestamp, "Failed to save PDF"),
            "2024-03-09 14:05:07 - ERROR - Failed to save PDF"
        );
    }

    #[test]
    fn test_only_errors_reach_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("errors.log");
        let logger = AppLogger::new(10).with_error_file(&path);

        record(Level::Info, "merged", &logger);
        record(Level::Error, "first failure", &logger);
        record(Level::Warn, "skipped item", &logger);
        record(Level::Error, "second failure", &logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - ERROR - first failure"));
        assert!(lines[1].ends_with(" - ERROR - second failure"));

        assert_eq!(logger.get_entries().len(), 4);
        assert_eq!(logger.latest_message().as_deref(), Some("second failure"));
    }

    #[test]
    fn test_entries_are_bounded() {
        let logger = AppLogger::new(3);
        for i in 0..5 {
            record(Level::Info, &format!("message {}", i), &logger);
        }

        let entries = logger.get_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "message 2");

        logger.clear();
        assert!(logger.latest_message().is_none());
    }

    #[test]
    fn test_debug_records_are_ignored() {
        let logger = AppLogger::new(3);
        record(Level::Debug, "noise", &logger);
        assert!(logger.get_entries().is_empty());
    }
}
