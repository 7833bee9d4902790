//! Rolling Logger
//!
//! A `log` backend that keeps the most recent formatted records in a
//! fixed-size ring and mirrors every record to the browser console
//! (stderr when not running on wasm32).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static GLOBAL: OnceLock<&'static RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    /// Create a logger keeping at most `capacity` lines (minimum 1)
    pub fn new(capacity: usize, level: LevelFilter) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Snapshot of the retained lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    /// The last `n` retained lines, oldest first
    pub fn tail(&self, n: usize) -> Vec<String> {
        let lines = self.lines();
        let skip = lines.len().saturating_sub(n);
        lines.into_iter().skip(skip).collect()
    }

    fn push_line(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Format one record as a single line
pub fn format_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", timestamp, level, target, message)
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Utc::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        emit(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = web_sys::wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend.
///
/// Can only succeed once per process; later calls return the `log` error.
pub fn init(capacity: usize, level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger = Box::leak(Box::new(RollingLogger::new(capacity, level)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    let _ = GLOBAL.set(logger);
    Ok(logger)
}

/// The installed logger, if `init` succeeded
pub fn global() -> Option<&'static RollingLogger> {
    GLOBAL.get().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn record_at(logger: &RollingLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_ring_keeps_most_recent_lines() {
        let logger = RollingLogger::new(3, LevelFilter::Trace);
        for i in 0..5 {
            record_at(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_records_above_level_are_skipped() {
        let logger = RollingLogger::new(10, LevelFilter::Warn);
        record_at(&logger, Level::Info, "quiet");
        record_at(&logger, Level::Error, "loud");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("[test] loud"));
    }

    #[test]
    fn test_zero_capacity_still_keeps_last_line() {
        let logger = RollingLogger::new(0, LevelFilter::Info);
        record_at(&logger, Level::Info, "a");
        record_at(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
        assert!(logger.lines()[0].ends_with("b"));
    }

    #[test]
    fn test_tail_returns_newest_lines_in_order() {
        let logger = RollingLogger::new(10, LevelFilter::Info);
        for i in 0..4 {
            record_at(&logger, Level::Info, &format!("step {}", i));
        }

        let tail = logger.tail(2);
        assert_eq!(tail.len(), 2);
        assert!(tail[0].ends_with("step 2"));
        assert!(tail[1].ends_with("step 3"));
        assert_eq!(logger.tail(50).len(), 4);
        assert_eq!(logger.level(), LevelFilter::Info);
    }

    #[test]
    fn test_format_line_layout() {
        let line = format_line("12:00:00.000", Level::Warn, "app", "hello");
        assert_eq!(line, "12:00:00.000 WARN  [app] hello");
    }
}
