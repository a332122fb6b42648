// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub use log::{debug, error, info, trace, warn, Level};

use log::{Log, Metadata, Record, SetLoggerError};

/// Logs an error message and terminates the process with a non-zero exit
/// code. Never returns, so it may be used in expression position.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {{
        $crate::error!($($arg)*);
        ::std::process::exit(1)
    }};
}

/// A logger which writes timestamped messages to standard output.
pub struct Logger {
    label: String,
    level: Level,
}

impl Logger {
    pub fn new() -> Logger {
        Logger {
            label: "program".to_string(),
            level: Level::Info,
        }
    }

    /// set the label displayed for messages below debug level
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// set the most verbose level which will be logged
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// register as the global logger
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level.to_level_filter());
        log::set_boxed_logger(Box::new(self))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let ms = (time::precise_time_ns() % 1_000_000_000) / 1_000_000;
            let target = if record.level() >= Level::Debug {
                record.target()
            } else {
                self.label.as_str()
            };
            println!(
                "{}.{:03} {:<5} [{}] {}",
                time::strftime("%Y-%m-%d %H:%M:%S", &time::now()).unwrap(),
                ms,
                record.level(),
                target,
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let logger = Logger::new();
        assert_eq!(logger.label, "program");
        assert_eq!(logger.level, Level::Info);
    }

    #[test]
    fn builder_overrides() {
        let logger = Logger::new().label("test").level(Level::Trace);
        assert_eq!(logger.label, "test");
        assert_eq!(logger.level, Level::Trace);
    }
}
