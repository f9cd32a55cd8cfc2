//! Browser console backend for the `log` facade
//!
//! Installed once from the WASM start hook. Native builds (tests) never
//! install it, so logging there is a no-op.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.target(), record.args());
        match record.level() {
            Level::Error => web_sys::console::error_1(&line.into()),
            Level::Warn => web_sys::console::warn_1(&line.into()),
            Level::Info => web_sys::console::info_1(&line.into()),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the browser console
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
