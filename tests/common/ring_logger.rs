use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::VecDeque;
use std::sync::Mutex;

// Enough for a full run's info-level output.
const RING_BUFFER_SIZE: usize = 200;

lazy_static::lazy_static! {
    static ref LOG_BUFFER: Mutex<VecDeque<String>> = Mutex::new(VecDeque::with_capacity(RING_BUFFER_SIZE));
}

struct RingLogger;

impl log::Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut buffer = LOG_BUFFER.lock().unwrap();
            if buffer.len() >= RING_BUFFER_SIZE {
                buffer.pop_front();
            }
            buffer.push_back(format!("{}: {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

/// Installs the ring logger. Later calls in the same process are no-ops.
pub fn init_logger() -> Result<(), SetLoggerError> {
    log::set_logger(&RingLogger).map(|()| log::set_max_level(LevelFilter::Info))
}

/// Drains and returns everything logged so far.
pub fn take_log() -> Vec<String> {
    LOG_BUFFER.lock().unwrap().drain(..).collect()
}
