//! Logger for tests that records the messages logged by the current thread.

use std::cell::RefCell;
use std::sync::OnceLock;

use log::{Level, LevelFilter, Log, Metadata, Record};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger {
    output: env_logger::Logger,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });

        if self.output.enabled(record.metadata()) {
            self.output.log(record);
        }
    }

    fn flush(&self) {
        self.output.flush();
    }
}

static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();

/// Runs `f` and returns its result together with the records it logged.
pub(crate) fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    let logger = LOGGER.get_or_init(|| CaptureLogger {
        output: env_logger::builder().is_test(true).build(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }

    RECORDS.with(|records| records.borrow_mut().clear());
    let result = f();
    let records = RECORDS.with(|records| records.take());

    (result, records)
}
