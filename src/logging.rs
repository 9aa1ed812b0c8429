//! Log sink for the browser.
//!
//! Library code logs through the `log` facade. Native binaries install
//! `env_logger`; in the browser [`init`] routes records to the developer
//! console and installs the panic hook.

#[cfg(target_arch = "wasm32")]
use log::{Level, LevelFilter, Log, Metadata, Record};

#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
static LOGGER: ConsoleLogger = ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = wasm_bindgen::JsValue::from_str(&format!(
            "[{}] {}: {}",
            record.level(),
            record.target(),
            record.args()
        ));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger at `level` and the panic hook. Safe to call
/// more than once; only the first logger sticks.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Map a user-supplied level name onto a filter, defaulting to `Info`.
#[must_use]
pub fn parse_level(name: Option<&str>) -> log::LevelFilter {
    name.and_then(|n| n.trim().parse().ok())
        .unwrap_or(log::LevelFilter::Info)
}
