//! Event and log callback system.
//!
//! The core never writes to stdout or stderr. Hosts that want diagnostics
//! register callbacks here; with nothing registered every emit is a no-op.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> &'static Mutex<Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

// A panicking callback must not disable logging for the rest of the process.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    *lock(event_callback()) = Some(Box::new(callback));
}

/// Remove the global event callback.
pub fn clear_event_callback() {
    *lock(event_callback()) = None;
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Some(callback) = lock(event_callback()).as_ref() {
        callback(name, data);
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    *lock(log_callback()) = Some(Box::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    *lock(log_callback()) = None;
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(callback) = lock(log_callback()).as_ref() {
        callback(level, message);
    }
}

/// Emit a log event whose message is only built when a callback is registered.
///
/// Used on the per-keystroke paths so formatting costs nothing by default.
pub fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if let Some(callback) = lock(log_callback()).as_ref() {
        callback(level, &message());
    }
}
