//! The logging capability used by the retry loop.

/// Sink for the informational messages the executor emits on failed
/// attempts.
///
/// The executor only ever logs at one informational level, so the capability
/// is a single method. Implement it to route attempt messages anywhere, such
/// as a test buffer or a structured logging pipeline.
///
/// # Examples
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use tenacity::Logger;
///
/// #[derive(Default)]
/// struct Memory(Mutex<Vec<String>>);
///
/// impl Logger for Memory {
///     fn info(&self, message: &str) {
///         self.0.lock().unwrap().push(message.to_string());
///     }
/// }
///
/// tenacity::configure(|config| {
///     config.logger = Arc::new(Memory::default());
/// });
/// ```
pub trait Logger: Send + Sync {
    /// Record one informational message.
    fn info(&self, message: &str);
}

/// Default sink: writes each message to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{message}");
    }
}

/// Sink that forwards each message to [`tracing`] at `INFO` level.
///
/// Use this to plug retries into a host application's tracing pipeline:
///
/// ```rust
/// use std::sync::Arc;
///
/// tenacity::configure(|config| {
///     config.logger = Arc::new(tenacity::TracingLogger);
/// });
/// ```
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}
