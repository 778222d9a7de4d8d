//! Process-wide retry configuration.
//!
//! The configuration is a lazily-initialized singleton: created with
//! defaults on first access, mutated in place through [`configure`], alive
//! for the rest of the process. Retries read it; only [`configure`] writes
//! it.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::logger::{ConsoleLogger, Logger};

/// Registry name of the delay strategy used when nothing else is selected.
const DEFAULT_DELAY_ALGORITHM: &str = "default";

/// Process-wide retry defaults.
///
/// Two fields, both plain data: the logger every retry writes its attempt
/// messages to, and the registry name of the delay strategy used when a
/// call site does not pick one.
///
/// `delay_algorithm` is not validated here. An unknown name only fails when
/// a retry actually resolves it, with
/// [`RetryError::UnknownDelayStrategy`](crate::RetryError::UnknownDelayStrategy).
#[derive(Clone)]
pub struct Configuration {
    /// Sink for attempt and terminal-failure messages.
    pub logger: Arc<dyn Logger>,
    /// Registry name of the default delay strategy.
    pub delay_algorithm: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            logger: Arc::new(ConsoleLogger),
            delay_algorithm: DEFAULT_DELAY_ALGORITHM.to_string(),
        }
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("logger", &"<dyn Logger>")
            .field("delay_algorithm", &self.delay_algorithm)
            .finish()
    }
}

static CONFIGURATION: OnceLock<RwLock<Configuration>> = OnceLock::new();

fn holder() -> &'static RwLock<Configuration> {
    CONFIGURATION.get_or_init(|| RwLock::new(Configuration::default()))
}

/// Snapshot of the current configuration.
///
/// Creates the instance with defaults (console logger, `default` delay) on
/// first access; idempotent thereafter. The snapshot is cheap: the logger
/// is held behind an `Arc`.
pub fn configuration() -> Configuration {
    holder()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Mutate the live configuration in place.
///
/// # Examples
///
/// ```rust
/// tenacity::configure(|config| {
///     config.delay_algorithm = "exponential".into();
/// });
///
/// assert_eq!(tenacity::configuration().delay_algorithm, "exponential");
/// ```
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut guard = holder().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}

/// The configured logger. Shorthand for `configuration().logger`.
pub fn logger() -> Arc<dyn Logger> {
    configuration().logger
}
