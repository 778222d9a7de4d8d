//! # Tenacity
//!
//! > *Try, try again. But only as many times as you were told.*
//!
//! A small retry utility: run a fallible action up to a budgeted number of
//! attempts, pause between attempts with a pluggable delay strategy, and
//! route every failed attempt through a pluggable logger.
//!
//! ## Quick example
//!
//! ```rust
//! use tenacity::{DelaySelector, Retry};
//!
//! let result = Retry::new(3)
//!     .with_delay(DelaySelector::named("none"))
//!     .call(|attempt| {
//!         if attempt < 3 {
//!             Err("still warming up")
//!         } else {
//!             Ok("ready")
//!         }
//!     });
//!
//! assert_eq!(result.unwrap(), "ready");
//! ```
//!
//! Or, matching the budget-first call shape this crate grew out of:
//!
//! ```rust
//! use tenacity::Tries;
//!
//! # tenacity::configure(|config| config.delay_algorithm = "none".into());
//! let answer = 2u32.tries(|_| Ok::<_, &str>(42));
//! assert_eq!(answer.unwrap(), 42);
//! ```
//!
//! ## Delay strategies
//!
//! Named strategies live in a fixed registry; `attempt` is 1-based and one
//! time unit is one second:
//!
//! | name          | delay       |
//! |---------------|-------------|
//! | `none`        | no pause    |
//! | `by_try`      | `attempt`   |
//! | `default`     | `attempt²`  |
//! | `exponential` | `2^attempt` |
//!
//! Anything else is expressed as an inline pause function via
//! [`DelaySelector::inline`].
//!
//! ## Configuration
//!
//! Process-wide defaults (the logger and the default delay strategy) are
//! mutated in place through [`configure`]:
//!
//! ```rust
//! tenacity::configure(|config| {
//!     config.delay_algorithm = "exponential".into();
//! });
//! ```
//!
//! The default logger writes to stdout. With the `tracing` feature, the
//! `TracingLogger` sink forwards attempt messages to `tracing::info!`
//! instead.
//!
//! ## Error handling
//!
//! The executor never swallows a domain failure: it either retries or
//! returns the original error inside [`RetryError`], cause chain intact.
//! Errors outside the [`Retry::rescue_if`] predicate propagate on the
//! attempt that produced them, with no log line and no pause.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod delay;
pub mod error;
pub mod logger;
pub mod tries;

// Re-exports
pub use config::{configuration, configure, logger, Configuration};
pub use delay::{DelaySelector, DelayStrategy};
pub use error::RetryError;
#[cfg(feature = "tracing")]
pub use logger::TracingLogger;
pub use logger::{ConsoleLogger, Logger};
pub use tries::{Retry, Tries};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{configuration, configure, logger, Configuration};
    pub use crate::delay::{DelaySelector, DelayStrategy};
    pub use crate::error::RetryError;
    pub use crate::logger::Logger;
    pub use crate::tries::{Retry, Tries};
}
