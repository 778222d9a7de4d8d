//! Delay strategies and selection.
//!
//! Strategies are pure data: a fixed registry maps a name to a pure
//! function from the attempt number to a pause length. The executor does
//! the actual sleeping, which keeps the strategies easy to test and
//! inspect. Callers who need anything else supply an inline pause function
//! through [`DelaySelector::inline`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A named entry in the delay registry.
///
/// Each strategy maps the 1-based attempt number that just failed to the
/// pause taken before the next attempt. One time unit is one second.
///
/// | name          | delay (seconds) |
/// |---------------|-----------------|
/// | `none`        | 0               |
/// | `by_try`      | attempt         |
/// | `default`     | attempt²        |
/// | `exponential` | 2^attempt       |
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use tenacity::DelayStrategy;
///
/// let strategy = DelayStrategy::from_name("default").unwrap();
/// assert_eq!(strategy.duration_for(3), Duration::from_secs(9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayStrategy {
    /// No pause between attempts.
    None,
    /// Pause for `attempt` seconds.
    ByTry,
    /// Pause for `attempt²` seconds.
    Default,
    /// Pause for `2^attempt` seconds.
    Exponential,
}

impl DelayStrategy {
    /// Look a strategy up by its registry name.
    ///
    /// The registry is fixed; `None` for anything outside it. Callers who
    /// want custom behavior use [`DelaySelector::inline`] instead of
    /// extending the registry.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "by_try" => Some(Self::ByTry),
            "default" => Some(Self::Default),
            "exponential" => Some(Self::Exponential),
            _ => None,
        }
    }

    /// The registry name of this strategy.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ByTry => "by_try",
            Self::Default => "default",
            Self::Exponential => "exponential",
        }
    }

    /// Calculate the pause after the given failed attempt (1-based).
    ///
    /// Arithmetic saturates rather than overflowing.
    pub fn duration_for(self, attempt: u32) -> Duration {
        let seconds = match self {
            Self::None => 0,
            Self::ByTry => u64::from(attempt),
            Self::Default => u64::from(attempt).saturating_mul(u64::from(attempt)),
            Self::Exponential => 2u64.saturating_pow(attempt),
        };
        Duration::from_secs(seconds)
    }
}

/// How a retry picks its pause between attempts.
///
/// A tagged choice: either a registry name resolved per attempt, or an
/// inline pause function entirely under caller control. When a call site
/// supplies neither, the executor falls back to the configured
/// `delay_algorithm` name.
#[derive(Clone)]
pub enum DelaySelector {
    /// Resolve through the registry by name on each attempt. Unknown names
    /// fail the invocation with
    /// [`RetryError::UnknownDelayStrategy`](crate::RetryError::UnknownDelayStrategy).
    Named(String),
    /// Invoke the function with the attempt number; pausing, or not, is its
    /// business.
    Inline(Arc<dyn Fn(u32) + Send + Sync>),
}

impl DelaySelector {
    /// Selector for a registry entry.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Selector wrapping a caller-supplied pause function.
    ///
    /// ```rust
    /// use tenacity::DelaySelector;
    ///
    /// // Fixed 50ms pause regardless of attempt number.
    /// let selector = DelaySelector::inline(|_attempt| {
    ///     std::thread::sleep(std::time::Duration::from_millis(50));
    /// });
    /// # let _ = selector;
    /// ```
    pub fn inline<F>(f: F) -> Self
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        Self::Inline(Arc::new(f))
    }
}

impl fmt::Debug for DelaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Inline(_) => f.debug_tuple("Inline").field(&"<fn>").finish(),
        }
    }
}

impl From<DelayStrategy> for DelaySelector {
    fn from(strategy: DelayStrategy) -> Self {
        Self::Named(strategy.name().to_string())
    }
}
