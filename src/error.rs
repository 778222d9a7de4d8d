//! Error types for retry execution.

use std::fmt;

/// Error returned by a retry invocation.
///
/// Domain failures are carried by value inside [`Rejected`](Self::Rejected)
/// and [`Exhausted`](Self::Exhausted), untouched and with the cause chain
/// reachable through [`std::error::Error::source`], so callers pattern-match
/// on the real failure rather than a wrapper.
///
/// The only errors the executor itself originates are the misuse variants:
/// [`NoAction`](Self::NoAction), [`ZeroBudget`](Self::ZeroBudget) and
/// [`UnknownDelayStrategy`](Self::UnknownDelayStrategy). They are raised
/// without retrying and are never routed through the configured logger.
///
/// # Examples
///
/// ```rust
/// use tenacity::{DelaySelector, Retry, RetryError};
///
/// let result: Result<(), _> = Retry::new(2)
///     .with_delay(DelaySelector::named("none"))
///     .call(|_| Err("connection reset"));
///
/// match result {
///     Err(RetryError::Exhausted { error, attempts }) => {
///         assert_eq!(error, "connection reset");
///         assert_eq!(attempts, 2);
///     }
///     other => panic!("expected exhaustion, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryError<E> {
    /// No action was supplied before the retry was run.
    NoAction,
    /// The budget does not allow even a single attempt.
    ZeroBudget,
    /// A named delay selector is not present in the registry.
    UnknownDelayStrategy(String),
    /// The action failed with an error the matcher does not cover.
    ///
    /// Raised on the attempt that produced the error; the retry loop never
    /// logs or pauses for it.
    Rejected(E),
    /// The action failed on the final permitted attempt.
    Exhausted {
        /// The error from the final attempt, untouched.
        error: E,
        /// Total attempts made; always equals the budget.
        attempts: u32,
    },
}

impl<E> RetryError<E> {
    /// Extract the domain error, if this outcome carries one.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::Rejected(error) | Self::Exhausted { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Borrow the domain error, if this outcome carries one.
    pub fn source_err(&self) -> Option<&E> {
        match self {
            Self::Rejected(error) | Self::Exhausted { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns true if the budget was spent without a success.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted { .. })
    }

    /// Returns true if the error was outside the retryable set.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Number of attempts made, when the budget was exhausted.
    pub fn attempts(&self) -> Option<u32> {
        match self {
            Self::Exhausted { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAction => write!(f, "no action supplied"),
            Self::ZeroBudget => write!(f, "retry budget must allow at least one attempt"),
            Self::UnknownDelayStrategy(name) => write!(f, "unknown delay strategy `{name}`"),
            Self::Rejected(error) => write!(f, "{error}"),
            Self::Exhausted { error, attempts } => {
                write!(f, "failed permanently after {attempts} tries: {error}")
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rejected(error) | Self::Exhausted { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// The error type's name with module paths stripped, so log lines read
/// `TimeoutError` rather than `app::client::TimeoutError`.
pub(crate) fn kind_name<E: ?Sized>() -> String {
    strip_paths(std::any::type_name::<E>())
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    // Start of the identifier currently being accumulated in `out`.
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else {
            out.push(c);
            if !(c.is_alphanumeric() || c == '_') {
                segment_start = out.len();
            }
        }
    }
    out
}
