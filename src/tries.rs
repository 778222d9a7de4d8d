//! The retry executor.
//!
//! [`Retry`] is the builder for one bounded retry invocation; [`Tries`]
//! attaches the common case straight onto an integer budget, so a call
//! site reads `3.tries(|_| fetch())`.

use std::fmt::{self, Display};
use std::thread;

use crate::config;
use crate::delay::{DelaySelector, DelayStrategy};
use crate::error::{kind_name, RetryError};

/// A single bounded retry invocation.
///
/// The budget is the maximum number of attempts, at least 1. By default
/// every error is retryable and the pause between attempts comes from the
/// configured default delay strategy; [`rescue_if`](Self::rescue_if) and
/// [`with_delay`](Self::with_delay) narrow both per call.
///
/// Each failed attempt is logged through the configured logger. The loop
/// never swallows a domain failure: it either retries or returns the
/// original error inside [`RetryError`].
///
/// # Examples
///
/// ```rust
/// use std::io;
/// use tenacity::{DelaySelector, Retry};
///
/// let result = Retry::new(3)
///     .rescue_if(|e: &io::Error| e.kind() == io::ErrorKind::Interrupted)
///     .with_delay(DelaySelector::named("none"))
///     .call(|attempt| {
///         if attempt < 3 {
///             Err(io::Error::new(io::ErrorKind::Interrupted, "try again"))
///         } else {
///             Ok("done")
///         }
///     });
///
/// assert_eq!(result.unwrap(), "done");
/// ```
pub struct Retry<'a, T, E> {
    budget: u32,
    matcher: Box<dyn FnMut(&E) -> bool + 'a>,
    delay: Option<DelaySelector>,
    action: Option<Box<dyn FnMut(u32) -> Result<T, E> + 'a>>,
}

impl<'a, T, E: Display> Retry<'a, T, E> {
    /// Start a retry with the given attempt budget.
    pub fn new(budget: u32) -> Self {
        Self {
            budget,
            matcher: Box::new(|_| true),
            delay: None,
            action: None,
        }
    }

    /// Retry only the errors the predicate matches.
    ///
    /// Anything the predicate rejects propagates immediately as
    /// [`RetryError::Rejected`], with no log line and no pause.
    pub fn rescue_if<P>(mut self, predicate: P) -> Self
    where
        P: FnMut(&E) -> bool + 'a,
    {
        self.matcher = Box::new(predicate);
        self
    }

    /// Pick the pause between attempts for this call only.
    pub fn with_delay(mut self, selector: DelaySelector) -> Self {
        self.delay = Some(selector);
        self
    }

    /// Pick a registry strategy by name for this call only.
    pub fn with_delay_named(self, name: impl Into<String>) -> Self {
        self.with_delay(DelaySelector::named(name))
    }

    /// Supply an inline pause function for this call only.
    pub fn with_delay_fn<F>(self, f: F) -> Self
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.with_delay(DelaySelector::inline(f))
    }

    /// Supply the action to retry. It receives the 1-based attempt number.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: FnMut(u32) -> Result<T, E> + 'a,
    {
        self.action = Some(Box::new(action));
        self
    }

    /// Set the action and run the loop in one step.
    pub fn call<F>(self, action: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Result<T, E> + 'a,
    {
        self.action(action).run()
    }

    /// Execute the retry loop.
    ///
    /// Fails with [`RetryError::NoAction`] when no action was supplied and
    /// with [`RetryError::ZeroBudget`] when the budget is 0. Both checks
    /// happen before any attempt, any log line, or any pause.
    pub fn run(mut self) -> Result<T, RetryError<E>> {
        let mut action = self.action.take().ok_or(RetryError::NoAction)?;
        if self.budget == 0 {
            return Err(RetryError::ZeroBudget);
        }

        let configuration = config::configuration();
        let selector = match self.delay {
            Some(selector) => selector,
            None => DelaySelector::Named(configuration.delay_algorithm),
        };
        let logger = configuration.logger;
        let kind = kind_name::<E>();

        let mut attempt = 1u32;
        loop {
            let error = match action(attempt) {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            if !(self.matcher)(&error) {
                return Err(RetryError::Rejected(error));
            }

            let message = error.to_string();
            let detail = if message == kind {
                String::new()
            } else {
                format!(": {message}")
            };

            if attempt >= self.budget {
                let line = format!(
                    "FAILED Permanently after {} tries; {kind}{detail}",
                    self.budget
                );
                logger.info(line.trim_end());
                return Err(RetryError::Exhausted {
                    error,
                    attempts: self.budget,
                });
            }

            logger.info(&format!(
                "{kind}{detail} (Try Number {attempt}/{})",
                self.budget
            ));
            pause(&selector, attempt)?;
            attempt += 1;
        }
    }
}

impl<T, E> fmt::Debug for Retry<'_, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retry")
            .field("budget", &self.budget)
            .field("delay", &self.delay)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Resolve the selector for the current attempt and take the pause.
fn pause<E>(selector: &DelaySelector, attempt: u32) -> Result<(), RetryError<E>> {
    match selector {
        DelaySelector::Named(name) => {
            let strategy = DelayStrategy::from_name(name)
                .ok_or_else(|| RetryError::UnknownDelayStrategy(name.clone()))?;
            thread::sleep(strategy.duration_for(attempt));
        }
        DelaySelector::Inline(delay) => delay(attempt),
    }
    Ok(())
}

/// Attaches the retry entry point directly to unsigned integer budgets.
///
/// `n.tries(action)` retries every error and pauses with the configured
/// default delay strategy. Budgets wider than `u32` saturate.
///
/// # Examples
///
/// ```rust
/// use tenacity::Tries;
///
/// # tenacity::configure(|config| config.delay_algorithm = "none".into());
/// let value = 3u32.tries(|attempt| {
///     if attempt < 2 {
///         Err("not yet")
///     } else {
///         Ok(attempt)
///     }
/// });
///
/// assert_eq!(value.unwrap(), 2);
/// ```
pub trait Tries: Sized {
    /// Run `action` up to `self` times, retrying every error.
    ///
    /// The action receives the 1-based attempt number.
    fn tries<T, E, F>(self, action: F) -> Result<T, RetryError<E>>
    where
        E: Display,
        F: FnMut(u32) -> Result<T, E>;
}

macro_rules! impl_tries {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Tries for $ty {
                fn tries<T, E, F>(self, action: F) -> Result<T, RetryError<E>>
                where
                    E: Display,
                    F: FnMut(u32) -> Result<T, E>,
                {
                    let budget = u32::try_from(self).unwrap_or(u32::MAX);
                    Retry::new(budget).call(action)
                }
            }
        )*
    };
}

impl_tries!(u8, u16, u32, u64, usize);
