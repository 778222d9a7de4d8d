//! End-to-end tests for the public retry surface.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tenacity::{configure, Configuration, Logger, Retry, RetryError, Tries};

/// Serializes tests in this binary that touch the global configuration.
static CONFIG_LOCK: Mutex<()> = Mutex::new(());

fn exclusive_configuration() -> MutexGuard<'static, ()> {
    let guard = CONFIG_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    configure(|config| *config = Configuration::default());
    guard
}

#[derive(Default)]
struct MemoryLogger(Mutex<Vec<String>>);

impl MemoryLogger {
    fn lines(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ApiError {
    RateLimited,
    Unauthorized,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => f.write_str("rate limited"),
            Self::Unauthorized => f.write_str("unauthorized"),
        }
    }
}

impl std::error::Error for ApiError {}

#[test]
fn recovers_after_transient_failures() {
    let _guard = exclusive_configuration();
    let sink = Arc::new(MemoryLogger::default());
    configure(|config| {
        config.logger = sink.clone();
        config.delay_algorithm = "none".into();
    });

    let mut calls = 0u32;
    let result = 5u32.tries(|attempt| {
        calls += 1;
        if attempt < 3 {
            Err(ApiError::RateLimited)
        } else {
            Ok("payload")
        }
    });

    assert_eq!(result.unwrap(), "payload");
    assert_eq!(calls, 3);
    assert_eq!(
        sink.lines(),
        vec![
            "ApiError: rate limited (Try Number 1/5)".to_string(),
            "ApiError: rate limited (Try Number 2/5)".to_string(),
        ]
    );
}

#[test]
fn only_listed_errors_are_retried() {
    let _guard = exclusive_configuration();
    configure(|config| {
        config.logger = Arc::new(MemoryLogger::default());
        config.delay_algorithm = "none".into();
    });

    let mut calls = 0u32;
    let result: Result<(), _> = Retry::new(4)
        .rescue_if(|e: &ApiError| matches!(e, ApiError::RateLimited))
        .call(|_| {
            calls += 1;
            Err(ApiError::Unauthorized)
        });

    assert_eq!(result, Err(RetryError::Rejected(ApiError::Unauthorized)));
    assert_eq!(calls, 1);
}

#[test]
fn terminal_error_is_the_original_error() {
    let _guard = exclusive_configuration();
    configure(|config| {
        config.logger = Arc::new(MemoryLogger::default());
        config.delay_algorithm = "none".into();
    });

    let result: Result<(), _> = Retry::new(2).call(|_| Err(ApiError::RateLimited));

    let err = result.unwrap_err();
    assert!(err.is_exhausted());
    assert_eq!(err.attempts(), Some(2));
    assert_eq!(err.into_source(), Some(ApiError::RateLimited));
}

#[test]
fn explicit_delay_overrides_the_configured_default_for_one_call() {
    let _guard = exclusive_configuration();
    configure(|config| {
        config.logger = Arc::new(MemoryLogger::default());
        config.delay_algorithm = "none".into();
    });

    // Explicit by_try with a budget of 2: exactly one pause of one second.
    let start = Instant::now();
    let result: Result<(), _> = Retry::new(2)
        .with_delay_named("by_try")
        .call(|_| Err(ApiError::RateLimited));
    assert!(result.is_err());
    assert!(start.elapsed() >= Duration::from_secs(1));

    // The next call falls back to the configured default: no pauses.
    let start = Instant::now();
    let result: Result<(), _> = Retry::new(3).call(|_| Err(ApiError::RateLimited));
    assert!(result.is_err());
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn configured_none_produces_zero_pauses() {
    let _guard = exclusive_configuration();
    configure(|config| {
        config.logger = Arc::new(MemoryLogger::default());
        config.delay_algorithm = "none".into();
    });

    let start = Instant::now();
    let result: Result<(), RetryError<ApiError>> =
        10u32.tries(|_| Err(ApiError::RateLimited));
    assert!(matches!(
        result,
        Err(RetryError::Exhausted { attempts: 10, .. })
    ));
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn misuse_errors_bypass_the_logger() {
    let _guard = exclusive_configuration();
    let sink = Arc::new(MemoryLogger::default());
    configure(|config| {
        config.logger = sink.clone();
        config.delay_algorithm = "none".into();
    });

    let no_action: Result<(), RetryError<ApiError>> = Retry::new(3).run();
    assert!(matches!(no_action, Err(RetryError::NoAction)));

    let zero_budget: Result<(), RetryError<ApiError>> =
        Retry::new(0).call(|_| Err(ApiError::RateLimited));
    assert!(matches!(zero_budget, Err(RetryError::ZeroBudget)));

    assert!(sink.lines().is_empty());
}
