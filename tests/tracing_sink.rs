//! The tracing-backed logger sink, exercised through a real retry.

#![cfg(feature = "tracing")]

use std::fmt;
use std::sync::Arc;

use tenacity::{configure, Retry, RetryError, TracingLogger};
use tracing_test::traced_test;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Flaky;

impl fmt::Display for Flaky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Flaky")
    }
}

#[traced_test]
#[test]
fn attempt_lines_reach_the_tracing_pipeline() {
    configure(|config| {
        config.logger = Arc::new(TracingLogger);
        config.delay_algorithm = "none".into();
    });

    let result: Result<(), RetryError<Flaky>> = Retry::new(2).call(|_| Err(Flaky));

    assert!(matches!(
        result,
        Err(RetryError::Exhausted { attempts: 2, .. })
    ));
    assert!(logs_contain("Flaky (Try Number 1/2)"));
    assert!(logs_contain("FAILED Permanently after 2 tries; Flaky"));
}
