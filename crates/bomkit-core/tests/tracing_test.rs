//! Tracing setup tests.

use bomkit_core::tracing::{init_tracing, setup::LOG_ENV};

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!(env = LOG_ENV, "tracing initialized");
}
