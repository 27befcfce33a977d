//! Shared setup for the integration tests
//!
//! `RUST_LOG=debug cargo test` prints the library's tracing events.

use thermal_comfort_core::Field;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The single value of a one-element result
pub fn single(field: &Field) -> f64 {
    field
        .to_scalar()
        .unwrap_or_else(|| panic!("expected one element, got shape {}", field.shape()))
}
