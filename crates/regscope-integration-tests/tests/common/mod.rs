//! Shared helpers for the integration test binaries.

#![allow(dead_code)]

use std::sync::Once;

use regscope_core::{JurisdictionId, ProductContext, ProductType};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once per binary.
///
/// Honors `RUST_LOG`; defaults to `warn` so unregistered-jurisdiction
/// events show up in failing test output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

pub fn markets(ids: &[&str]) -> Vec<JurisdictionId> {
    ids.iter()
        .map(|id| JurisdictionId::new(*id).expect("valid jurisdiction id"))
        .collect()
}

pub fn context(description: &str, product_type: ProductType, ids: &[&str]) -> ProductContext {
    ProductContext::new(description, product_type, markets(ids))
}
