//! Tracing setup shared by binaries built on the framework.
//!
//! Structured logging via the `tracing` crate: actors log lifecycle events
//! (startup, shutdown, final store size) and every operation with the
//! entity type and id as structured fields; client wrappers add
//! `#[instrument]` spans so a request's path is visible in the output.
//!
//! Verbosity is controlled through `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # compact operation log
//! RUST_LOG=debug cargo run    # full payloads on entry
//! ```

/// Initializes the global subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields replace module paths
        .compact()
        .init();
}
