//! # Observability & Tracing
//!
//! Structured logging for record services and everything built on them.
//!
//! Actors log their lifecycle (`Actor started`, `Shutdown`) at `info` and every request
//! at `debug`, always with an `entity_type` field naming the record type. Module paths
//! are hidden (`with_target(false)`) because `entity_type` already says where a line
//! comes from.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and load outcomes
//! RUST_LOG=debug cargo run     # every request with full payloads
//! ```

/// Initializes the global tracing subscriber, filtered by `RUST_LOG`.
///
/// Call once at program start; a second call panics because a global subscriber is
/// already installed.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
