//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for any binary
//! built on this store.
//!
//! ## What Gets Traced
//!
//! - **Writes**: `Created`, `Updated`, `Deleted` at `info`, with `entity_type`, `id` and the
//!   resulting store `size`
//! - **Misses**: updates and deletes of unknown ids at `warn`
//! - **Reads**: `List`, `Get`, `Search` at `debug`, including the full query
//!
//! ## Usage Examples
//!
//! ```bash
//! # Writes and misses only
//! RUST_LOG=info cargo run
//!
//! # Every read, with payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store
//! RUST_LOG=resource_store=debug cargo run
//! ```
//!
//! The compact format hides the module path (`with_target(false)`); the `entity_type` field
//! already says which store a line came from.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `"info"`) is used.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
