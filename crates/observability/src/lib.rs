//! Process-wide logging setup for hosts embedding the navigation guard.
//!
//! The guard crates only emit `tracing` events; installing a subscriber is the
//! host's call.

/// Install the JSON subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Install the JSON subscriber with explicit filter directives, e.g.
/// `"navguard_auth=debug"`. Returns `false` if a subscriber was already set.
pub fn init_with_filter(directives: &str) -> bool {
    tracing::init_with_filter(directives)
}

/// Subscriber construction (filters, layers).
pub mod tracing;
