//! Logging setup shared by the quickorder binaries.

/// Install the process-wide JSON subscriber with an `info` default filter.
///
/// Only the first call installs anything.
pub fn init() {
    tracing::init("info");
}

/// Subscriber construction (filter, formatter).
pub mod tracing;
