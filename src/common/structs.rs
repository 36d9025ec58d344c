//! Common data structures.

/// Error type used while booting the service.
pub mod custom_error;
