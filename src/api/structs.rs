//! Data structures for the operations API.

/// Query parameter for API token authentication.
pub mod query_token;

/// Shared data context for API request handlers.
pub mod api_service_data;
