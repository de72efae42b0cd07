//! Per-request options for API clients.

mod options;

pub use options::{DEFAULT_API_VERSION, RequestOptions};
