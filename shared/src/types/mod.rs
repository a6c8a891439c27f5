//! Type definitions shared across server crates
//!
//! - `response` - the `{errno, errmsg, data}` envelope and its code table

pub mod response;

// Re-export commonly used types at module level
pub use response::{ApiResponse, ErrorCode, HealthResponse};
