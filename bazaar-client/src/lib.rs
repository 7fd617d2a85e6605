//! Bazaar Client - HTTP client for the storefront backend
//!
//! Thin async request/response calls for order browsing and the
//! cancel/reschedule mutation flow. Every call is a single attempt
//! with no retry; on failure the caller re-fetches order details to
//! resynchronize rather than mutating local state.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{AttributeTable, Order, VendorScheduleConfig};
pub use shared::order::{OrderStatus, StatusUpdateRequest};
