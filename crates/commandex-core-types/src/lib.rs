//! Core types shared across Commandex crates
//!
//! - **Correlation ids**: `RequestId` for user-initiated operations,
//!   `RefreshId` for individual grouping+render passes
//! - **Schema constants**: canonical structured-logging field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RefreshId, RequestId};
