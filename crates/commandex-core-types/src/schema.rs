//! Canonical schema constants for structured logging
//!
//! Field keys and event names shared by the logging macros, the error
//! facility and the tests that assert on captured events.

pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_REFRESH_ID: &str = "refresh_id";

// Entity identifiers
pub const FIELD_COMMAND_NAME: &str = "command_name";
pub const FIELD_GOAL_ID: &str = "goal_id";
pub const FIELD_PID: &str = "pid";

// Collection sizes
pub const FIELD_COMMAND_COUNT: &str = "command_count";
pub const FIELD_BUCKET_COUNT: &str = "bucket_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
