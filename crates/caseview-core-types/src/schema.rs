//! Canonical schema constants for structured logging
//!
//! Every facade operation logs through these keys so log pipelines can
//! filter on them without knowing which operation emitted the event.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Query scoping
pub const FIELD_CONTAINER_ID: &str = "container_id";
pub const FIELD_CASE_ID: &str = "case_id";
pub const FIELD_BACKEND_VARIANT: &str = "backend_variant";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
