//! Domain model
//!
//! - `status`: case/task status enumerants and process state codes
//! - `runtime`: backend-native records
//! - `response`: records and list envelopes returned to callers

pub mod response;
pub mod runtime;
pub mod status;

pub use response::ListResponse;
pub use status::{process_state, CaseStatus, TaskStatus};
