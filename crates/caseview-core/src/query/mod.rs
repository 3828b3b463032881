//! Query parameter normalization
//!
//! Turns loosely-specified listing input (optional status names, optional sort
//! field, raw page numbers) into the well-formed values handed to the runtime.
//!
//! Key rules:
//! - Status filters are never empty; each entity kind has a fixed default set
//! - Sorted listings always carry a definite sort field
//! - Page and page size are passed through untouched

pub mod context;
pub mod normalize;

pub use context::{QueryContext, SortSpec};
pub use normalize::{
    non_empty, safe_case_status, safe_process_status, safe_task_status, sort_or_default,
    SortDefault,
};
