//! caseview engine - the case runtime query facade
//!
//! `CaseRuntimeQueryFacade` normalizes listing input, picks the backend query
//! variant and converts runtime records into response records.
//! `apply_case_query` is the single request-level entry point on top of it.

pub mod case_query;
pub mod facade;
pub mod options;

pub use case_query::{apply_case_query, CaseQuery, CaseQueryResult};
pub use facade::CaseRuntimeQueryFacade;
pub use options::{PageOptions, SortOptions};
