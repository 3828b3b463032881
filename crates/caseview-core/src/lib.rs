//! caseview core - domain model and policy for the case runtime query facade
//!
//! This crate provides everything the facade needs that is not the facade
//! itself:
//! - Error facility (`ExError`, `ExErrorKind`, `CaseViewError`)
//! - Structured logging facility and operation boundary macros
//! - Facade configuration
//! - Status enumerants, runtime records and response records
//! - `QueryContext` and the status/sort defaulting rules
//! - Collaborator seams: query backend, identity provider, container locator
//! - Runtime record → response record transformations

pub mod backend;
pub mod config;
pub mod container;
pub mod errors;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod query;
pub mod transform;

#[doc(hidden)]
pub use caseview_core_types as core_types;

// Re-export commonly used types
pub use backend::CaseRuntimeQueries;
pub use config::FacadeConfig;
pub use container::{ContainerLocator, ContainerRegistry};
pub use errors::{CaseViewError, ExError, ExErrorKind, Result};
pub use identity::{FixedIdentityProvider, IdentityProvider};
pub use model::{CaseStatus, ListResponse, TaskStatus};
pub use query::QueryContext;
