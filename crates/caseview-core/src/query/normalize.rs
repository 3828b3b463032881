//! Defaulting rules for status filters and sort fields
//!
//! Missing input is defaulted, malformed input is rejected. Which input counts
//! as malformed differs per table: unknown case status names are dropped,
//! unknown task status names are an error.

use crate::errors::{CaseViewError, Result};
use crate::model::status::{process_state, CaseStatus, TaskStatus};

/// Status set used when a task listing names no status
pub const DEFAULT_TASK_STATUSES: [TaskStatus; 3] =
    [TaskStatus::Ready, TaskStatus::Reserved, TaskStatus::InProgress];

/// Per-entity-kind sort column used when the caller supplies none
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDefault {
    CaseInstance,
    Task,
    /// Shared by case definition and process definition listings
    CaseDefinition,
    ProcessInstance,
}

impl SortDefault {
    pub fn field(self) -> &'static str {
        match self {
            SortDefault::CaseInstance => "CorrelationKey",
            SortDefault::Task => "t.id",
            SortDefault::CaseDefinition => "CaseId",
            SortDefault::ProcessInstance => "ProcessInstanceId",
        }
    }
}

/// Treat `Some("")` the same as `None`
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The caller's sort field, or the kind's default when absent or empty
pub fn sort_or_default(sort: Option<&str>, default: SortDefault) -> String {
    non_empty(sort).unwrap_or(default.field()).to_string()
}

/// Map case status names, dropping unknown ones; `[Open]` if nothing is left
pub fn safe_case_status<S: AsRef<str>>(names: &[S]) -> Vec<CaseStatus> {
    let mapped = CaseStatus::from_name_list(names);
    if mapped.is_empty() {
        vec![CaseStatus::Open]
    } else {
        mapped
    }
}

/// Map task status names; `[Ready, Reserved, InProgress]` for empty input
///
/// # Errors
///
/// Returns `InvalidInput` naming the first status that is not a known enumerant.
pub fn safe_task_status<S: AsRef<str>>(names: &[S]) -> Result<Vec<TaskStatus>> {
    if names.is_empty() {
        return Ok(DEFAULT_TASK_STATUSES.to_vec());
    }
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            TaskStatus::from_name(name).ok_or_else(|| {
                CaseViewError::UnknownTaskStatus {
                    status: name.to_string(),
                }
                .into()
            })
        })
        .collect()
}

/// `[ACTIVE]` for empty input, otherwise the states unchanged
pub fn safe_process_status(states: &[i32]) -> Vec<i32> {
    if states.is_empty() {
        vec![process_state::ACTIVE]
    } else {
        states.to_vec()
    }
}
