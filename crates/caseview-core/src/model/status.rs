//! Status enumerants and their name tables
//!
//! Each table owns its own policy for names it does not recognise; see
//! `query::normalize` for how the policies are applied.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a case instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Closed,
    Cancelled,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 3] = [CaseStatus::Open, CaseStatus::Closed, CaseStatus::Cancelled];

    /// Numeric code stored by the runtime and exposed on case instance records
    pub fn code(self) -> i32 {
        match self {
            CaseStatus::Open => 1,
            CaseStatus::Closed => 2,
            CaseStatus::Cancelled => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::Closed => "closed",
            CaseStatus::Cancelled => "cancelled",
        }
    }

    /// Case-insensitive lookup; `None` for unknown names
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(name))
    }

    /// Map a list of names, silently dropping the ones that are not known
    pub fn from_name_list<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .filter_map(|name| Self::from_name(name.as_ref()))
            .collect()
    }
}

/// Lifecycle status of a human task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Created,
    Ready,
    Reserved,
    InProgress,
    Suspended,
    Completed,
    Failed,
    Error,
    Exited,
    Obsolete,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 10] = [
        TaskStatus::Created,
        TaskStatus::Ready,
        TaskStatus::Reserved,
        TaskStatus::InProgress,
        TaskStatus::Suspended,
        TaskStatus::Completed,
        TaskStatus::Failed,
        TaskStatus::Error,
        TaskStatus::Exited,
        TaskStatus::Obsolete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TaskStatus::Created => "Created",
            TaskStatus::Ready => "Ready",
            TaskStatus::Reserved => "Reserved",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Suspended => "Suspended",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed => "Failed",
            TaskStatus::Error => "Error",
            TaskStatus::Exited => "Exited",
            TaskStatus::Obsolete => "Obsolete",
        }
    }

    /// Exact (case-sensitive) lookup by enumerant name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.name() == name)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Process instance state codes as stored by the runtime
pub mod process_state {
    pub const PENDING: i32 = 0;
    pub const ACTIVE: i32 = 1;
    pub const COMPLETED: i32 = 2;
    pub const ABORTED: i32 = 3;
    pub const SUSPENDED: i32 = 4;
}
