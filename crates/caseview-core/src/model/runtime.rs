//! Records as returned by the case/process runtime
//!
//! These are the backend-native shapes. They never leave the facade directly;
//! `transform` maps them onto the response records in `model::response`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::status::{CaseStatus, TaskStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseInstanceDesc {
    pub case_id: String,
    pub description: String,
    pub owner: String,
    pub status: CaseStatus,
    pub case_definition_id: String,
    pub container_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_message: Option<String>,
    pub process_instance_id: i64,
    pub correlation_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneDef {
    pub id: String,
    pub name: String,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDef {
    pub id: String,
    pub name: String,
    pub ad_hoc_fragments: Vec<AdHocFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDefinitionDesc {
    pub id: String,
    pub name: String,
    pub version: String,
    pub container_id: String,
    pub id_prefix: String,
    pub milestones: Vec<MilestoneDef>,
    pub stages: Vec<StageDef>,
    /// Role name -> cardinality (-1 for unbounded)
    pub roles: BTreeMap<String, i32>,
    pub ad_hoc_fragments: Vec<AdHocFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessDefinitionDesc {
    pub id: String,
    pub name: String,
    pub version: String,
    pub package_name: String,
    pub container_id: String,
    pub dynamic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstanceDesc {
    pub id: i64,
    pub process_id: String,
    pub process_name: String,
    pub process_version: String,
    pub state: i32,
    pub container_id: String,
    pub initiator: String,
    pub started_at: DateTime<Utc>,
    pub correlation_key: String,
    /// -1 for top-level instances
    pub parent_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseMilestoneInstance {
    pub id: String,
    pub name: String,
    pub achieved: bool,
    pub achieved_at: Option<DateTime<Utc>>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStageInstance {
    pub id: String,
    pub name: String,
    pub status: String,
    pub ad_hoc_fragments: Vec<AdHocFragment>,
    pub active_nodes: Vec<NodeInstanceDesc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdHocFragment {
    pub name: String,
    pub node_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInstanceDesc {
    pub id: i64,
    pub name: String,
    pub node_id: String,
    pub node_type: String,
    pub container_id: String,
    pub process_instance_id: i64,
    pub work_item_id: Option<i64>,
    pub completed: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummaryDesc {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: i32,
    pub actual_owner: Option<String>,
    pub created_by: String,
    pub created_on: DateTime<Utc>,
    pub activation_time: Option<DateTime<Utc>>,
    pub expiration_time: Option<DateTime<Utc>>,
    pub process_instance_id: i64,
    pub process_id: String,
    pub container_id: String,
}

/// One named entry in a case file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFileItem {
    pub case_id: String,
    pub name: String,
    pub value: serde_json::Value,
    pub item_type: String,
    pub last_modified_by: String,
    pub last_modified: DateTime<Utc>,
}
