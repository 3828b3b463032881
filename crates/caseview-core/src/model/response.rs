//! Response records handed to external consumers
//!
//! Field names serialize in camelCase so the transport layer can put these on
//! the wire with `serde_json` unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered sequence of response items
///
/// Carries no paging metadata; totals, if any, are the backend's business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for ListResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseInstance {
    pub case_id: String,
    pub case_description: String,
    pub case_owner: String,
    /// Numeric case status code (1 open, 2 closed, 3 cancelled)
    pub case_status: i32,
    pub case_definition_id: String,
    pub container_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completion_message: Option<String>,
    pub process_instance_id: i64,
    pub correlation_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseMilestoneDefinition {
    pub identifier: String,
    pub name: String,
    pub mandatory: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStageDefinition {
    pub identifier: String,
    pub name: String,
    pub ad_hoc_fragments: Vec<CaseAdHocFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseDefinition {
    pub identifier: String,
    pub name: String,
    pub version: String,
    pub container_id: String,
    pub case_id_prefix: String,
    pub milestones: Vec<CaseMilestoneDefinition>,
    pub stages: Vec<CaseStageDefinition>,
    pub roles: BTreeMap<String, i32>,
    pub ad_hoc_fragments: Vec<CaseAdHocFragment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    pub id: String,
    pub name: String,
    pub version: String,
    pub package_name: String,
    pub container_id: String,
    pub dynamic: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInstance {
    pub id: i64,
    pub process_id: String,
    pub process_name: String,
    pub process_version: String,
    pub state: i32,
    pub container_id: String,
    pub initiator: String,
    pub started_at: DateTime<Utc>,
    pub correlation_key: String,
    pub parent_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseMilestone {
    pub identifier: String,
    pub name: String,
    pub achieved: bool,
    pub achieved_at: Option<DateTime<Utc>>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStage {
    pub identifier: String,
    pub name: String,
    pub status: String,
    pub ad_hoc_fragments: Vec<CaseAdHocFragment>,
    pub active_nodes: Vec<NodeInstance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseAdHocFragment {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInstance {
    pub id: i64,
    pub name: String,
    pub node_id: String,
    pub node_type: String,
    pub container_id: String,
    pub process_instance_id: i64,
    pub work_item_id: Option<i64>,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: i64,
    pub name: String,
    pub subject: String,
    pub description: String,
    pub status: String,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseFileDataItem {
    pub case_id: String,
    pub name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub last_modified_by: String,
    pub last_modified: DateTime<Utc>,
}

pub type CaseInstanceList = ListResponse<CaseInstance>;
pub type CaseDefinitionList = ListResponse<CaseDefinition>;
pub type ProcessDefinitionList = ListResponse<ProcessDefinition>;
pub type ProcessInstanceList = ListResponse<ProcessInstance>;
pub type CaseMilestoneList = ListResponse<CaseMilestone>;
pub type CaseStageList = ListResponse<CaseStage>;
pub type CaseAdHocFragmentList = ListResponse<CaseAdHocFragment>;
pub type NodeInstanceList = ListResponse<NodeInstance>;
pub type TaskSummaryList = ListResponse<TaskSummary>;
pub type CaseFileDataItemList = ListResponse<CaseFileDataItem>;
