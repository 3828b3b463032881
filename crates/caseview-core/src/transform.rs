//! Runtime record → response record conversions
//!
//! All conversions are pure and keep every field. The only representation
//! changes: case status becomes its numeric code, task status its name, and
//! case-file values a display string.

use crate::model::response::{
    CaseAdHocFragment, CaseDefinition, CaseFileDataItem, CaseInstance, CaseMilestone,
    CaseMilestoneDefinition, CaseStage, CaseStageDefinition, ListResponse, NodeInstance,
    ProcessDefinition, ProcessInstance, TaskSummary,
};
use crate::model::runtime::{
    AdHocFragment, CaseDefinitionDesc, CaseFileItem, CaseInstanceDesc, CaseMilestoneInstance,
    CaseStageInstance, MilestoneDef, NodeInstanceDesc, ProcessDefinitionDesc,
    ProcessInstanceDesc, StageDef, TaskSummaryDesc,
};

impl<T> ListResponse<T> {
    /// Transform runtime records in order
    pub fn from_records<'a, R>(records: &'a [R]) -> Self
    where
        R: 'a,
        T: From<&'a R>,
    {
        records.iter().map(T::from).collect()
    }
}

impl From<&CaseInstanceDesc> for CaseInstance {
    fn from(desc: &CaseInstanceDesc) -> Self {
        CaseInstance {
            case_id: desc.case_id.clone(),
            case_description: desc.description.clone(),
            case_owner: desc.owner.clone(),
            case_status: desc.status.code(),
            case_definition_id: desc.case_definition_id.clone(),
            container_id: desc.container_id.clone(),
            started_at: desc.started_at,
            completed_at: desc.completed_at,
            completion_message: desc.completion_message.clone(),
            process_instance_id: desc.process_instance_id,
            correlation_key: desc.correlation_key.clone(),
        }
    }
}

impl From<&AdHocFragment> for CaseAdHocFragment {
    fn from(fragment: &AdHocFragment) -> Self {
        CaseAdHocFragment {
            name: fragment.name.clone(),
            node_type: fragment.node_type.clone(),
        }
    }
}

impl From<&MilestoneDef> for CaseMilestoneDefinition {
    fn from(def: &MilestoneDef) -> Self {
        CaseMilestoneDefinition {
            identifier: def.id.clone(),
            name: def.name.clone(),
            mandatory: def.mandatory,
        }
    }
}

impl From<&StageDef> for CaseStageDefinition {
    fn from(def: &StageDef) -> Self {
        CaseStageDefinition {
            identifier: def.id.clone(),
            name: def.name.clone(),
            ad_hoc_fragments: def.ad_hoc_fragments.iter().map(Into::into).collect(),
        }
    }
}

impl From<&CaseDefinitionDesc> for CaseDefinition {
    fn from(desc: &CaseDefinitionDesc) -> Self {
        CaseDefinition {
            identifier: desc.id.clone(),
            name: desc.name.clone(),
            version: desc.version.clone(),
            container_id: desc.container_id.clone(),
            case_id_prefix: desc.id_prefix.clone(),
            milestones: desc.milestones.iter().map(Into::into).collect(),
            stages: desc.stages.iter().map(Into::into).collect(),
            roles: desc.roles.clone(),
            ad_hoc_fragments: desc.ad_hoc_fragments.iter().map(Into::into).collect(),
        }
    }
}

impl From<&ProcessDefinitionDesc> for ProcessDefinition {
    fn from(desc: &ProcessDefinitionDesc) -> Self {
        ProcessDefinition {
            id: desc.id.clone(),
            name: desc.name.clone(),
            version: desc.version.clone(),
            package_name: desc.package_name.clone(),
            container_id: desc.container_id.clone(),
            dynamic: desc.dynamic,
        }
    }
}

impl From<&ProcessInstanceDesc> for ProcessInstance {
    fn from(desc: &ProcessInstanceDesc) -> Self {
        ProcessInstance {
            id: desc.id,
            process_id: desc.process_id.clone(),
            process_name: desc.process_name.clone(),
            process_version: desc.process_version.clone(),
            state: desc.state,
            container_id: desc.container_id.clone(),
            initiator: desc.initiator.clone(),
            started_at: desc.started_at,
            correlation_key: desc.correlation_key.clone(),
            parent_id: desc.parent_id,
        }
    }
}

impl From<&CaseMilestoneInstance> for CaseMilestone {
    fn from(milestone: &CaseMilestoneInstance) -> Self {
        CaseMilestone {
            identifier: milestone.id.clone(),
            name: milestone.name.clone(),
            achieved: milestone.achieved,
            achieved_at: milestone.achieved_at,
            status: milestone.status.clone(),
        }
    }
}

impl From<&NodeInstanceDesc> for NodeInstance {
    fn from(node: &NodeInstanceDesc) -> Self {
        NodeInstance {
            id: node.id,
            name: node.name.clone(),
            node_id: node.node_id.clone(),
            node_type: node.node_type.clone(),
            container_id: node.container_id.clone(),
            process_instance_id: node.process_instance_id,
            work_item_id: node.work_item_id,
            completed: node.completed,
            date: node.timestamp,
        }
    }
}

impl From<&CaseStageInstance> for CaseStage {
    fn from(stage: &CaseStageInstance) -> Self {
        CaseStage {
            identifier: stage.id.clone(),
            name: stage.name.clone(),
            status: stage.status.clone(),
            ad_hoc_fragments: stage.ad_hoc_fragments.iter().map(Into::into).collect(),
            active_nodes: stage.active_nodes.iter().map(Into::into).collect(),
        }
    }
}

impl From<&TaskSummaryDesc> for TaskSummary {
    fn from(task: &TaskSummaryDesc) -> Self {
        TaskSummary {
            id: task.id,
            name: task.name.clone(),
            subject: task.subject.clone(),
            description: task.description.clone(),
            status: task.status.name().to_string(),
            priority: task.priority,
            actual_owner: task.actual_owner.clone(),
            created_by: task.created_by.clone(),
            created_on: task.created_on,
            activation_time: task.activation_time,
            expiration_time: task.expiration_time,
            process_instance_id: task.process_instance_id,
            process_id: task.process_id.clone(),
            container_id: task.container_id.clone(),
        }
    }
}

impl From<&CaseFileItem> for CaseFileDataItem {
    fn from(item: &CaseFileItem) -> Self {
        CaseFileDataItem {
            case_id: item.case_id.clone(),
            name: item.name.clone(),
            value: display_value(&item.value),
            item_type: item.item_type.clone(),
            last_modified_by: item.last_modified_by.clone(),
            last_modified: item.last_modified,
        }
    }
}

/// Strings unquoted, everything else as compact JSON
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
