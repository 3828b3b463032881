//! Shared fixtures for facade integration tests.
//!
//! `RecordingBackend` answers every query from canned records and records
//! which backend query ran with which normalized arguments.

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use caseview_core::backend::CaseRuntimeQueries;
use caseview_core::errors::{ExError, Result};
use caseview_core::model::runtime::{
    AdHocFragment, CaseDefinitionDesc, CaseFileItem, CaseInstanceDesc, CaseMilestoneInstance,
    CaseStageInstance, MilestoneDef, NodeInstanceDesc, ProcessDefinitionDesc,
    ProcessInstanceDesc, StageDef, TaskSummaryDesc,
};
use caseview_core::model::status::{process_state, CaseStatus, TaskStatus};
use caseview_core::query::QueryContext;
use caseview_core::{ContainerRegistry, FacadeConfig, FixedIdentityProvider};
use caseview_engine::CaseRuntimeQueryFacade;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

pub const CONTAINER: &str = "itorders_1.0";
pub const CONTAINER_ALIAS: &str = "itorders";
pub const CASE_ID: &str = "IT-0000000001";
pub const CASE_DEF_ID: &str = "itorders.orderhardware";
pub const PROCESS_ID: &str = "itorders.place-order";
pub const AUTHENTICATED_USER: &str = "bob";

// ---------------------------------------------------------------------------
// Recorded calls
// ---------------------------------------------------------------------------

/// One backend query as the facade issued it
#[derive(Debug, Clone, PartialEq)]
pub struct BackendCall {
    pub variant: &'static str,
    /// Entity filters in parameter order
    pub args: Vec<String>,
    /// Status filter rendered by name (case/task) or code (process)
    pub statuses: Vec<String>,
    pub user: Option<String>,
    pub ctx: Option<QueryContext>,
}

impl BackendCall {
    fn new(variant: &'static str) -> Self {
        Self {
            variant,
            args: Vec::new(),
            statuses: Vec::new(),
            user: None,
            ctx: None,
        }
    }

    fn arg(mut self, value: impl Into<String>) -> Self {
        self.args.push(value.into());
        self
    }

    fn case_statuses(mut self, statuses: &[CaseStatus]) -> Self {
        self.statuses = statuses.iter().map(|s| s.name().to_string()).collect();
        self
    }

    fn task_statuses(mut self, statuses: &[TaskStatus]) -> Self {
        self.statuses = statuses.iter().map(|s| s.name().to_string()).collect();
        self
    }

    fn states(mut self, states: &[i32]) -> Self {
        self.statuses = states.iter().map(i32::to_string).collect();
        self
    }

    fn user(mut self, user: Option<&str>) -> Self {
        self.user = user.map(str::to_string);
        self
    }

    fn ctx(mut self, ctx: &QueryContext) -> Self {
        self.ctx = Some(ctx.clone());
        self
    }
}

// ---------------------------------------------------------------------------
// RecordingBackend
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<BackendCall>>,
    failure: Mutex<Option<ExError>>,
    pub case_instances: Vec<CaseInstanceDesc>,
    pub case_definitions: Vec<CaseDefinitionDesc>,
    pub process_definitions: Vec<ProcessDefinitionDesc>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            case_instances: vec![
                case_instance("IT-0000000001", CaseStatus::Open),
                case_instance("IT-0000000002", CaseStatus::Closed),
            ],
            case_definitions: vec![case_definition()],
            process_definitions: vec![process_definition()],
            ..Self::default()
        }
    }

    /// Every subsequent query fails with `err`
    pub fn failing_with(err: ExError) -> Self {
        let backend = Self::new();
        *backend.failure.lock().unwrap() = Some(err);
        backend
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The only recorded call
    ///
    /// # Panics
    ///
    /// Panics unless exactly one call was recorded.
    pub fn single_call(&self) -> BackendCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one backend call, got {:?}", calls);
        calls[0].clone()
    }

    fn record(&self, call: BackendCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl CaseRuntimeQueries for RecordingBackend {
    fn case_milestones(
        &self,
        case_id: &str,
        achieved_only: bool,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseMilestoneInstance>> {
        self.record(
            BackendCall::new("case_milestones")
                .arg(case_id)
                .arg(achieved_only.to_string())
                .ctx(ctx),
        )?;
        Ok(vec![CaseMilestoneInstance {
            id: "_M1".to_string(),
            name: "Order placed".to_string(),
            achieved: true,
            achieved_at: Some(ts(10)),
            status: "Completed".to_string(),
        }])
    }

    fn case_stages(
        &self,
        case_id: &str,
        active_only: bool,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseStageInstance>> {
        self.record(
            BackendCall::new("case_stages")
                .arg(case_id)
                .arg(active_only.to_string())
                .ctx(ctx),
        )?;
        Ok(vec![CaseStageInstance {
            id: "_S1".to_string(),
            name: "Prepare".to_string(),
            status: "Active".to_string(),
            ad_hoc_fragments: vec![ad_hoc_fragment()],
            active_nodes: vec![node(1, false)],
        }])
    }

    fn ad_hoc_fragments_for_case(&self, case_id: &str) -> Result<Vec<AdHocFragment>> {
        self.record(BackendCall::new("ad_hoc_fragments_for_case").arg(case_id))?;
        Ok(vec![ad_hoc_fragment()])
    }

    fn active_nodes_for_case(
        &self,
        case_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<NodeInstanceDesc>> {
        self.record(BackendCall::new("active_nodes_for_case").arg(case_id).ctx(ctx))?;
        Ok(vec![node(1, false)])
    }

    fn completed_nodes_for_case(
        &self,
        case_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<NodeInstanceDesc>> {
        self.record(
            BackendCall::new("completed_nodes_for_case")
                .arg(case_id)
                .ctx(ctx),
        )?;
        Ok(vec![node(2, true), node(3, true)])
    }

    fn process_instances_for_case(
        &self,
        case_id: &str,
        states: &[i32],
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessInstanceDesc>> {
        self.record(
            BackendCall::new("process_instances_for_case")
                .arg(case_id)
                .states(states)
                .ctx(ctx),
        )?;
        Ok(vec![ProcessInstanceDesc {
            id: 7,
            process_id: PROCESS_ID.to_string(),
            process_name: "Place order".to_string(),
            process_version: "1.0".to_string(),
            state: process_state::ACTIVE,
            container_id: CONTAINER.to_string(),
            initiator: "john".to_string(),
            started_at: ts(0),
            correlation_key: CASE_ID.to_string(),
            parent_id: -1,
        }])
    }

    fn case_instances(
        &self,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances")
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_by_deployment(
        &self,
        container_id: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_by_deployment")
                .arg(container_id)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_by_definition(
        &self,
        case_definition_id: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_by_definition")
                .arg(case_definition_id)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_owned_by(
        &self,
        owner: Option<&str>,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_owned_by")
                .user(owner)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_by_role(
        &self,
        role_name: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_by_role")
                .arg(role_name)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_any_role(
        &self,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_any_role")
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_by_data_item(
        &self,
        data_item_name: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_by_data_item")
                .arg(data_item_name)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_instances_by_data_item_and_value(
        &self,
        data_item_name: &str,
        data_item_value: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>> {
        self.record(
            BackendCall::new("case_instances_by_data_item_and_value")
                .arg(data_item_name)
                .arg(data_item_value)
                .case_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(self.case_instances.clone())
    }

    fn case_definitions(&self, ctx: &QueryContext) -> Result<Vec<CaseDefinitionDesc>> {
        self.record(BackendCall::new("case_definitions").ctx(ctx))?;
        Ok(self.case_definitions.clone())
    }

    fn case_definitions_filtered(
        &self,
        filter: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseDefinitionDesc>> {
        self.record(
            BackendCall::new("case_definitions_filtered")
                .arg(filter)
                .ctx(ctx),
        )?;
        Ok(self.case_definitions.clone())
    }

    fn case_definitions_by_deployment(
        &self,
        container_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseDefinitionDesc>> {
        self.record(
            BackendCall::new("case_definitions_by_deployment")
                .arg(container_id)
                .ctx(ctx),
        )?;
        Ok(self.case_definitions.clone())
    }

    fn case_definition(
        &self,
        container_id: &str,
        case_definition_id: &str,
    ) -> Result<Option<CaseDefinitionDesc>> {
        self.record(
            BackendCall::new("case_definition")
                .arg(container_id)
                .arg(case_definition_id),
        )?;
        Ok(self
            .case_definitions
            .iter()
            .find(|d| d.container_id == container_id && d.id == case_definition_id)
            .cloned())
    }

    fn process_definitions(&self, ctx: &QueryContext) -> Result<Vec<ProcessDefinitionDesc>> {
        self.record(BackendCall::new("process_definitions").ctx(ctx))?;
        Ok(self.process_definitions.clone())
    }

    fn process_definitions_filtered(
        &self,
        filter: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessDefinitionDesc>> {
        self.record(
            BackendCall::new("process_definitions_filtered")
                .arg(filter)
                .ctx(ctx),
        )?;
        Ok(self.process_definitions.clone())
    }

    fn process_definitions_by_deployment(
        &self,
        container_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessDefinitionDesc>> {
        self.record(
            BackendCall::new("process_definitions_by_deployment")
                .arg(container_id)
                .ctx(ctx),
        )?;
        Ok(self.process_definitions.clone())
    }

    fn process_definition(
        &self,
        container_id: &str,
        process_id: &str,
    ) -> Result<Option<ProcessDefinitionDesc>> {
        self.record(
            BackendCall::new("process_definition")
                .arg(container_id)
                .arg(process_id),
        )?;
        Ok(self
            .process_definitions
            .iter()
            .find(|d| d.container_id == container_id && d.id == process_id)
            .cloned())
    }

    fn case_tasks_as_potential_owner(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>> {
        self.record(
            BackendCall::new("case_tasks_as_potential_owner")
                .arg(case_id)
                .user(user)
                .task_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(vec![task(1, TaskStatus::Ready)])
    }

    fn case_tasks_as_business_admin(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>> {
        self.record(
            BackendCall::new("case_tasks_as_business_admin")
                .arg(case_id)
                .user(user)
                .task_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(vec![task(2, TaskStatus::Reserved)])
    }

    fn case_tasks_as_stakeholder(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>> {
        self.record(
            BackendCall::new("case_tasks_as_stakeholder")
                .arg(case_id)
                .user(user)
                .task_statuses(statuses)
                .ctx(ctx),
        )?;
        Ok(vec![task(3, TaskStatus::InProgress)])
    }

    fn case_file_items(&self, case_id: &str, ctx: &QueryContext) -> Result<Vec<CaseFileItem>> {
        self.record(BackendCall::new("case_file_items").arg(case_id).ctx(ctx))?;
        Ok(vec![
            file_item("amount", json!("150.00")),
            file_item("hwSpec", json!({ "cpu": 8 })),
        ])
    }

    fn case_file_items_by_name(
        &self,
        case_id: &str,
        names: &[String],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseFileItem>> {
        let mut call = BackendCall::new("case_file_items_by_name").arg(case_id);
        call.args.extend(names.iter().cloned());
        self.record(call.ctx(ctx))?;
        Ok(names
            .iter()
            .map(|name| file_item(name, json!("value")))
            .collect())
    }

    fn case_file_items_by_type(
        &self,
        case_id: &str,
        types: &[String],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseFileItem>> {
        let mut call = BackendCall::new("case_file_items_by_type").arg(case_id);
        call.args.extend(types.iter().cloned());
        self.record(call.ctx(ctx))?;
        Ok(vec![file_item("amount", json!("150.00"))])
    }
}

// ---------------------------------------------------------------------------
// Facade setup
// ---------------------------------------------------------------------------

pub fn registry() -> ContainerRegistry {
    ContainerRegistry::new()
        .with_container(CONTAINER)
        .with_alias(CONTAINER_ALIAS, CONTAINER)
}

/// Facade over `backend` authenticating as `bob`
pub fn facade(backend: &Arc<RecordingBackend>, bypass_auth_user: bool) -> CaseRuntimeQueryFacade {
    CaseRuntimeQueryFacade::new(
        backend.clone(),
        Arc::new(FixedIdentityProvider::new(AUTHENTICATED_USER)),
        Arc::new(registry()),
        FacadeConfig::with_bypass_auth_user(bypass_auth_user),
    )
}

pub fn setup() -> (Arc<RecordingBackend>, CaseRuntimeQueryFacade) {
    let backend = Arc::new(RecordingBackend::new());
    let facade = facade(&backend, false);
    (backend, facade)
}

// ---------------------------------------------------------------------------
// Record fixtures
// ---------------------------------------------------------------------------

pub fn ts(minutes: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 8, minutes, 0).unwrap()
}

pub fn case_instance(case_id: &str, status: CaseStatus) -> CaseInstanceDesc {
    CaseInstanceDesc {
        case_id: case_id.to_string(),
        description: format!("Order {}", case_id),
        owner: "john".to_string(),
        status,
        case_definition_id: CASE_DEF_ID.to_string(),
        container_id: CONTAINER.to_string(),
        started_at: ts(0),
        completed_at: None,
        completion_message: None,
        process_instance_id: 1,
        correlation_key: case_id.to_string(),
    }
}

pub fn ad_hoc_fragment() -> AdHocFragment {
    AdHocFragment {
        name: "Prepare hardware spec".to_string(),
        node_type: "HumanTaskNode".to_string(),
    }
}

pub fn case_definition() -> CaseDefinitionDesc {
    let mut roles = BTreeMap::new();
    roles.insert("owner".to_string(), 1);
    roles.insert("manager".to_string(), 1);
    roles.insert("supplier".to_string(), 2);
    CaseDefinitionDesc {
        id: CASE_DEF_ID.to_string(),
        name: "Order for IT hardware".to_string(),
        version: "1.0".to_string(),
        container_id: CONTAINER.to_string(),
        id_prefix: "IT".to_string(),
        milestones: vec![MilestoneDef {
            id: "_M1".to_string(),
            name: "Order placed".to_string(),
            mandatory: false,
        }],
        stages: vec![StageDef {
            id: "_S1".to_string(),
            name: "Prepare".to_string(),
            ad_hoc_fragments: vec![ad_hoc_fragment()],
        }],
        roles,
        ad_hoc_fragments: vec![ad_hoc_fragment()],
    }
}

pub fn process_definition() -> ProcessDefinitionDesc {
    ProcessDefinitionDesc {
        id: PROCESS_ID.to_string(),
        name: "Place order".to_string(),
        version: "1.0".to_string(),
        package_name: "org.jbpm.demo.itorders".to_string(),
        container_id: CONTAINER.to_string(),
        dynamic: false,
    }
}

pub fn node(id: i64, completed: bool) -> NodeInstanceDesc {
    NodeInstanceDesc {
        id,
        name: format!("Node {}", id),
        node_id: format!("_N{}", id),
        node_type: "HumanTaskNode".to_string(),
        container_id: CONTAINER.to_string(),
        process_instance_id: 1,
        work_item_id: Some(id * 10),
        completed,
        timestamp: ts(id as u32),
    }
}

pub fn task(id: i64, status: TaskStatus) -> TaskSummaryDesc {
    TaskSummaryDesc {
        id,
        name: "Prepare hardware spec".to_string(),
        subject: String::new(),
        description: String::new(),
        status,
        priority: 0,
        actual_owner: None,
        created_by: "john".to_string(),
        created_on: ts(1),
        activation_time: Some(ts(1)),
        expiration_time: None,
        process_instance_id: 1,
        process_id: PROCESS_ID.to_string(),
        container_id: CONTAINER.to_string(),
    }
}

pub fn file_item(name: &str, value: serde_json::Value) -> CaseFileItem {
    CaseFileItem {
        case_id: CASE_ID.to_string(),
        name: name.to_string(),
        value,
        item_type: "java.lang.String".to_string(),
        last_modified_by: "john".to_string(),
        last_modified: ts(2),
    }
}
