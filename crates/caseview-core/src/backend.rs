//! Query backend seam
//!
//! `CaseRuntimeQueries` is the read side of the case/process runtime. The
//! facade calls exactly one of these methods per operation; how the runtime
//! executes, persists or indexes is up to the implementation.
//!
//! Status and sort inputs arrive already normalized. Errors returned here are
//! propagated to the facade's caller unchanged.

use crate::errors::Result;
use crate::model::runtime::{
    AdHocFragment, CaseDefinitionDesc, CaseFileItem, CaseInstanceDesc, CaseMilestoneInstance,
    CaseStageInstance, NodeInstanceDesc, ProcessDefinitionDesc, ProcessInstanceDesc,
    TaskSummaryDesc,
};
use crate::model::status::{CaseStatus, TaskStatus};
use crate::query::QueryContext;

pub trait CaseRuntimeQueries: Send + Sync {
    // ── Case instance internals ─────────────────────────────────────────────
    fn case_milestones(
        &self,
        case_id: &str,
        achieved_only: bool,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseMilestoneInstance>>;

    fn case_stages(
        &self,
        case_id: &str,
        active_only: bool,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseStageInstance>>;

    fn ad_hoc_fragments_for_case(&self, case_id: &str) -> Result<Vec<AdHocFragment>>;

    fn active_nodes_for_case(
        &self,
        case_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<NodeInstanceDesc>>;

    fn completed_nodes_for_case(
        &self,
        case_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<NodeInstanceDesc>>;

    fn process_instances_for_case(
        &self,
        case_id: &str,
        states: &[i32],
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessInstanceDesc>>;

    // ── Case instances ──────────────────────────────────────────────────────
    fn case_instances(
        &self,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_by_deployment(
        &self,
        container_id: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_by_definition(
        &self,
        case_definition_id: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_owned_by(
        &self,
        owner: Option<&str>,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_by_role(
        &self,
        role_name: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    /// Cases in which the runtime's current identity holds any role
    fn case_instances_any_role(
        &self,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_by_data_item(
        &self,
        data_item_name: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    fn case_instances_by_data_item_and_value(
        &self,
        data_item_name: &str,
        data_item_value: &str,
        statuses: &[CaseStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseInstanceDesc>>;

    // ── Definitions ─────────────────────────────────────────────────────────
    fn case_definitions(&self, ctx: &QueryContext) -> Result<Vec<CaseDefinitionDesc>>;

    fn case_definitions_filtered(
        &self,
        filter: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseDefinitionDesc>>;

    fn case_definitions_by_deployment(
        &self,
        container_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<CaseDefinitionDesc>>;

    fn case_definition(
        &self,
        container_id: &str,
        case_definition_id: &str,
    ) -> Result<Option<CaseDefinitionDesc>>;

    fn process_definitions(&self, ctx: &QueryContext) -> Result<Vec<ProcessDefinitionDesc>>;

    fn process_definitions_filtered(
        &self,
        filter: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessDefinitionDesc>>;

    fn process_definitions_by_deployment(
        &self,
        container_id: &str,
        ctx: &QueryContext,
    ) -> Result<Vec<ProcessDefinitionDesc>>;

    fn process_definition(
        &self,
        container_id: &str,
        process_id: &str,
    ) -> Result<Option<ProcessDefinitionDesc>>;

    // ── Tasks ───────────────────────────────────────────────────────────────
    fn case_tasks_as_potential_owner(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>>;

    fn case_tasks_as_business_admin(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>>;

    fn case_tasks_as_stakeholder(
        &self,
        case_id: &str,
        user: Option<&str>,
        statuses: &[TaskStatus],
        ctx: &QueryContext,
    ) -> Result<Vec<TaskSummaryDesc>>;

    // ── Case file ───────────────────────────────────────────────────────────
    fn case_file_items(&self, case_id: &str, ctx: &QueryContext) -> Result<Vec<CaseFileItem>>;

    fn case_file_items_by_name(
        &self,
        case_id: &str,
        names: &[String],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseFileItem>>;

    fn case_file_items_by_type(
        &self,
        case_id: &str,
        types: &[String],
        ctx: &QueryContext,
    ) -> Result<Vec<CaseFileItem>>;
}
