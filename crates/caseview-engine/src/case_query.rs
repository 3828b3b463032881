//! Request-level query surface.
//!
//! `apply_case_query` is the single entry point for callers that receive
//! listing requests as data (an RPC layer, a job queue). Each `CaseQuery`
//! variant maps onto exactly one facade operation.

use caseview_core::errors::Result;
use caseview_core::model::response::{
    CaseAdHocFragmentList, CaseDefinition, CaseDefinitionList, CaseFileDataItemList,
    CaseInstanceList, CaseMilestoneList, CaseStageList, NodeInstanceList, ProcessDefinition,
    ProcessDefinitionList, ProcessInstanceList, TaskSummaryList,
};
use caseview_core_types::RequestContext;
use serde::{Deserialize, Serialize};

use crate::facade::CaseRuntimeQueryFacade;
use crate::options::{PageOptions, SortOptions};

// ---------------------------------------------------------------------------
// CaseQuery
// ---------------------------------------------------------------------------

/// Read-only listing requests supported by the facade.
///
/// Status lists are raw names (case and task listings) or raw state codes
/// (process instances); an empty list selects the listing's default set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum CaseQuery {
    // ── Case instance internals ──────────────────────────────────────────────
    Milestones {
        container_id: String,
        case_id: String,
        achieved_only: bool,
        #[serde(default)]
        page: PageOptions,
    },
    Stages {
        container_id: String,
        case_id: String,
        active_only: bool,
        #[serde(default)]
        page: PageOptions,
    },
    AdHocFragments {
        container_id: String,
        case_id: String,
    },
    ActiveNodes {
        container_id: String,
        case_id: String,
        #[serde(default)]
        page: PageOptions,
    },
    CompletedNodes {
        container_id: String,
        case_id: String,
        #[serde(default)]
        page: PageOptions,
    },
    ProcessInstancesForCase {
        container_id: String,
        case_id: String,
        #[serde(default)]
        status: Vec<i32>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },

    // ── Case instances ───────────────────────────────────────────────────────
    CaseInstancesByContainer {
        container_id: String,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstancesByDefinition {
        container_id: String,
        case_definition_id: String,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstancesOwnedBy {
        owner: Option<String>,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstances {
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstancesByRole {
        role_name: String,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstancesAnyRole {
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseInstancesByCaseFileData {
        data_item_name: String,
        data_item_value: Option<String>,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },

    // ── Definitions ──────────────────────────────────────────────────────────
    CaseDefinitionsByContainer {
        container_id: String,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseDefinitions {
        filter: Option<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    ProcessDefinitions {
        filter: Option<String>,
        container_id: Option<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseDefinition {
        container_id: String,
        case_definition_id: String,
    },
    ProcessDefinition {
        container_id: String,
        process_id: String,
    },

    // ── Tasks ────────────────────────────────────────────────────────────────
    CaseTasks {
        case_id: String,
        user: Option<String>,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseTasksAsBusinessAdmin {
        case_id: String,
        user: Option<String>,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },
    CaseTasksAsStakeholder {
        case_id: String,
        user: Option<String>,
        #[serde(default)]
        status: Vec<String>,
        #[serde(default)]
        page: PageOptions,
        #[serde(default)]
        sort: SortOptions,
    },

    // ── Case file ────────────────────────────────────────────────────────────
    CaseFileData {
        case_id: String,
        #[serde(default)]
        names: Vec<String>,
        #[serde(default)]
        types: Vec<String>,
        #[serde(default)]
        page: PageOptions,
    },
}

impl CaseQuery {
    /// Facade operation this query maps to
    pub fn op_name(&self) -> &'static str {
        match self {
            CaseQuery::Milestones { .. } => "get_milestones",
            CaseQuery::Stages { .. } => "get_stages",
            CaseQuery::AdHocFragments { .. } => "get_ad_hoc_fragments",
            CaseQuery::ActiveNodes { .. } => "get_active_nodes",
            CaseQuery::CompletedNodes { .. } => "get_completed_nodes",
            CaseQuery::ProcessInstancesForCase { .. } => "get_process_instances_for_case",
            CaseQuery::CaseInstancesByContainer { .. } => "get_case_instances_by_container",
            CaseQuery::CaseInstancesByDefinition { .. } => "get_case_instances_by_definition",
            CaseQuery::CaseInstancesOwnedBy { .. } => "get_case_instances_owned_by",
            CaseQuery::CaseInstances { .. } => "get_case_instances",
            CaseQuery::CaseInstancesByRole { .. } => "get_case_instances_by_role",
            CaseQuery::CaseInstancesAnyRole { .. } => "get_case_instances_any_role",
            CaseQuery::CaseInstancesByCaseFileData { .. } => {
                "get_case_instances_by_case_file_data"
            }
            CaseQuery::CaseDefinitionsByContainer { .. } => "get_case_definitions_by_container",
            CaseQuery::CaseDefinitions { .. } => "get_case_definitions",
            CaseQuery::ProcessDefinitions { .. } => "get_process_definitions",
            CaseQuery::CaseDefinition { .. } => "get_case_definition",
            CaseQuery::ProcessDefinition { .. } => "get_process_definition",
            CaseQuery::CaseTasks { .. } => "get_case_tasks",
            CaseQuery::CaseTasksAsBusinessAdmin { .. } => "get_case_tasks_as_business_admin",
            CaseQuery::CaseTasksAsStakeholder { .. } => "get_case_tasks_as_stakeholder",
            CaseQuery::CaseFileData { .. } => "get_case_instance_data_items",
        }
    }
}

// ---------------------------------------------------------------------------
// CaseQueryResult
// ---------------------------------------------------------------------------

/// All possible results from `apply_case_query`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaseQueryResult {
    Milestones(CaseMilestoneList),
    Stages(CaseStageList),
    AdHocFragments(CaseAdHocFragmentList),
    Nodes(NodeInstanceList),
    ProcessInstances(ProcessInstanceList),
    CaseInstances(CaseInstanceList),
    CaseDefinitions(CaseDefinitionList),
    CaseDefinition(Box<CaseDefinition>),
    ProcessDefinitions(ProcessDefinitionList),
    ProcessDefinition(ProcessDefinition),
    Tasks(TaskSummaryList),
    CaseFileData(CaseFileDataItemList),
}

// ---------------------------------------------------------------------------
// apply_case_query
// ---------------------------------------------------------------------------

/// Run one listing request against `facade`.
///
/// Executes inside a `case_query` span carrying the request id. Errors come
/// back tagged with the request id and, when present, the trace id.
///
/// # Errors
///
/// Whatever the mapped facade operation returns.
pub fn apply_case_query(
    facade: &CaseRuntimeQueryFacade,
    query: CaseQuery,
    ctx: &RequestContext,
) -> Result<CaseQueryResult> {
    let span = tracing::info_span!(
        "case_query",
        request_id = %ctx.request_id,
        query = query.op_name(),
    );
    let _guard = span.enter();

    dispatch(facade, query).map_err(|e| {
        let e = e.with_request_id(ctx.request_id.clone());
        match &ctx.trace_id {
            Some(trace_id) => e.with_trace_id(trace_id.clone()),
            None => e,
        }
    })
}

fn dispatch(facade: &CaseRuntimeQueryFacade, query: CaseQuery) -> Result<CaseQueryResult> {
    match query {
        // ── Case instance internals ─────────────────────────────────────────
        CaseQuery::Milestones {
            container_id,
            case_id,
            achieved_only,
            page,
        } => facade
            .get_milestones(&container_id, &case_id, achieved_only, page)
            .map(CaseQueryResult::Milestones),

        CaseQuery::Stages {
            container_id,
            case_id,
            active_only,
            page,
        } => facade
            .get_stages(&container_id, &case_id, active_only, page)
            .map(CaseQueryResult::Stages),

        CaseQuery::AdHocFragments {
            container_id,
            case_id,
        } => facade
            .get_ad_hoc_fragments(&container_id, &case_id)
            .map(CaseQueryResult::AdHocFragments),

        CaseQuery::ActiveNodes {
            container_id,
            case_id,
            page,
        } => facade
            .get_active_nodes(&container_id, &case_id, page)
            .map(CaseQueryResult::Nodes),

        CaseQuery::CompletedNodes {
            container_id,
            case_id,
            page,
        } => facade
            .get_completed_nodes(&container_id, &case_id, page)
            .map(CaseQueryResult::Nodes),

        CaseQuery::ProcessInstancesForCase {
            container_id,
            case_id,
            status,
            page,
            sort,
        } => facade
            .get_process_instances_for_case(&container_id, &case_id, &status, page, &sort)
            .map(CaseQueryResult::ProcessInstances),

        // ── Case instances ──────────────────────────────────────────────────
        CaseQuery::CaseInstancesByContainer {
            container_id,
            status,
            page,
            sort,
        } => facade
            .get_case_instances_by_container(&container_id, &status, page, &sort)
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstancesByDefinition {
            container_id,
            case_definition_id,
            status,
            page,
            sort,
        } => facade
            .get_case_instances_by_definition(
                &container_id,
                &case_definition_id,
                &status,
                page,
                &sort,
            )
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstancesOwnedBy {
            owner,
            status,
            page,
            sort,
        } => facade
            .get_case_instances_owned_by(owner.as_deref(), &status, page, &sort)
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstances { status, page, sort } => facade
            .get_case_instances(&status, page, &sort)
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstancesByRole {
            role_name,
            status,
            page,
            sort,
        } => facade
            .get_case_instances_by_role(&role_name, &status, page, &sort)
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstancesAnyRole { status, page, sort } => facade
            .get_case_instances_any_role(&status, page, &sort)
            .map(CaseQueryResult::CaseInstances),

        CaseQuery::CaseInstancesByCaseFileData {
            data_item_name,
            data_item_value,
            status,
            page,
            sort,
        } => facade
            .get_case_instances_by_case_file_data(
                &data_item_name,
                data_item_value.as_deref(),
                &status,
                page,
                &sort,
            )
            .map(CaseQueryResult::CaseInstances),

        // ── Definitions ─────────────────────────────────────────────────────
        CaseQuery::CaseDefinitionsByContainer {
            container_id,
            page,
            sort,
        } => facade
            .get_case_definitions_by_container(&container_id, page, &sort)
            .map(CaseQueryResult::CaseDefinitions),

        CaseQuery::CaseDefinitions { filter, page, sort } => facade
            .get_case_definitions(filter.as_deref(), page, &sort)
            .map(CaseQueryResult::CaseDefinitions),

        CaseQuery::ProcessDefinitions {
            filter,
            container_id,
            page,
            sort,
        } => facade
            .get_process_definitions(filter.as_deref(), container_id.as_deref(), page, &sort)
            .map(CaseQueryResult::ProcessDefinitions),

        CaseQuery::CaseDefinition {
            container_id,
            case_definition_id,
        } => facade
            .get_case_definition(&container_id, &case_definition_id)
            .map(|def| CaseQueryResult::CaseDefinition(Box::new(def))),

        CaseQuery::ProcessDefinition {
            container_id,
            process_id,
        } => facade
            .get_process_definition(&container_id, &process_id)
            .map(CaseQueryResult::ProcessDefinition),

        // ── Tasks ───────────────────────────────────────────────────────────
        CaseQuery::CaseTasks {
            case_id,
            user,
            status,
            page,
            sort,
        } => facade
            .get_case_tasks(&case_id, user.as_deref(), &status, page, &sort)
            .map(CaseQueryResult::Tasks),

        CaseQuery::CaseTasksAsBusinessAdmin {
            case_id,
            user,
            status,
            page,
            sort,
        } => facade
            .get_case_tasks_as_business_admin(&case_id, user.as_deref(), &status, page, &sort)
            .map(CaseQueryResult::Tasks),

        CaseQuery::CaseTasksAsStakeholder {
            case_id,
            user,
            status,
            page,
            sort,
        } => facade
            .get_case_tasks_as_stakeholder(&case_id, user.as_deref(), &status, page, &sort)
            .map(CaseQueryResult::Tasks),

        // ── Case file ───────────────────────────────────────────────────────
        CaseQuery::CaseFileData {
            case_id,
            names,
            types,
            page,
        } => facade
            .get_case_instance_data_items(&case_id, &names, &types, page)
            .map(CaseQueryResult::CaseFileData),
    }
}
