//! Case runtime query facade
//!
//! Every operation follows the same shape: normalize the caller's input,
//! resolve the container where the listing is container-scoped, pick exactly
//! one backend query, convert the records. Each runs between a `start` and an
//! `end`/`end_error` event carrying its duration.

use std::sync::Arc;
use std::time::Instant;

use caseview_core::backend::CaseRuntimeQueries;
use caseview_core::config::FacadeConfig;
use caseview_core::container::ContainerLocator;
use caseview_core::errors::{CaseViewError, ExError, Result};
use caseview_core::identity::IdentityProvider;
use caseview_core::model::response::{
    CaseAdHocFragmentList, CaseDefinition, CaseDefinitionList, CaseFileDataItemList,
    CaseInstanceList, CaseMilestoneList, CaseStageList, NodeInstanceList, ProcessDefinition,
    ProcessDefinitionList, ProcessInstanceList, TaskSummaryList,
};
use caseview_core::model::ListResponse;
use caseview_core::query::{
    non_empty, safe_case_status, safe_process_status, safe_task_status, sort_or_default,
    QueryContext, SortDefault,
};
use caseview_core::{log_op_end, log_op_error, log_op_start};

use crate::options::{PageOptions, SortOptions};

/// Which task role a task listing is evaluated against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskRole {
    PotentialOwner,
    BusinessAdmin,
    Stakeholder,
}

/// Read-only query surface over a case runtime
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct CaseRuntimeQueryFacade {
    backend: Arc<dyn CaseRuntimeQueries>,
    identity: Arc<dyn IdentityProvider>,
    locator: Arc<dyn ContainerLocator>,
    bypass_auth_user: bool,
}

impl std::fmt::Debug for CaseRuntimeQueryFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseRuntimeQueryFacade")
            .field("bypass_auth_user", &self.bypass_auth_user)
            .finish_non_exhaustive()
    }
}

/// Wrap `body` in the operation boundary events
fn observe<T>(op: &'static str, body: impl FnOnce() -> Result<T>) -> Result<T> {
    log_op_start!(op);
    let start = Instant::now();

    let result = body();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}

fn paged(page: PageOptions) -> QueryContext {
    QueryContext::paged(page.page, page.page_size)
}

fn sorted(page: PageOptions, sort: &SortOptions, default: SortDefault) -> QueryContext {
    QueryContext::sorted(
        page.page,
        page.page_size,
        sort_or_default(sort.field.as_deref(), default),
        sort.ascending,
    )
}

fn dispatch(op: &'static str, variant: &'static str) {
    tracing::debug!(op = op, backend_variant = variant, "selected backend query");
}

impl CaseRuntimeQueryFacade {
    pub fn new(
        backend: Arc<dyn CaseRuntimeQueries>,
        identity: Arc<dyn IdentityProvider>,
        locator: Arc<dyn ContainerLocator>,
        config: FacadeConfig,
    ) -> Self {
        Self {
            backend,
            identity,
            locator,
            bypass_auth_user: config.bypass_auth_user,
        }
    }

    pub fn bypass_auth_user(&self) -> bool {
        self.bypass_auth_user
    }

    /// The user a user-scoped query runs as
    ///
    /// With `bypass_auth_user` the supplied value is returned as is (even
    /// `None`) and the identity provider is never consulted. Otherwise the
    /// supplied value is ignored.
    pub fn resolve_user(&self, supplied: Option<&str>) -> Option<String> {
        if self.bypass_auth_user {
            supplied.map(str::to_string)
        } else {
            Some(self.identity.current_user_name())
        }
    }

    fn resolve_container(&self, container_id: &str) -> Result<String> {
        self.locator.resolve(container_id)
    }

    // ── Case instance internals ─────────────────────────────────────────────

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_milestones(
        &self,
        container_id: &str,
        case_id: &str,
        achieved_only: bool,
        page: PageOptions,
    ) -> Result<CaseMilestoneList> {
        observe("get_milestones", || {
            tracing::debug!(container_id, case_id, achieved_only, "listing milestones");
            let records = self
                .backend
                .case_milestones(case_id, achieved_only, &paged(page))?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_stages(
        &self,
        container_id: &str,
        case_id: &str,
        active_only: bool,
        page: PageOptions,
    ) -> Result<CaseStageList> {
        observe("get_stages", || {
            tracing::debug!(container_id, case_id, active_only, "listing stages");
            let records = self
                .backend
                .case_stages(case_id, active_only, &paged(page))?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Ad-hoc fragments are not paged
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_ad_hoc_fragments(
        &self,
        container_id: &str,
        case_id: &str,
    ) -> Result<CaseAdHocFragmentList> {
        observe("get_ad_hoc_fragments", || {
            tracing::debug!(container_id, case_id, "listing ad-hoc fragments");
            let records = self.backend.ad_hoc_fragments_for_case(case_id)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_active_nodes(
        &self,
        container_id: &str,
        case_id: &str,
        page: PageOptions,
    ) -> Result<NodeInstanceList> {
        observe("get_active_nodes", || {
            tracing::debug!(container_id, case_id, "listing active nodes");
            let records = self.backend.active_nodes_for_case(case_id, &paged(page))?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_completed_nodes(
        &self,
        container_id: &str,
        case_id: &str,
        page: PageOptions,
    ) -> Result<NodeInstanceList> {
        observe("get_completed_nodes", || {
            tracing::debug!(container_id, case_id, "listing completed nodes");
            let records = self
                .backend
                .completed_nodes_for_case(case_id, &paged(page))?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Process instances of a case; empty `status` means active only
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_process_instances_for_case(
        &self,
        container_id: &str,
        case_id: &str,
        status: &[i32],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<ProcessInstanceList> {
        observe("get_process_instances_for_case", || {
            tracing::debug!(container_id, case_id, "listing case process instances");
            let states = safe_process_status(status);
            let ctx = sorted(page, sort, SortDefault::ProcessInstance);
            let records = self
                .backend
                .process_instances_for_case(case_id, &states, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    // ── Case instances ──────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `InvalidInput` if the container cannot be resolved; backend errors
    /// are returned unchanged.
    pub fn get_case_instances_by_container<S: AsRef<str>>(
        &self,
        container_id: &str,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances_by_container", || {
            let container = self.resolve_container(container_id)?;
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records = self
                .backend
                .case_instances_by_deployment(&container, &statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances_by_definition<S: AsRef<str>>(
        &self,
        container_id: &str,
        case_definition_id: &str,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances_by_definition", || {
            tracing::debug!(container_id, case_definition_id, "listing cases of definition");
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records =
                self.backend
                    .case_instances_by_definition(case_definition_id, &statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Cases owned by `owner`, subject to identity resolution
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances_owned_by<S: AsRef<str>>(
        &self,
        owner: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances_owned_by", || {
            let owner = self.resolve_user(owner);
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records =
                self.backend
                    .case_instances_owned_by(owner.as_deref(), &statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances<S: AsRef<str>>(
        &self,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances", || {
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records = self.backend.case_instances(&statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances_by_role<S: AsRef<str>>(
        &self,
        role_name: &str,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances_by_role", || {
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records = self
                .backend
                .case_instances_by_role(role_name, &statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Cases in which the runtime's current identity holds any role
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances_any_role<S: AsRef<str>>(
        &self,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        observe("get_case_instances_any_role", || {
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records = self.backend.case_instances_any_role(&statuses, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Cases holding a case-file item called `data_item_name`, optionally
    /// restricted to a value; an empty value counts as no value
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instances_by_case_file_data<S: AsRef<str>>(
        &self,
        data_item_name: &str,
        data_item_value: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseInstanceList> {
        const OP: &str = "get_case_instances_by_case_file_data";
        observe(OP, || {
            let statuses = safe_case_status(status);
            let ctx = sorted(page, sort, SortDefault::CaseInstance);
            let records = match non_empty(data_item_value) {
                Some(value) => {
                    dispatch(OP, "case_instances_by_data_item_and_value");
                    self.backend.case_instances_by_data_item_and_value(
                        data_item_name,
                        value,
                        &statuses,
                        &ctx,
                    )?
                }
                None => {
                    dispatch(OP, "case_instances_by_data_item");
                    self.backend
                        .case_instances_by_data_item(data_item_name, &statuses, &ctx)?
                }
            };
            Ok(ListResponse::from_records(&records))
        })
    }

    // ── Definitions ─────────────────────────────────────────────────────────

    /// # Errors
    ///
    /// `InvalidInput` if the container cannot be resolved; backend errors
    /// are returned unchanged.
    pub fn get_case_definitions_by_container(
        &self,
        container_id: &str,
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseDefinitionList> {
        observe("get_case_definitions_by_container", || {
            let container = self.resolve_container(container_id)?;
            let ctx = sorted(page, sort, SortDefault::CaseDefinition);
            let records = self
                .backend
                .case_definitions_by_deployment(&container, &ctx)?;
            Ok(ListResponse::from_records(&records))
        })
    }

    /// All case definitions, or those matching `filter` when it is non-empty
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_definitions(
        &self,
        filter: Option<&str>,
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<CaseDefinitionList> {
        const OP: &str = "get_case_definitions";
        observe(OP, || {
            let ctx = sorted(page, sort, SortDefault::CaseDefinition);
            let records = match non_empty(filter) {
                Some(filter) => {
                    dispatch(OP, "case_definitions_filtered");
                    self.backend.case_definitions_filtered(filter, &ctx)?
                }
                None => {
                    dispatch(OP, "case_definitions");
                    self.backend.case_definitions(&ctx)?
                }
            };
            Ok(ListResponse::from_records(&records))
        })
    }

    /// Process definitions, first match wins: container, then filter, then all
    ///
    /// Sorted by `CaseId` unless the caller names a field.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if a non-empty container cannot be resolved; backend
    /// errors are returned unchanged.
    pub fn get_process_definitions(
        &self,
        filter: Option<&str>,
        container_id: Option<&str>,
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<ProcessDefinitionList> {
        const OP: &str = "get_process_definitions";
        observe(OP, || {
            let ctx = sorted(page, sort, SortDefault::CaseDefinition);
            let records = if let Some(container_id) = non_empty(container_id) {
                let container = self.resolve_container(container_id)?;
                dispatch(OP, "process_definitions_by_deployment");
                self.backend
                    .process_definitions_by_deployment(&container, &ctx)?
            } else if let Some(filter) = non_empty(filter) {
                dispatch(OP, "process_definitions_filtered");
                self.backend.process_definitions_filtered(filter, &ctx)?
            } else {
                dispatch(OP, "process_definitions");
                self.backend.process_definitions(&ctx)?
            };
            Ok(ListResponse::from_records(&records))
        })
    }

    /// # Errors
    ///
    /// `InvalidInput` if the container cannot be resolved, `NotFound` if the
    /// container holds no such case definition.
    pub fn get_case_definition(
        &self,
        container_id: &str,
        case_definition_id: &str,
    ) -> Result<CaseDefinition> {
        const OP: &str = "get_case_definition";
        observe(OP, || {
            let container = self.resolve_container(container_id)?;
            let record = self
                .backend
                .case_definition(&container, case_definition_id)?
                .ok_or_else(|| {
                    ExError::from(CaseViewError::CaseDefinitionNotFound {
                        container_id: container_id.to_string(),
                        case_definition_id: case_definition_id.to_string(),
                    })
                    .with_op(OP)
                })?;
            Ok(CaseDefinition::from(&record))
        })
    }

    /// # Errors
    ///
    /// `InvalidInput` if the container cannot be resolved, `NotFound` if the
    /// container holds no such process definition.
    pub fn get_process_definition(
        &self,
        container_id: &str,
        process_id: &str,
    ) -> Result<ProcessDefinition> {
        const OP: &str = "get_process_definition";
        observe(OP, || {
            let container = self.resolve_container(container_id)?;
            let record = self
                .backend
                .process_definition(&container, process_id)?
                .ok_or_else(|| {
                    ExError::from(CaseViewError::ProcessDefinitionNotFound {
                        container_id: container_id.to_string(),
                        process_id: process_id.to_string(),
                    })
                    .with_op(OP)
                })?;
            Ok(ProcessDefinition::from(&record))
        })
    }

    // ── Tasks ───────────────────────────────────────────────────────────────

    /// Tasks of a case for which the user is a potential owner
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown task status name, checked before the
    /// backend is queried; backend errors are returned unchanged.
    pub fn get_case_tasks<S: AsRef<str>>(
        &self,
        case_id: &str,
        user: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<TaskSummaryList> {
        observe("get_case_tasks", || {
            self.case_tasks(TaskRole::PotentialOwner, case_id, user, status, page, sort)
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::get_case_tasks`].
    pub fn get_case_tasks_as_business_admin<S: AsRef<str>>(
        &self,
        case_id: &str,
        user: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<TaskSummaryList> {
        observe("get_case_tasks_as_business_admin", || {
            self.case_tasks(TaskRole::BusinessAdmin, case_id, user, status, page, sort)
        })
    }

    /// # Errors
    ///
    /// Same as [`Self::get_case_tasks`].
    pub fn get_case_tasks_as_stakeholder<S: AsRef<str>>(
        &self,
        case_id: &str,
        user: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<TaskSummaryList> {
        observe("get_case_tasks_as_stakeholder", || {
            self.case_tasks(TaskRole::Stakeholder, case_id, user, status, page, sort)
        })
    }

    fn case_tasks<S: AsRef<str>>(
        &self,
        role: TaskRole,
        case_id: &str,
        user: Option<&str>,
        status: &[S],
        page: PageOptions,
        sort: &SortOptions,
    ) -> Result<TaskSummaryList> {
        let statuses = safe_task_status(status)?;
        let user = self.resolve_user(user);
        let ctx = sorted(page, sort, SortDefault::Task);
        let records = match role {
            TaskRole::PotentialOwner => self.backend.case_tasks_as_potential_owner(
                case_id,
                user.as_deref(),
                &statuses,
                &ctx,
            )?,
            TaskRole::BusinessAdmin => self.backend.case_tasks_as_business_admin(
                case_id,
                user.as_deref(),
                &statuses,
                &ctx,
            )?,
            TaskRole::Stakeholder => self.backend.case_tasks_as_stakeholder(
                case_id,
                user.as_deref(),
                &statuses,
                &ctx,
            )?,
        };
        Ok(ListResponse::from_records(&records))
    }

    // ── Case file ───────────────────────────────────────────────────────────

    /// Case-file items, first match wins: by name, then by type, then all
    ///
    /// # Errors
    ///
    /// Backend errors are returned unchanged.
    pub fn get_case_instance_data_items(
        &self,
        case_id: &str,
        names: &[String],
        types: &[String],
        page: PageOptions,
    ) -> Result<CaseFileDataItemList> {
        const OP: &str = "get_case_instance_data_items";
        observe(OP, || {
            let ctx = paged(page);
            let records = if !names.is_empty() {
                dispatch(OP, "case_file_items_by_name");
                self.backend.case_file_items_by_name(case_id, names, &ctx)?
            } else if !types.is_empty() {
                dispatch(OP, "case_file_items_by_type");
                self.backend.case_file_items_by_type(case_id, types, &ctx)?
            } else {
                dispatch(OP, "case_file_items");
                self.backend.case_file_items(case_id, &ctx)?
            };
            Ok(ListResponse::from_records(&records))
        })
    }
}
