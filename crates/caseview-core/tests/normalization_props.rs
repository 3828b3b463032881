//! Property tests for status and sort defaulting.

use caseview_core::model::status::{process_state, CaseStatus, TaskStatus};
use caseview_core::query::{
    safe_case_status, safe_process_status, safe_task_status, sort_or_default, SortDefault,
};
use caseview_core::ExErrorKind;
use proptest::prelude::*;

const SORT_DEFAULTS: [SortDefault; 4] = [
    SortDefault::CaseInstance,
    SortDefault::Task,
    SortDefault::CaseDefinition,
    SortDefault::ProcessInstance,
];

fn any_sort_default() -> impl Strategy<Value = SortDefault> {
    (0..SORT_DEFAULTS.len()).prop_map(|i| SORT_DEFAULTS[i])
}

fn is_task_status_name(name: &str) -> bool {
    TaskStatus::from_name(name).is_some()
}

proptest! {
    #[test]
    fn prop_non_empty_sort_is_verbatim(field in ".{1,32}", default in any_sort_default()) {
        prop_assert_eq!(sort_or_default(Some(&field), default), field);
    }

    #[test]
    fn prop_missing_sort_uses_default(default in any_sort_default(), empty in any::<bool>()) {
        let input = if empty { Some("") } else { None };
        prop_assert_eq!(sort_or_default(input, default), default.field());
    }

    #[test]
    fn prop_case_status_is_never_empty(names in prop::collection::vec("[a-zA-Z]{0,10}", 0..6)) {
        let statuses = safe_case_status(&names);
        prop_assert!(!statuses.is_empty());
        let any_known = names.iter().any(|n| CaseStatus::from_name(n).is_some());
        if !any_known {
            prop_assert_eq!(statuses, vec![CaseStatus::Open]);
        }
    }

    #[test]
    fn prop_unknown_task_status_fails(
        known in prop::collection::vec(prop::sample::select(TaskStatus::ALL.to_vec()), 0..4),
        unknown in "[a-z]{1,12}",
    ) {
        prop_assume!(!is_task_status_name(&unknown));
        let mut names: Vec<String> = known.iter().map(|s| s.name().to_string()).collect();
        names.push(unknown);
        let err = safe_task_status(&names).unwrap_err();
        prop_assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn prop_known_task_statuses_map_in_order(
        known in prop::collection::vec(prop::sample::select(TaskStatus::ALL.to_vec()), 1..6),
    ) {
        let names: Vec<&str> = known.iter().map(|s| s.name()).collect();
        prop_assert_eq!(safe_task_status(&names).unwrap(), known);
    }

    #[test]
    fn prop_process_status_passthrough(states in prop::collection::vec(any::<i32>(), 1..6)) {
        prop_assert_eq!(safe_process_status(&states), states);
    }
}

#[test]
fn test_empty_process_status_is_active() {
    assert_eq!(safe_process_status(&[]), vec![process_state::ACTIVE]);
}
