use serde::{Deserialize, Serialize};

/// Sort column plus direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

/// Normalized pagination and sort passed to every runtime query
///
/// Built with one of two constructors: `paged` for queries the runtime cannot
/// sort, `sorted` for everything else. A paged context never carries a sort.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryContext {
    page: Option<u32>,
    page_size: Option<u32>,
    sort: Option<SortSpec>,
}

impl QueryContext {
    pub fn paged(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page,
            page_size,
            sort: None,
        }
    }

    /// `sort_field` must already have been defaulted; see `sort_or_default`.
    pub fn sorted(
        page: Option<u32>,
        page_size: Option<u32>,
        sort_field: impl Into<String>,
        ascending: bool,
    ) -> Self {
        Self {
            page,
            page_size,
            sort: Some(SortSpec {
                field: sort_field.into(),
                ascending,
            }),
        }
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.field.as_str())
    }

    /// Direction of the sort; `None` for paged contexts
    pub fn ascending(&self) -> Option<bool> {
        self.sort.as_ref().map(|s| s.ascending)
    }
}
