//! Paging and sort options as supplied by callers

use serde::{Deserialize, Serialize};

/// Raw page request; values are handed to the backend untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageOptions {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Requested sort column and direction
///
/// An absent or empty `field` is replaced by the listing's default column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    pub field: Option<String>,
    pub ascending: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            field: None,
            ascending: true,
        }
    }
}

impl SortOptions {
    pub fn by(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: Some(field.into()),
            ascending,
        }
    }

    pub fn descending() -> Self {
        Self {
            field: None,
            ascending: false,
        }
    }
}
