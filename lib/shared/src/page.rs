use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier of a page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PageId(pub i64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The page a menu acts on. Owned by the parent, never mutated by the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    pub page_id: PageId,
    pub page_name: String,
}

impl PageRef {
    pub fn new(page_id: impl Into<PageId>, page_name: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            page_name: page_name.into(),
        }
    }
}

/// An entry of the user's page list, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: PageId,
    pub page_name: String,
    /// Raw role string, see [`crate::PageRole`] for its classification.
    pub role: String,
}

/// Sidebar selection. `idx` is the position in the page list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPage {
    pub idx: i64,
    pub page_id: i64,
}

impl SelectedPage {
    /// Nothing selected.
    pub const NONE: SelectedPage = SelectedPage {
        idx: -1,
        page_id: -1,
    };

    pub fn new(idx: usize, page_id: PageId) -> Self {
        Self {
            idx: idx as i64,
            page_id: page_id.0,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn is(&self, page_id: PageId) -> bool {
        self.page_id == page_id.0
    }
}

impl Default for SelectedPage {
    fn default() -> Self {
        Self::NONE
    }
}
