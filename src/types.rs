//! Request shapes shared by several operations.

use serde::{Deserialize, Serialize};

/// Pagination parameters for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number, starting at 1
    pub current: u32,
    /// Number of results per page
    pub size: u32,
}

impl Page {
    pub fn new(current: u32, size: u32) -> Self {
        Page { current, size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page { current: 1, size: 20 }
    }
}

/// Body wrapper for paginated requests: `{"page": {"current": .., "size": ..}}`
#[derive(Debug, Serialize)]
pub(crate) struct PageParams {
    pub page: Page,
}

impl From<Page> for PageParams {
    fn from(page: Page) -> Self {
        PageParams { page }
    }
}
