use shared::PageId;
use url::form_urlencoded;

/// Path of the page settings screen (`PATH.MANAGE_PAGE`).
pub const MANAGE_PAGE_PATH: &str = "/manage-page";

/// Query carried to the page settings screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagePageQuery {
    pub role: String,
    pub page_id: PageId,
}

impl ManagePageQuery {
    pub fn new(role: impl Into<String>, page_id: PageId) -> Self {
        Self {
            role: role.into(),
            page_id,
        }
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("role", &self.role)
            .append_pair("pageId", &self.page_id.to_string())
            .finish()
    }

    pub fn href(&self) -> String {
        format!("{MANAGE_PAGE_PATH}?{}", self.to_query_string())
    }
}
