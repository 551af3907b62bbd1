//! Backend endpoint configuration.
//!
//! The client runs in the browser, so there is no process environment to read
//! at runtime. Values are baked in at compile time from `PAGEDECK_*`
//! variables (or a `.env` file, see `build.rs`) and fall back to the defaults
//! below.

use std::sync::LazyLock;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// `PAGE_API.ADD`: page resource, `DELETE {PAGE_PATH}/{id}` deletes a page.
pub const DEFAULT_PAGE_PATH: &str = "/page";
/// `PAGE_USER_API`: membership resource, `GET` lists the caller's pages.
pub const DEFAULT_PAGE_USER_PATH: &str = "/page-user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Backend origin, optionally with a path prefix (default: "http://localhost:8080")
    pub base_url: String,
    /// Page resource path (default: "/page")
    pub page_path: String,
    /// Page membership resource path (default: "/page-user")
    pub page_user_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            page_path: DEFAULT_PAGE_PATH.to_string(),
            page_user_path: DEFAULT_PAGE_USER_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the variables captured at build time.
    pub fn from_build_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: option_env!("PAGEDECK_API_URL")
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            page_path: option_env!("PAGEDECK_PAGE_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.page_path),
            page_user_path: option_env!("PAGEDECK_PAGE_USER_PATH")
                .map(str::to_string)
                .unwrap_or(defaults.page_user_path),
        }
    }

    /// `PAGE_API.ADD`
    pub fn page_path(&self) -> String {
        normalize_path(&self.page_path)
    }

    /// `PAGE_USER_API.LIST`
    pub fn page_user_path(&self) -> String {
        normalize_path(&self.page_user_path)
    }

    /// `PAGE_USER_API.LEAVE`
    pub fn leave_path(&self) -> String {
        format!("{}/leave", self.page_user_path())
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Global endpoint configuration, resolved once.
pub static CONFIG: LazyLock<ApiConfig> = LazyLock::new(ApiConfig::from_build_env);
