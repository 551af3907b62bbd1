//! Ports the page option menu depends on. The web shell provides browser and
//! router backed implementations; tests provide recording fakes.
//!
//! Everything here runs on the single-threaded browser event loop, so the
//! async port is `?Send` and implementations are shared through `Rc`.

use async_trait::async_trait;
use shared::{PageId, PageSummary};
use std::rc::Rc;

use crate::error::Result;
use crate::routes::ManagePageQuery;
use crate::store::PageCommand;

#[async_trait(?Send)]
pub trait PageBackend {
    /// `DELETE {PAGE_USER_API.LEAVE}/{page_id}`
    async fn leave_page(&self, page_id: PageId, token: Option<&str>) -> Result<()>;

    /// `DELETE {PAGE_API.ADD}/{page_id}`
    async fn delete_page(&self, page_id: PageId, token: Option<&str>) -> Result<()>;

    /// `GET {PAGE_USER_API.LIST}`
    async fn list_pages(&self, token: Option<&str>) -> Result<Vec<PageSummary>>;
}

/// Source of the `Authorization` header value.
pub trait CredentialProvider {
    fn access_token(&self) -> Option<String>;
}

pub trait PageNavigator {
    fn open_manage_page(&self, query: ManagePageQuery);
}

/// Resets transient UI elsewhere on screen (open panels, stale selections).
pub trait UiReset {
    fn click_other(&self);
}

/// Command sink of the global page store.
pub trait PageDispatch {
    fn dispatch(&self, command: PageCommand);
}

#[async_trait(?Send)]
impl<T: PageBackend + ?Sized> PageBackend for Rc<T> {
    async fn leave_page(&self, page_id: PageId, token: Option<&str>) -> Result<()> {
        (**self).leave_page(page_id, token).await
    }

    async fn delete_page(&self, page_id: PageId, token: Option<&str>) -> Result<()> {
        (**self).delete_page(page_id, token).await
    }

    async fn list_pages(&self, token: Option<&str>) -> Result<Vec<PageSummary>> {
        (**self).list_pages(token).await
    }
}

impl<T: CredentialProvider + ?Sized> CredentialProvider for Rc<T> {
    fn access_token(&self) -> Option<String> {
        (**self).access_token()
    }
}

impl<T: PageNavigator + ?Sized> PageNavigator for Rc<T> {
    fn open_manage_page(&self, query: ManagePageQuery) {
        (**self).open_manage_page(query)
    }
}

impl<T: UiReset + ?Sized> UiReset for Rc<T> {
    fn click_other(&self) {
        (**self).click_other()
    }
}

impl<T: PageDispatch + ?Sized> PageDispatch for Rc<T> {
    fn dispatch(&self, command: PageCommand) {
        (**self).dispatch(command)
    }
}

/// A fixed token, for native callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }
}

impl CredentialProvider for StaticCredentials {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}
