use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use pagedeck::{ManagePageQuery, PageNavigator};

use crate::Route;

/// Router-backed navigation port.
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl PageNavigator for RouterNavigator {
    fn open_manage_page(&self, query: ManagePageQuery) {
        let route = Route::ManagePage {
            role: query.role,
            pageId: query.page_id.0,
        };
        if let Some(failure) = self.navigator.push(route) {
            warn!("Navigation to page settings failed: {:?}", failure);
        }
    }
}
