//! The three page option workflows: open settings, leave, delete.

use shared::{PageRef, SelectedPage};
use tracing::{debug, info, warn};

use crate::menu::MenuItem;
use crate::routes::ManagePageQuery;
use crate::services::Services;
use crate::store::PageCommand;

/// What happened after a menu item ran. Only `Failed` reaches the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Navigated,
    Left,
    Deleted,
    Failed { message: String },
    /// The action failed and the failure is deliberately not shown.
    Ignored,
}

/// Navigation title of the page settings screen.
pub fn settings_nav_name(page_name: &str) -> String {
    format!("{page_name} 페이지 설정")
}

pub struct PageActions {
    services: Services,
    page: PageRef,
    role: String,
}

impl PageActions {
    /// `role` is forwarded verbatim to the settings route.
    pub fn new(services: Services, page: PageRef, role: impl Into<String>) -> Self {
        Self {
            services,
            page,
            role: role.into(),
        }
    }

    pub async fn run(&self, item: MenuItem) -> ActionOutcome {
        match item {
            MenuItem::Configure => self.configure(),
            MenuItem::Leave => self.leave().await,
            MenuItem::Delete => self.delete().await,
        }
    }

    pub fn configure(&self) -> ActionOutcome {
        debug!("Opening settings of page {}", self.page.page_id);
        self.services
            .navigator()
            .open_manage_page(ManagePageQuery::new(self.role.clone(), self.page.page_id));
        self.services.reset().click_other();
        self.services
            .dispatch()
            .dispatch(PageCommand::SetNavName(settings_nav_name(
                &self.page.page_name,
            )));
        ActionOutcome::Navigated
    }

    pub async fn leave(&self) -> ActionOutcome {
        let token = self.services.access_token();
        match self
            .services
            .backend()
            .leave_page(self.page.page_id, token.as_deref())
            .await
        {
            Ok(()) => {
                info!("Left page {}", self.page.page_id);
                self.forget_page();
                ActionOutcome::Left
            }
            Err(e) => {
                warn!("Failed to leave page {}: {}", self.page.page_id, e);
                ActionOutcome::Failed {
                    message: e.user_message(),
                }
            }
        }
    }

    pub async fn delete(&self) -> ActionOutcome {
        let token = self.services.access_token();
        match self
            .services
            .backend()
            .delete_page(self.page.page_id, token.as_deref())
            .await
        {
            Ok(()) => {
                info!("Deleted page {}", self.page.page_id);
                self.forget_page();
                ActionOutcome::Deleted
            }
            Err(e) => {
                warn!("Failed to delete page {}: {}", self.page.page_id, e);
                ActionOutcome::Ignored
            }
        }
    }

    fn forget_page(&self) {
        let dispatch = self.services.dispatch();
        dispatch.dispatch(PageCommand::RemovePage(self.page.page_id));
        dispatch.dispatch(PageCommand::SelectPage(SelectedPage::NONE));
    }
}
