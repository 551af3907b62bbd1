use shared::{PageId, PageSummary, SelectedPage};
use std::cell::RefCell;

use crate::traits::PageDispatch;

/// Commands accepted by the global page store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    RemovePage(PageId),
    SelectPage(SelectedPage),
    SetNavName(String),
    ReplacePages(Vec<PageSummary>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageListState {
    pub pages: Vec<PageSummary>,
    pub selected: SelectedPage,
    pub nav_name: String,
}

impl PageListState {
    pub fn reduce(&mut self, command: PageCommand) {
        match command {
            PageCommand::RemovePage(page_id) => {
                self.pages.retain(|page| page.page_id != page_id);
            }
            PageCommand::SelectPage(selected) => self.selected = selected,
            PageCommand::SetNavName(name) => self.nav_name = name,
            PageCommand::ReplacePages(pages) => {
                let still_there = pages
                    .iter()
                    .any(|page| self.selected.is(page.page_id));
                if !still_there {
                    self.selected = SelectedPage::NONE;
                }
                self.pages = pages;
            }
        }
    }

    pub fn contains(&self, page_id: PageId) -> bool {
        self.pages.iter().any(|page| page.page_id == page_id)
    }

    pub fn selected_page(&self) -> Option<&PageSummary> {
        if self.selected.is_none() {
            return None;
        }
        self.pages
            .iter()
            .find(|page| self.selected.is(page.page_id))
    }
}

impl PageDispatch for RefCell<PageListState> {
    fn dispatch(&self, command: PageCommand) {
        self.borrow_mut().reduce(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(id: i64, name: &str) -> PageSummary {
        PageSummary {
            page_id: PageId(id),
            page_name: name.into(),
            role: "EDITOR".into(),
        }
    }

    fn state() -> PageListState {
        PageListState {
            pages: vec![page(1, "Design"), page(2, "Backend"), page(3, "Ops")],
            selected: SelectedPage::new(1, PageId(2)),
            nav_name: String::new(),
        }
    }

    #[test]
    fn remove_page_drops_only_that_page() {
        let mut state = state();
        state.reduce(PageCommand::RemovePage(PageId(2)));
        assert!(!state.contains(PageId(2)));
        assert_eq!(state.pages, vec![page(1, "Design"), page(3, "Ops")]);
    }

    #[test]
    fn remove_unknown_page_is_noop() {
        let mut state = state();
        state.reduce(PageCommand::RemovePage(PageId(99)));
        assert_eq!(state, self::state());
    }

    #[test]
    fn select_and_name() {
        let mut state = state();
        state.reduce(PageCommand::SelectPage(SelectedPage::NONE));
        state.reduce(PageCommand::SetNavName("Ops 페이지 설정".into()));
        assert!(state.selected.is_none());
        assert_eq!(state.selected_page(), None);
        assert_eq!(state.nav_name, "Ops 페이지 설정");
    }

    #[test]
    fn replace_keeps_selection_when_page_survives() {
        let mut state = state();
        state.reduce(PageCommand::ReplacePages(vec![page(2, "Backend")]));
        assert_eq!(state.selected_page(), Some(&page(2, "Backend")));
    }

    #[test]
    fn replace_clears_selection_when_page_is_gone() {
        let mut state = state();
        state.reduce(PageCommand::ReplacePages(vec![page(5, "New")]));
        assert_eq!(state.selected, SelectedPage::NONE);
    }

    #[test]
    fn refcell_dispatch_reduces() {
        let store = RefCell::new(state());
        store.dispatch(PageCommand::RemovePage(PageId(1)));
        assert_eq!(store.borrow().pages.len(), 2);
    }
}
