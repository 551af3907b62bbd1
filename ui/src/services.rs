use dioxus::prelude::*;
use pagedeck::{PageCommand, PageDispatch, PageListState, Services, UiReset};
use shared::{PageSummary, SelectedPage};

/// Signal-backed global page store.
#[derive(Clone, Copy, PartialEq)]
pub struct PageStore {
    state: Signal<PageListState>,
}

impl PageStore {
    pub fn new(state: Signal<PageListState>) -> Self {
        Self { state }
    }

    pub fn pages(&self) -> Vec<PageSummary> {
        self.state.read().pages.clone()
    }

    pub fn selected(&self) -> SelectedPage {
        self.state.read().selected
    }

    pub fn nav_name(&self) -> String {
        self.state.read().nav_name.clone()
    }

    pub fn selected_page(&self) -> Option<PageSummary> {
        self.state.read().selected_page().cloned()
    }
}

impl PageDispatch for PageStore {
    fn dispatch(&self, command: PageCommand) {
        let mut state = self.state;
        state.write().reduce(command);
    }
}

pub fn use_page_store() -> PageStore {
    use_context::<PageStore>()
}

/// Bumped every time some control asks the rest of the screen to reset.
#[derive(Clone, Copy, PartialEq)]
pub struct UiResetSignal(pub Signal<u32>);

impl UiReset for UiResetSignal {
    fn click_other(&self) {
        let mut counter = self.0;
        counter += 1;
    }
}

pub fn use_page_services() -> Services {
    use_context::<Services>()
}

#[component]
pub fn PageServicesProvider(services: Services, children: Element) -> Element {
    use_context_provider(|| services);

    rsx! {
        {children}
    }
}
