use dioxus::prelude::*;
use pagedeck::{PageCommand, PageDispatch};
use shared::SelectedPage;

use crate::{use_page_store, PageOptionDropDown};

/// Sidebar list of the user's pages, each with its option menu.
#[component]
pub fn PageList() -> Element {
    let store = use_page_store();
    let pages = store.pages();
    let selected = store.selected();

    rsx! {
      ul { class: "space-y-1",
        if pages.is_empty() {
          li { class: "text-gray-500 font-mono italic text-sm px-3 py-2", "No pages yet." }
        }
        for (idx, page) in pages.into_iter().enumerate() {
          li {
            key: "{page.page_id}",
            class: if selected.is(page.page_id) { "flex items-center justify-between gap-2 px-3 py-2 rounded bg-white/10 border border-deck-accent/40" } else { "flex items-center justify-between gap-2 px-3 py-2 rounded border border-transparent hover:bg-white/5" },
            button {
              class: "flex-1 text-left text-sm text-white truncate cursor-pointer",
              onclick: {
                  let page_id = page.page_id;
                  move |_| store.dispatch(PageCommand::SelectPage(SelectedPage::new(idx, page_id)))
              },
              "{page.page_name}"
            }
            PageOptionDropDown {
              role: page.role.clone(),
              page_id: page.page_id.0,
              page_name: page.page_name.clone(),
            }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageServicesProvider, PageStore};
    use pretty_assertions::assert_eq;
    use async_trait::async_trait;
    use pagedeck::{
        traits::StaticCredentials, ManagePageQuery, PageBackend, PageListState, PageNavigator,
        Result as ApiResult, ServicesBuilder, UiReset,
    };
    use shared::{PageId, PageSummary};

    struct NullBackend;

    #[async_trait(?Send)]
    impl PageBackend for NullBackend {
        async fn leave_page(&self, _: PageId, _: Option<&str>) -> ApiResult<()> {
            Ok(())
        }

        async fn delete_page(&self, _: PageId, _: Option<&str>) -> ApiResult<()> {
            Ok(())
        }

        async fn list_pages(&self, _: Option<&str>) -> ApiResult<Vec<PageSummary>> {
            Ok(vec![])
        }
    }

    struct Noop;

    impl PageNavigator for Noop {
        fn open_manage_page(&self, _: ManagePageQuery) {}
    }

    impl UiReset for Noop {
        fn click_other(&self) {}
    }

    #[component]
    fn Harness(pages: Vec<PageSummary>) -> Element {
        let state = use_signal(|| PageListState {
            pages: pages.clone(),
            selected: SelectedPage::new(1, PageId(2)),
            nav_name: String::new(),
        });
        let store = use_context_provider(|| PageStore::new(state));
        let services = use_hook(|| {
            ServicesBuilder::new()
                .backend(NullBackend)
                .credentials(StaticCredentials::default())
                .navigator(Noop)
                .reset(Noop)
                .dispatch(store)
                .build()
                .unwrap()
        });

        rsx! {
            PageServicesProvider { services, PageList {} }
        }
    }

    fn render(pages: Vec<PageSummary>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { pages });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn lists_each_page_with_its_menu() {
        let html = render(vec![
            PageSummary {
                page_id: PageId(1),
                page_name: "Design".into(),
                role: "OWNER".into(),
            },
            PageSummary {
                page_id: PageId(2),
                page_name: "Backend".into(),
                role: "EDITOR".into(),
            },
        ]);

        assert!(html.contains("Design"), "{html}");
        assert!(html.contains("Backend"));
        assert_eq!(html.matches(r#"aria-haspopup="menu""#).count(), 2);
        assert_eq!(html.matches("border-deck-accent/40").count(), 1);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render(vec![]);
        assert!(html.contains("No pages yet."), "{html}");
    }
}
