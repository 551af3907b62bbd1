use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use pagedeck::{AlertState, Anchor, MenuItem, MenuState, PageActions};
use shared::{Capabilities, PageRef, PageRole};

use crate::{use_page_services, Alert, Menu, MenuEntry, SettingsIcon};

/// Settings icon that opens the page option menu: page settings, leave page
/// and delete page, each shown only when `role` allows it.
#[component]
pub fn PageOptionDropDown(role: String, page_id: i64, page_name: String) -> Element {
    let services = use_page_services();
    let mut menu = use_signal(MenuState::default);
    let alert = use_signal(AlertState::default);

    let capabilities = PageRole::from_key(&role).capabilities();
    let page = PageRef::new(page_id, page_name);

    let on_select = move |item: MenuItem| {
        let Some(item) = menu.write().select(item, capabilities) else {
            return;
        };
        debug!("Page {} option selected: {:?}", page.page_id, item);
        let actions = PageActions::new(services.clone(), page.clone(), role.clone());
        spawn(async move {
            let outcome = actions.run(item).await;
            let mut alert = alert;
            alert.write().apply(&outcome);
        });
    };

    let anchor = menu.read().anchor();

    rsx! {
      div {
        Alert { state: alert }
        div {
          class: "flex items-center justify-center cursor-pointer text-[#fff4f4] opacity-70 hover:opacity-100 transition-opacity",
          "aria-haspopup": "menu",
          onclick: move |evt: MouseEvent| {
              evt.stop_propagation();
              let point = evt.client_coordinates();
              menu.write().open(Anchor::new(point.x, point.y));
          },
          SettingsIcon {}
        }
        if let Some(anchor) = anchor {
          Menu { anchor, on_close: move |_| menu.write().close(),
            PageOptionMenuList { capabilities, on_select }
          }
        }
      }
    }
}

/// The entries of the page option menu for the given capabilities.
#[component]
pub fn PageOptionMenuList(capabilities: Capabilities, on_select: EventHandler<MenuItem>) -> Element {
    rsx! {
      for item in MenuItem::visible(capabilities) {
        MenuEntry {
          key: "{item.label()}",
          label: item.label().to_string(),
          destructive: item.is_destructive(),
          onclick: move |_| on_select.call(item),
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PageServicesProvider;
    use async_trait::async_trait;
    use pagedeck::{
        traits::StaticCredentials, ManagePageQuery, PageBackend, PageCommand, PageDispatch,
        PageNavigator, Result as ApiResult, Services, ServicesBuilder, UiReset,
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

    impl PageDispatch for Noop {
        fn dispatch(&self, _: PageCommand) {}
    }

    fn services() -> Services {
        ServicesBuilder::new()
            .backend(NullBackend)
            .credentials(StaticCredentials::default())
            .navigator(Noop)
            .reset(Noop)
            .dispatch(Noop)
            .build()
            .unwrap()
    }

    #[component]
    fn ListHarness(role: String) -> Element {
        let capabilities = PageRole::from_key(&role).capabilities();
        rsx! {
            PageOptionMenuList { capabilities, on_select: |_| {} }
        }
    }

    fn render_items(role: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            ListHarness,
            ListHarnessProps {
                role: role.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn editor_sees_settings_and_leave() {
        let html = render_items("EDITOR");
        assert!(html.contains("페이지 설정"), "{html}");
        assert!(html.contains("페이지 떠나기"));
        assert!(!html.contains("페이지 삭제"));
    }

    #[test]
    fn owner_cannot_leave() {
        let html = render_items("OWNER");
        assert!(html.contains("페이지 설정"), "{html}");
        assert!(!html.contains("페이지 떠나기"));
        assert!(html.contains("페이지 삭제"));
    }

    #[test]
    fn maintainer_delete_is_destructive() {
        let html = render_items("MAINTAINER");
        assert!(html.contains("페이지 떠나기"), "{html}");
        assert!(html.contains(r#"data-destructive="true""#));
        assert_eq!(html.matches(r#"data-destructive="true""#).count(), 1);
    }

    #[test]
    fn unknown_role_only_leaves() {
        let html = render_items("GUEST");
        assert!(html.contains("페이지 떠나기"), "{html}");
        assert!(!html.contains("페이지 설정"));
        assert!(!html.contains("페이지 삭제"));
    }

    #[component]
    fn DropDownHarness(role: String) -> Element {
        rsx! {
            PageServicesProvider { services: services(),
                PageOptionDropDown { role, page_id: 3, page_name: "Ops" }
            }
        }
    }

    #[test]
    fn dropdown_starts_closed() {
        let mut dom = VirtualDom::new_with_props(
            DropDownHarness,
            DropDownHarnessProps {
                role: "MAINTAINER".to_string(),
            },
        );
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"aria-haspopup="menu""#), "{html}");
        assert!(!html.contains(r#"role="menu""#));
        assert!(!html.contains("페이지 삭제"));
        assert!(!html.contains(r#"role="alert""#));
    }
}
