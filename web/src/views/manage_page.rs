use dioxus::prelude::*;
use pagedeck::settings_nav_name;
use shared::{PageId, PageRole};
use ui::use_page_store;

/// Page settings screen, reached through the page option menu.
#[allow(non_snake_case)]
#[component]
pub fn ManagePage(role: String, pageId: i64) -> Element {
    let store = use_page_store();
    let page_id = PageId(pageId);
    let role = PageRole::from_key(&role);
    let capabilities = role.capabilities();

    let title = {
        let nav_name = store.nav_name();
        if !nav_name.is_empty() {
            nav_name
        } else {
            store
                .pages()
                .into_iter()
                .find(|page| page.page_id == page_id)
                .map(|page| settings_nav_name(&page.page_name))
                .unwrap_or_else(|| format!("Page #{page_id}"))
        }
    };

    rsx! {
        div { class: "space-y-8 text-white w-full max-w-3xl z-10",
            div {
                h1 { class: "text-4xl font-bold text-deck-accent mb-2 font-display", "{title}" }
                p { class: "text-gray-400 font-mono text-sm", "Role: {role}" }
            }

            if !capabilities.can_configure {
                div { class: "p-4 bg-red-900/20 border border-red-500/50 rounded text-red-400 font-mono text-sm",
                    "Your role does not allow changing this page's settings."
                }
            } else {
                div { class: "bg-deck-panel border border-white/10 p-6 rounded-lg shadow-2xl",
                    h2 { class: "text-xl font-bold mb-4 text-deck-accent font-display", "Permissions" }
                    ul { class: "space-y-2 font-mono text-sm",
                        li { "Edit settings: yes" }
                        li {
                            if capabilities.can_delete {
                                "Delete page: yes"
                            } else {
                                "Delete page: no"
                            }
                        }
                        li {
                            if capabilities.can_leave {
                                "Leave page: yes"
                            } else {
                                "Leave page: no (owner)"
                            }
                        }
                    }
                }
            }
        }
    }
}
