use dioxus::prelude::*;
use shared::PageRole;
use ui::use_page_store;

#[component]
pub fn HomePage() -> Element {
    let store = use_page_store();

    let Some(page) = store.selected_page() else {
        return rsx! {
            div { class: "flex flex-col items-center justify-center flex-grow text-center",
                h1 { class: "text-3xl font-bold text-deck-accent mb-2 font-display", "Pages" }
                p { class: "text-gray-400 font-mono", "Select a page from the list to see what you can do with it." }
            }
        };
    };

    let role = PageRole::from_key(&page.role);

    rsx! {
        div { class: "space-y-6 text-white w-full max-w-3xl",
            div {
                h1 { class: "text-4xl font-bold text-deck-accent mb-2 font-display", "{page.page_name}" }
                p { class: "text-gray-400 font-mono text-sm", "Your role: {role}" }
            }
            p { class: "text-gray-500 font-mono text-xs",
                "Use the gear next to the page name to open its settings, leave it or delete it."
            }
        }
    }
}
