use dioxus::prelude::*;

/// Stacked-cards mark: two offset sheets behind a front page.
#[component]
fn DeckMark() -> Element {
    rsx! {
        svg {
            class: "w-8 h-8 text-deck-accent",
            view_box: "0 0 32 32",
            fill: "none",
            "aria-hidden": "true",
            rect { x: "10", y: "3", width: "16", height: "20", rx: "2", fill: "currentColor", opacity: "0.25" }
            rect { x: "8", y: "6", width: "16", height: "20", rx: "2", fill: "currentColor", opacity: "0.5" }
            rect { x: "6", y: "9", width: "16", height: "20", rx: "2", fill: "currentColor" }
            path { d: "M10 15h8M10 19h8M10 23h5", stroke: "white", stroke_width: "1.5", stroke_linecap: "round" }
        }
    }
}

/// Top bar: brand, the selected page's name as a breadcrumb, and whatever
/// controls the caller passes in.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        header { class: "flex items-center gap-6 h-16 px-2 border-b border-white/5",
            div { class: "flex items-center gap-2 shrink-0",
                DeckMark {}
                span { class: "text-lg font-semibold tracking-tight text-white", "Pagedeck" }
            }
            if !title.is_empty() {
                div { class: "flex items-center gap-2 min-w-0 text-sm",
                    span { class: "text-gray-600", "›" }
                    span { class: "truncate max-w-xs text-gray-300", "data-testid": "nav-title", "{title}" }
                }
            }
            nav { class: "ml-auto flex items-center gap-4", {children} }
        }
    }
}
