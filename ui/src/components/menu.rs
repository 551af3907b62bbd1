use dioxus::prelude::*;
use pagedeck::Anchor;

/// Popup menu positioned at `anchor`. Clicking the backdrop or pressing
/// Escape calls `on_close`.
#[component]
pub fn Menu(anchor: Anchor, on_close: EventHandler, children: Element) -> Element {
    let left = anchor.x;
    let top = anchor.y;

    rsx! {
      // Backdrop
      div {
        class: "fixed inset-0 z-40",
        onclick: move |_| on_close.call(()),
      }

      ul {
        class: "fixed z-50 w-[20ch] max-h-[216px] overflow-y-auto py-1 bg-deck-panel border border-white/10 rounded shadow-2xl focus:outline-none",
        style: "left: {left}px; top: {top}px;",
        role: "menu",
        tabindex: "-1",
        onmounted: move |evt| async move {
            let _ = evt.set_focus(true).await;
        },
        onkeydown: move |evt: KeyboardEvent| {
            if evt.key() == Key::Escape {
                on_close.call(());
            }
        },
        onclick: move |evt| evt.stop_propagation(),
        {children}
      }
    }
}

#[component]
pub fn MenuEntry(
    label: String,
    #[props(optional, default)] destructive: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let color = if destructive {
        "text-red-400 hover:text-red-300"
    } else {
        "text-gray-200 hover:text-white"
    };

    rsx! {
      li {
        class: "px-4 py-2 text-xs cursor-pointer hover:bg-white/5 transition-colors {color}",
        role: "menuitem",
        "data-destructive": if destructive { "true" } else { "false" },
        onclick: move |evt| onclick.call(evt),
        "{label}"
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(destructive: bool) -> Element {
        rsx! {
            Menu { anchor: Anchor::new(12.0, 34.5), on_close: |_| {},
                MenuEntry { label: "항목", destructive, onclick: |_| {} }
            }
        }
    }

    fn render(destructive: bool) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { destructive });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn menu_is_placed_at_anchor() {
        let html = render(false);
        assert!(html.contains("left: 12px; top: 34.5px;"), "{html}");
        assert!(html.contains(r#"role="menu""#));
    }

    #[test]
    fn destructive_entry_is_flagged() {
        let html = render(true);
        assert!(html.contains(r#"data-destructive="true""#), "{html}");
        assert!(html.contains("text-red-400"));
    }

    #[test]
    fn plain_entry_is_not_flagged() {
        let html = render(false);
        assert!(html.contains(r#"data-destructive="false""#), "{html}");
        assert!(!html.contains("text-red-400"));
    }
}
