use dioxus::logger::tracing::{error, info, warn, Level};
use dioxus::prelude::*;
use dioxus::router::Navigator;
use pagedeck::{
    PageApiClient, PageCommand, PageDispatch, PageListState, Services, ServicesBuilder, CONFIG,
};
use ui::{
    use_page_services, use_page_store, Layout, Navbar, PageList, PageServicesProvider, PageStore,
    UiResetSignal,
};

use navigator::RouterNavigator;
use storage::LocalStorageCredentials;
use views::{HomePage, ManagePage};

mod navigator;
mod storage;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        HomePage {},
        #[route("/manage-page?:role&:pageId")]
        ManagePage { role: String, pageId: i64 },
}

const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Logger already initialized: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Pagedeck" }

        Router::<Route> {}
    }
}

fn build_services(
    navigator: Navigator,
    reset: UiResetSignal,
    store: PageStore,
) -> Result<Services, String> {
    let client = PageApiClient::builder()
        .config(CONFIG.clone())
        .build()
        .map_err(|e| format!("Invalid page API configuration: {e}"))?;

    ServicesBuilder::new()
        .backend(client)
        .credentials(LocalStorageCredentials)
        .navigator(RouterNavigator::new(navigator))
        .reset(reset)
        .dispatch(store)
        .build()
        .map_err(str::to_string)
}

/// Owns the global page store and wires every port the page menus use.
#[component]
fn Shell() -> Element {
    let navigator = use_navigator();
    let state = use_signal(PageListState::default);
    let store = use_context_provider(|| PageStore::new(state));
    let reset_counter = use_signal(|| 0u32);
    let reset = use_context_provider(|| UiResetSignal(reset_counter));
    let mut sidebar_open = use_signal(|| false);

    use_effect(move || {
        if *reset.0.read() > 0 {
            sidebar_open.set(false);
        }
    });

    let services = use_hook(|| build_services(navigator, reset, store));

    match services {
        Ok(services) => rsx! {
            PageServicesProvider { services,
                Workspace { sidebar_open }
            }
        },
        Err(message) => {
            error!("{message}");
            rsx! {
                div { class: "m-8 p-4 bg-red-900/20 border border-red-500/50 rounded text-red-400 font-mono text-sm",
                    "{message}"
                }
            }
        }
    }
}

#[component]
fn Workspace(mut sidebar_open: Signal<bool>) -> Element {
    let services = use_page_services();
    let store = use_page_store();
    let mut load_error = use_signal(|| None::<String>);

    use_future(move || {
        let services = services.clone();
        async move {
            let token = services.access_token();
            match services.backend().list_pages(token.as_deref()).await {
                Ok(pages) => {
                    info!("Loaded {} pages", pages.len());
                    load_error.set(None);
                    store.dispatch(PageCommand::ReplacePages(pages));
                }
                Err(e) => {
                    warn!("Failed to load pages: {}", e);
                    load_error.set(Some(e.user_message()));
                }
            }
        }
    });

    let sidebar_class = if sidebar_open() {
        "block"
    } else {
        "hidden md:block"
    };

    rsx! {
        Layout {
            Navbar { title: store.nav_name(),
                Link {
                    class: "nav-link text-white font-medium border-b-2 border-transparent hover:border-deck-accent pb-0.5",
                    active_class: "border-deck-accent",
                    to: Route::HomePage {},
                    onclick: move |_| store.dispatch(PageCommand::SetNavName(String::new())),
                    "Pages"
                }
                button {
                    class: "md:hidden p-2 hover:bg-white/5 rounded-lg transition-colors cursor-pointer text-gray-300",
                    onclick: move |_| sidebar_open.set(!sidebar_open()),
                    "☰"
                }
            }

            div { class: "flex flex-grow gap-6 py-8 overflow-hidden",
                aside { class: "{sidebar_class} w-64 shrink-0 overflow-y-auto no-scrollbar",
                    h2 { class: "text-xs font-mono uppercase tracking-widest text-gray-500 mb-3 px-3",
                        "My pages"
                    }
                    if let Some(message) = load_error() {
                        div { class: "mb-4 p-3 bg-red-900/20 border border-red-500/50 rounded text-red-400 font-mono text-xs",
                            "{message}"
                        }
                    }
                    PageList {}
                }
                main { class: "flex-grow flex flex-col relative overflow-y-auto w-full no-scrollbar",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
