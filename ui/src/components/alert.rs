use dioxus::prelude::*;
use pagedeck::{AlertState, AlertTimer};
use shared::AlertSeverity;

use crate::CloseIcon;

/// How long an alert stays on screen before dismissing itself.
pub const ALERT_AUTO_HIDE_MS: u32 = 3_000;

/// Toast bound to an [`AlertState`] signal. Owns its own teardown: the close
/// button and the auto-hide timer both flip `open` back to false. Reopening
/// the alert re-arms the timer, so an older timer never cuts a newer alert short.
#[component]
pub fn Alert(state: Signal<AlertState>) -> Element {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_mut, unused_variables))]
    let mut timer = use_signal(AlertTimer::default);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        if state.read().open {
            let ticket = timer.write().arm();
            spawn(async move {
                gloo_timers::future::TimeoutFuture::new(ALERT_AUTO_HIDE_MS).await;
                let mut state = state;
                timer.peek().expire(ticket, &mut state.write());
            });
        }
    });

    let current = state.read().clone();
    if !current.open {
        return rsx! {};
    }

    rsx! {
        AlertView {
            message: current.message,
            severity: current.severity,
            on_close: move |_| {
                let mut state = state;
                state.write().dismiss();
            },
        }
    }
}

#[component]
pub fn AlertView(message: String, severity: AlertSeverity, on_close: EventHandler) -> Element {
    let palette = match severity {
        AlertSeverity::Info => "bg-blue-900/80 border-blue-500/50 text-blue-200",
        AlertSeverity::Success => "bg-green-900/80 border-green-500/50 text-green-200",
        AlertSeverity::Warning => "bg-yellow-900/80 border-yellow-500/50 text-yellow-200",
        AlertSeverity::Error => "bg-red-900/80 border-red-500/50 text-red-200",
    };
    let severity_key = severity.as_str();

    rsx! {
      div { class: "fixed top-6 left-1/2 -translate-x-1/2 z-[60] pointer-events-none",
        div {
          class: "flex items-center gap-4 px-4 py-3 rounded border shadow-2xl font-mono text-sm pointer-events-auto {palette}",
          role: "alert",
          "data-severity": "{severity_key}",
          span { "{message}" }
          button {
            class: "opacity-70 hover:opacity-100 transition-opacity cursor-pointer",
            onclick: move |_| on_close.call(()),
            CloseIcon {}
          }
        }
      }
    }
}
