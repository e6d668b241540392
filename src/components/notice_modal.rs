//! Notice Modal Component
//!
//! Shows the outcome of a booking attempt until dismissed.

use dioxus::prelude::*;
use tatinails_core::Notice;

#[component]
pub fn NoticeModal(
    /// Notice to show, if any
    notice: Option<Notice>,
    /// Callback when the notice is dismissed
    on_close: EventHandler<()>,
) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };

    let class = if notice.is_error() {
        "notice notice--error"
    } else {
        "notice notice--success"
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "{class}",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                p { class: "notice__text", "{notice.message()}" }

                button {
                    class: "btn btn--primary",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}
