//! Lightbox Component
//!
//! Full-screen overlay over the page showing one portfolio image with
//! previous / next / close controls. Arrow keys and Escape arrive through the
//! document-level listener in the page bridge, whatever element has focus.

use dioxus::prelude::*;
use tatinails_core::{LightboxTarget, PageEvent};

use crate::context::{fire, honour, use_page, use_viewport};

#[component]
pub fn Lightbox() -> Element {
    let page = use_page();
    let viewport = use_viewport();

    let Some(image) = (viewport.overlay)() else {
        return rsx! {};
    };

    let click = move |target: LightboxTarget| {
        move |evt: MouseEvent| {
            let effects = fire(page, viewport, PageEvent::Lightbox(target));
            honour(&evt, &effects);
        }
    };

    rsx! {
        div {
            id: "lightbox",
            class: "lightbox",
            onclick: click(LightboxTarget::Backdrop),

            button {
                class: "lightbox-close",
                "aria-label": "Закрыть",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    fire(page, viewport, PageEvent::Lightbox(LightboxTarget::Close));
                },
                "×"
            }

            button {
                class: "lightbox-prev",
                "aria-label": "Предыдущее фото",
                onclick: click(LightboxTarget::Previous),
                "‹"
            }

            img {
                id: "lightbox-image",
                class: "lightbox-image",
                src: "{image.source}",
                alt: "{image.alt_text}",
                // Only the background closes the overlay
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    fire(page, viewport, PageEvent::Lightbox(LightboxTarget::Image));
                },
            }

            button {
                class: "lightbox-next",
                "aria-label": "Следующее фото",
                onclick: click(LightboxTarget::Next),
                "›"
            }
        }
    }
}
