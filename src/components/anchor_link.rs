//! In-page link with smooth scrolling below the sticky header.

use dioxus::prelude::*;
use tatinails_core::PageEvent;

use crate::context::{fire, use_page, use_viewport};

/// Measure `[target top, page offset, header height]` for a `#id` href.
async fn measure(href: &str) -> Option<(Option<f64>, f64, f64)> {
    let selector = serde_json::to_string(href).ok()?;
    let script = format!(
        r#"
        const target = {selector} === '#' ? null : document.querySelector({selector});
        const header = document.querySelector('.header');
        return [
            target ? target.getBoundingClientRect().top : null,
            window.pageYOffset,
            header ? header.offsetHeight : 0,
        ];
        "#
    );
    document::eval(&script).join().await.ok()
}

/// Anchor that scrolls to its `#target` instead of jumping.
///
/// Set `nav_link` for header links so the mobile menu closes on click.
#[component]
pub fn AnchorLink(
    /// In-page target, e.g. `#services`
    href: String,
    /// CSS class of the link
    #[props(default)]
    class: String,
    /// Whether this is a header navigation link
    #[props(default = false)]
    nav_link: bool,
    children: Element,
) -> Element {
    let page = use_page();
    let viewport = use_viewport();

    let target = href.clone();
    let on_click = move |evt: MouseEvent| {
        // In-page links never navigate
        evt.prevent_default();

        if nav_link {
            fire(page, viewport, PageEvent::NavLinkClicked);
        }

        let href = target.clone();
        spawn(async move {
            let Some((target_top, page_offset, header_height)) = measure(&href).await else {
                tracing::warn!("Could not measure anchor target {}", href);
                return;
            };
            fire(
                page,
                viewport,
                PageEvent::AnchorClicked {
                    href,
                    target_top,
                    page_offset,
                    header_height,
                },
            );
        });
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: on_click,
            {children}
        }
    }
}
