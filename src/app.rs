use std::rc::Rc;

use dioxus::prelude::*;
use serde::Deserialize;
use tatinails_core::{apply_all, BookingForm, NavKey, Page, PageEvent, TrackedElement};

use crate::components::portfolio_entries;
use crate::context::use_dom_viewport;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The salon landing page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Reports page geometry on ready, on every scroll and once fully loaded,
/// and forwards every keydown on the document.
///
/// Elements marked `data-reveal` are tracked for fade-in.
const PAGE_BRIDGE: &str = r#"
document.body.classList.add('loading');
const tracked = () => Array.from(document.querySelectorAll('[data-reveal]'))
    .map(el => [el.id, el.getBoundingClientRect().top]);
const snapshot = (kind) => ({
    kind,
    offset: window.pageYOffset,
    height: window.innerHeight,
    touch: ('ontouchstart' in window) || navigator.maxTouchPoints > 0,
    elements: tracked(),
});
dioxus.send(snapshot('ready'));
window.addEventListener('scroll', () => dioxus.send(snapshot('scroll')));
document.addEventListener('keydown', (e) => dioxus.send({ ...snapshot('key'), key: e.key }));
if (document.readyState === 'complete') {
    dioxus.send(snapshot('load'));
} else {
    window.addEventListener('load', () => dioxus.send(snapshot('load')));
}
"#;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SnapshotKind {
    Ready,
    Scroll,
    Load,
    Key,
}

/// Page geometry as reported by the bridge script.
#[derive(Debug, Deserialize)]
struct Snapshot {
    kind: SnapshotKind,
    offset: f64,
    height: f64,
    touch: bool,
    elements: Vec<(String, f64)>,
    /// Key name, only present on keydown
    #[serde(default)]
    key: Option<String>,
}

impl Snapshot {
    fn tracked(&self) -> Vec<TrackedElement> {
        self.elements
            .iter()
            .map(|(id, top)| TrackedElement::new(id.clone(), *top))
            .collect()
    }

    fn nav_key(&self) -> NavKey {
        self.key.as_deref().map_or(NavKey::Other, NavKey::from_key_name)
    }
}

/// Root application component.
///
/// Provides global styles, page context, and routing.
#[component]
pub fn App() -> Element {
    let config = crate::site_config();
    let transport = match crate::transport() {
        Ok(transport) => transport,
        Err(e) => {
            tracing::error!("Booking transport unavailable: {}", e);
            return rsx! {
                style { {GLOBAL_STYLES} }
                p { class: "startup-error", "{e}" }
            };
        }
    };

    // Page state is built once from the portfolio markup
    let mut page = use_signal(|| Page::new(&config, &portfolio_entries()));
    let mut viewport = use_dom_viewport();
    let booking_form = use_hook(|| Rc::new(BookingForm::new(transport, &config)));

    use_context_provider(|| page);
    use_context_provider(|| viewport);
    use_context_provider(|| booking_form);

    // Forward page geometry into the page state
    use_future(move || async move {
        let mut bridge = document::eval(PAGE_BRIDGE);
        loop {
            let snapshot = match bridge.recv::<Snapshot>().await {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    tracing::warn!("Page bridge closed: {:?}", e);
                    break;
                }
            };

            viewport.offset.set(snapshot.offset);
            viewport.height.set(snapshot.height);
            viewport.touch.set(snapshot.touch);

            let effects = match snapshot.kind {
                SnapshotKind::Ready => page.write().ready_in(&viewport, snapshot.tracked()),
                SnapshotKind::Scroll => page.write().scrolled_in(&viewport, snapshot.tracked()),
                SnapshotKind::Load => page.write().dispatch(PageEvent::Loaded),
                // The gallery ignores keys while closed
                SnapshotKind::Key => page.write().dispatch(PageEvent::Key(snapshot.nav_key())),
            };
            apply_all(&mut viewport, &effects);
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tatinails_core::{GalleryEntry, RecordingViewport, SiteConfig};

    fn parse(json: &str) -> Snapshot {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_keydown_snapshot_carries_key() {
        let snapshot = parse(
            r#"{"kind":"key","offset":0,"height":800,"touch":false,"elements":[],"key":"Escape"}"#,
        );
        assert!(matches!(snapshot.kind, SnapshotKind::Key));
        assert_eq!(snapshot.nav_key(), NavKey::Escape);
    }

    #[test]
    fn test_scroll_snapshot_has_no_key() {
        let snapshot = parse(
            r#"{"kind":"scroll","offset":120,"height":800,"touch":false,"elements":[["prices",640]]}"#,
        );
        assert_eq!(snapshot.nav_key(), NavKey::Other);
        assert_eq!(snapshot.tracked().len(), 1);
    }

    #[test]
    fn test_document_keydown_closes_open_gallery() {
        let entries = vec![
            GalleryEntry::linked("works/1.jpg", "works/1.jpg", "One"),
            GalleryEntry::linked("works/2.jpg", "works/2.jpg", "Two"),
        ];
        let mut page = Page::new(&SiteConfig::default(), &entries);
        let mut viewport = RecordingViewport::default();

        let effects = page.dispatch(PageEvent::EntryClicked(1));
        apply_all(&mut viewport, &effects);
        assert!(viewport.overlay.is_some());

        // Focus can be anywhere on the page; the listener sits on the document
        let keydown = parse(
            r#"{"kind":"key","offset":0,"height":800,"touch":false,"elements":[],"key":"Escape"}"#,
        );
        let effects = page.dispatch(PageEvent::Key(keydown.nav_key()));
        apply_all(&mut viewport, &effects);
        assert!(viewport.overlay.is_none());
    }
}
