//! Page context for Tati Nails.
//!
//! Provides the page state, the DOM viewport and the booking form to all
//! components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let page = use_page();
//! let viewport = use_viewport();
//! let effects = fire(page, viewport, PageEvent::MenuButtonClicked);
//! ```

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use dioxus::prelude::*;
use tatinails_core::{
    apply_all, BookingForm, Effect, HttpTransport, ImageDescriptor, Page, PageEvent, Target,
    Viewport,
};

/// Booking form shared by context.
pub type SharedBookingForm = Rc<BookingForm<HttpTransport>>;

/// Viewport backed by component signals and webview scripts.
///
/// Class flags on rendered elements and the lightbox overlay are signals the
/// components read. Body classes, scroll lock and scrolling go through
/// `document::eval` because the body is outside the component tree.
#[derive(Clone, Copy, PartialEq)]
pub struct DomViewport {
    pub offset: Signal<f64>,
    pub height: Signal<f64>,
    pub touch: Signal<bool>,
    pub classes: Signal<HashMap<Target, BTreeSet<&'static str>>>,
    pub overlay: Signal<Option<ImageDescriptor>>,
}

impl DomViewport {
    /// Class attribute for `target`: `base` plus any flags set on it
    pub fn class_list(&self, target: &Target, base: &str) -> String {
        let classes = self.classes.read();
        match classes.get(target) {
            Some(set) if !set.is_empty() => std::iter::once(base)
                .chain(set.iter().copied())
                .collect::<Vec<_>>()
                .join(" "),
            _ => base.to_string(),
        }
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        *self.offset.peek()
    }

    fn inner_height(&self) -> f64 {
        *self.height.peek()
    }

    fn has_touch(&self) -> bool {
        *self.touch.peek()
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ShowOverlay(image) => self.overlay.set(Some(image.clone())),
            Effect::HideOverlay => self.overlay.set(None),
            Effect::LockPageScroll => run_script("document.body.style.overflow = 'hidden';"),
            Effect::UnlockPageScroll => run_script("document.body.style.overflow = 'auto';"),
            Effect::SetClass {
                target: Target::Body,
                class,
                on,
            } => run_script(&format!("document.body.classList.toggle('{class}', {on});")),
            Effect::SetClass { target, class, on } => {
                let mut classes = self.classes.write();
                let set = classes.entry(target.clone()).or_default();
                if *on {
                    set.insert(*class);
                } else {
                    set.remove(class);
                }
            }
            Effect::ScrollTo { top } => run_script(&format!(
                "window.scrollTo({{ top: {top}, behavior: 'smooth' }});"
            )),
            // Honoured on the triggering event, see `honour`
            Effect::PreventDefault | Effect::StopPropagation => {}
        }
    }
}

fn run_script(script: &str) {
    let _ = document::eval(script);
}

/// Create the viewport signals. Call once, in the root component.
pub fn use_dom_viewport() -> DomViewport {
    DomViewport {
        offset: use_signal(|| 0.0),
        height: use_signal(|| 0.0),
        touch: use_signal(|| false),
        classes: use_signal(HashMap::new),
        overlay: use_signal(|| None),
    }
}

/// Hook to access the page state from context.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}

/// Hook to access the DOM viewport from context.
pub fn use_viewport() -> DomViewport {
    use_context::<DomViewport>()
}

/// Hook to access the booking form from context.
pub fn use_booking_form() -> SharedBookingForm {
    use_context::<SharedBookingForm>()
}

/// Dispatch `event` and apply the resulting effects.
///
/// Returns the effects so the caller can honour the event-level ones.
pub fn fire(mut page: Signal<Page>, mut viewport: DomViewport, event: PageEvent) -> Vec<Effect> {
    let effects = page.write().dispatch(event);
    apply_all(&mut viewport, &effects);
    effects
}

/// Apply `PreventDefault` / `StopPropagation` to the triggering event.
pub fn honour<T>(event: &Event<T>, effects: &[Effect]) {
    if effects.contains(&Effect::PreventDefault) {
        event.prevent_default();
    }
    if effects.contains(&Effect::StopPropagation) {
        event.stop_propagation();
    }
}
