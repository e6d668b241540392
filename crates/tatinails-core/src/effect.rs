//! Side-effect commands and the viewport capability that applies them.
//!
//! ```text
//! ┌────────────┐  PageEvent   ┌──────────┐  Vec<Effect>  ┌────────────┐
//! │ DOM / host │ ───────────▶ │   Page   │ ────────────▶ │  Viewport  │
//! └────────────┘              └──────────┘               └────────────┘
//! ```
//!
//! Handlers are pure functions of their state and the event payload. The
//! [`Viewport`] is the only thing that knows about the real page.

use std::collections::{BTreeSet, HashMap};

use crate::gallery::ImageDescriptor;

/// Page element a class flag is set on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Body,
    Header,
    Nav,
    MenuButton,
    /// An element tracked for fade-in, by id
    Reveal(String),
}

/// A command for the viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Render the lightbox overlay with this image
    ShowOverlay(ImageDescriptor),
    HideOverlay,
    LockPageScroll,
    UnlockPageScroll,
    /// Suppress the triggering element's default action
    PreventDefault,
    /// Keep the triggering event from reaching enclosing handlers
    StopPropagation,
    SetClass {
        target: Target,
        class: &'static str,
        on: bool,
    },
    /// Smooth-scroll the page to an absolute offset
    ScrollTo { top: f64 },
}

impl Effect {
    pub(crate) fn add(target: Target, class: &'static str) -> Self {
        Effect::SetClass {
            target,
            class,
            on: true,
        }
    }

    pub(crate) fn remove(target: Target, class: &'static str) -> Self {
        Effect::SetClass {
            target,
            class,
            on: false,
        }
    }
}

/// The slice of browser state the page reads and writes.
pub trait Viewport {
    /// Vertical scroll offset of the page
    fn scroll_offset(&self) -> f64;

    /// Height of the visible area
    fn inner_height(&self) -> f64;

    /// Whether the device reports touch input
    fn has_touch(&self) -> bool;

    /// Carry out one effect
    fn apply(&mut self, effect: &Effect);
}

/// Apply effects in order.
pub fn apply_all<V: Viewport + ?Sized>(viewport: &mut V, effects: &[Effect]) {
    for effect in effects {
        viewport.apply(effect);
    }
}

/// In-memory viewport that records everything applied to it.
///
/// Tracks the resulting class sets, overlay, and scroll lock so tests can
/// assert on page state rather than on effect lists.
#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub offset: f64,
    pub height: f64,
    pub touch: bool,
    pub applied: Vec<Effect>,
    pub classes: HashMap<Target, BTreeSet<&'static str>>,
    pub overlay: Option<ImageDescriptor>,
    pub scroll_locked: bool,
    pub scrolled_to: Option<f64>,
}

impl RecordingViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Whether `target` currently carries `class`
    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.classes
            .get(target)
            .is_some_and(|set| set.contains(class))
    }
}

impl Viewport for RecordingViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn inner_height(&self) -> f64 {
        self.height
    }

    fn has_touch(&self) -> bool {
        self.touch
    }

    fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ShowOverlay(image) => self.overlay = Some(image.clone()),
            Effect::HideOverlay => self.overlay = None,
            Effect::LockPageScroll => self.scroll_locked = true,
            Effect::UnlockPageScroll => self.scroll_locked = false,
            Effect::SetClass { target, class, on } => {
                let set = self.classes.entry(target.clone()).or_default();
                if *on {
                    set.insert(class);
                } else {
                    set.remove(class);
                }
            }
            Effect::ScrollTo { top } => self.scrolled_to = Some(*top),
            Effect::PreventDefault | Effect::StopPropagation => {}
        }
        self.applied.push(effect.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_viewport_tracks_classes() {
        let mut viewport = RecordingViewport::new(800.0);
        apply_all(
            &mut viewport,
            &[
                Effect::add(Target::Header, "scroll-down"),
                Effect::add(Target::Body, "loaded"),
                Effect::remove(Target::Header, "scroll-down"),
            ],
        );

        assert!(!viewport.has_class(&Target::Header, "scroll-down"));
        assert!(viewport.has_class(&Target::Body, "loaded"));
        assert_eq!(viewport.applied.len(), 3);
    }

    #[test]
    fn test_recording_viewport_overlay_and_lock() {
        let mut viewport = RecordingViewport::default();
        let image = ImageDescriptor::new("a.jpg", "A");
        apply_all(
            &mut viewport,
            &[Effect::ShowOverlay(image.clone()), Effect::LockPageScroll],
        );
        assert_eq!(viewport.overlay, Some(image));
        assert!(viewport.scroll_locked);

        apply_all(&mut viewport, &[Effect::HideOverlay, Effect::UnlockPageScroll]);
        assert!(viewport.overlay.is_none());
        assert!(!viewport.scroll_locked);
    }
}
