//! Gallery viewer - lightbox cursor over the portfolio images.
//!
//! ```text
//!            open(i)
//!   Closed ───────────▶ Open ──┐
//!     ▲                  │     │ next / previous
//!     └──── close() ─────┘ ◀───┘ (index changes, open-ness does not)
//! ```
//!
//! The item list is collected once from the portfolio markup and never
//! changes afterwards. An empty gallery can never be opened.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::effect::Effect;

/// One image the lightbox can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub source: String,
    pub alt_text: String,
}

impl ImageDescriptor {
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// `<img>` inside a portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub src: String,
    pub alt: Option<String>,
}

/// A clickable portfolio entry as found in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Link target of the entry, usually the full-size image
    pub href: Option<String>,
    pub image: Option<EmbeddedImage>,
}

impl GalleryEntry {
    /// Entry linking to `href` with a thumbnail `src`.
    pub fn linked(href: impl Into<String>, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            image: Some(EmbeddedImage {
                src: src.into(),
                alt: Some(alt.into()),
            }),
        }
    }

    fn descriptor(&self, fallback_alt: &str) -> Option<ImageDescriptor> {
        let image = self.image.as_ref()?;
        let source = self
            .href
            .as_deref()
            .filter(|href| !href.is_empty())
            .unwrap_or(image.src.as_str());
        let alt_text = image
            .alt
            .as_deref()
            .filter(|alt| !alt.is_empty())
            .unwrap_or(fallback_alt);
        Some(ImageDescriptor::new(source, alt_text))
    }
}

/// Keys the lightbox listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => NavKey::Escape,
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

/// Part of the open lightbox that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    /// Overlay background around the image
    Backdrop,
    Image,
    Close,
    Previous,
    Next,
}

/// Lightbox state.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    items: Vec<ImageDescriptor>,
    /// Item index for each entry position; `None` for entries without an image
    entry_items: Vec<Option<usize>>,
    current: usize,
    open: bool,
}

impl Gallery {
    /// Collect images from the portfolio entries in document order.
    ///
    /// Entries without an embedded image contribute nothing.
    pub fn new(entries: &[GalleryEntry], fallback_alt: &str) -> Self {
        let mut items = Vec::with_capacity(entries.len());
        let entry_items = entries
            .iter()
            .map(|entry| {
                entry.descriptor(fallback_alt).map(|descriptor| {
                    items.push(descriptor);
                    items.len() - 1
                })
            })
            .collect();

        debug!("Gallery initialized with {} images", items.len());

        Self {
            items,
            entry_items,
            current: 0,
            open: false,
        }
    }

    pub fn items(&self) -> &[ImageDescriptor] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Image under the cursor, if the lightbox is open
    pub fn current(&self) -> Option<&ImageDescriptor> {
        if self.open {
            self.items.get(self.current)
        } else {
            None
        }
    }

    /// Show the image at `index`. Out-of-range indices change nothing.
    pub fn open(&mut self, index: usize) -> Vec<Effect> {
        let Some(image) = self.items.get(index) else {
            debug!("Ignoring open({}) on gallery of {}", index, self.items.len());
            return Vec::new();
        };

        self.current = index;
        self.open = true;
        debug!("Lightbox showing image {}/{}", index + 1, self.items.len());

        vec![Effect::ShowOverlay(image.clone()), Effect::LockPageScroll]
    }

    /// Hide the lightbox. Closing a closed lightbox does nothing.
    pub fn close(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        debug!("Lightbox closed");

        vec![Effect::HideOverlay, Effect::UnlockPageScroll]
    }

    /// Advance with wraparound.
    pub fn next(&mut self) -> Vec<Effect> {
        if !self.open || self.items.is_empty() {
            return Vec::new();
        }
        let index = (self.current + 1) % self.items.len();
        self.open(index)
    }

    /// Step back with wraparound.
    pub fn previous(&mut self) -> Vec<Effect> {
        if !self.open || self.items.is_empty() {
            return Vec::new();
        }
        let len = self.items.len();
        let index = (self.current + len - 1) % len;
        self.open(index)
    }

    /// Click on the portfolio entry at `position` (document order).
    ///
    /// The entry's own navigation is always suppressed.
    pub fn click_entry(&mut self, position: usize) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        if let Some(Some(index)) = self.entry_items.get(position) {
            effects.extend(self.open(*index));
        }
        effects
    }

    /// Click somewhere on the open lightbox.
    pub fn click(&mut self, target: LightboxTarget) -> Vec<Effect> {
        match target {
            LightboxTarget::Close | LightboxTarget::Backdrop => self.close(),
            LightboxTarget::Image => Vec::new(),
            LightboxTarget::Previous => {
                let mut effects = vec![Effect::StopPropagation];
                effects.extend(self.previous());
                effects
            }
            LightboxTarget::Next => {
                let mut effects = vec![Effect::StopPropagation];
                effects.extend(self.next());
                effects
            }
        }
    }

    /// Key press anywhere on the page. Ignored while closed.
    pub fn key(&mut self, key: NavKey) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        match key {
            NavKey::Escape => self.close(),
            NavKey::ArrowLeft => self.previous(),
            NavKey::ArrowRight => self.next(),
            NavKey::Other => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<GalleryEntry> {
        (0..n)
            .map(|i| {
                GalleryEntry::linked(
                    format!("images/work-{i}.jpg"),
                    format!("images/thumb-{i}.jpg"),
                    format!("Work {i}"),
                )
            })
            .collect()
    }

    #[test]
    fn test_source_prefers_link_target() {
        let gallery = Gallery::new(&entries(1), "Portfolio image");
        assert_eq!(gallery.items()[0].source, "images/work-0.jpg");
        assert_eq!(gallery.items()[0].alt_text, "Work 0");
    }

    #[test]
    fn test_source_falls_back_to_image_and_alt() {
        let entry = GalleryEntry {
            href: None,
            image: Some(EmbeddedImage {
                src: "images/thumb.jpg".to_string(),
                alt: None,
            }),
        };
        let gallery = Gallery::new(&[entry], "Portfolio image");
        assert_eq!(
            gallery.items()[0],
            ImageDescriptor::new("images/thumb.jpg", "Portfolio image")
        );
    }

    #[test]
    fn test_entries_without_image_are_skipped() {
        let mut list = entries(2);
        list.insert(
            1,
            GalleryEntry {
                href: Some("#".to_string()),
                image: None,
            },
        );
        let mut gallery = Gallery::new(&list, "Portfolio image");
        assert_eq!(gallery.len(), 2);

        // Entry at position 2 is the second image
        gallery.click_entry(2);
        assert_eq!(gallery.current_index(), 1);

        // Imageless entry only suppresses navigation
        gallery.close();
        assert_eq!(gallery.click_entry(1), vec![Effect::PreventDefault]);
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_open_renders_and_locks() {
        let mut gallery = Gallery::new(&entries(3), "x");
        let effects = gallery.open(1);
        assert_eq!(
            effects,
            vec![
                Effect::ShowOverlay(ImageDescriptor::new("images/work-1.jpg", "Work 1")),
                Effect::LockPageScroll,
            ]
        );
        assert!(gallery.is_open());
        assert_eq!(gallery.current().unwrap().alt_text, "Work 1");
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let mut gallery = Gallery::new(&entries(3), "x");
        gallery.open(2);
        assert!(gallery.open(3).is_empty());
        assert_eq!(gallery.current_index(), 2);
        assert!(gallery.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut gallery = Gallery::new(&entries(2), "x");
        gallery.open(0);
        assert_eq!(
            gallery.close(),
            vec![Effect::HideOverlay, Effect::UnlockPageScroll]
        );
        assert!(gallery.close().is_empty());
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_wraparound() {
        let mut gallery = Gallery::new(&entries(3), "x");
        gallery.open(2);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
        gallery.previous();
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn test_empty_gallery_never_opens() {
        let mut gallery = Gallery::new(&[], "x");
        assert!(gallery.open(0).is_empty());
        assert!(gallery.next().is_empty());
        assert!(gallery.previous().is_empty());
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_controls_stop_propagation() {
        let mut gallery = Gallery::new(&entries(2), "x");
        gallery.open(0);
        let effects = gallery.click(LightboxTarget::Next);
        assert_eq!(effects[0], Effect::StopPropagation);
        assert!(gallery.is_open());
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn test_backdrop_closes_image_does_not() {
        let mut gallery = Gallery::new(&entries(2), "x");
        gallery.open(0);
        assert!(gallery.click(LightboxTarget::Image).is_empty());
        assert!(gallery.is_open());
        gallery.click(LightboxTarget::Backdrop);
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut gallery = Gallery::new(&entries(3), "x");
        for key in [NavKey::Escape, NavKey::ArrowLeft, NavKey::ArrowRight] {
            assert!(gallery.key(key).is_empty());
            assert!(!gallery.is_open());
            assert_eq!(gallery.current_index(), 0);
        }
    }

    #[test]
    fn test_key_names() {
        assert_eq!(NavKey::from_key_name("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_key_name("ArrowRight"), NavKey::ArrowRight);
        assert_eq!(NavKey::from_key_name("Enter"), NavKey::Other);
    }
}
