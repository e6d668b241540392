//! Event registrations for the whole page.
//!
//! Every binding the page makes is a [`PageEvent`] variant. The host forwards
//! raw events here and applies whatever comes back.

use tracing::debug;

use crate::chrome::{self, anchor_scroll_position, HeaderTracker, MobileMenu, Reveal};
use crate::config::SiteConfig;
use crate::effect::{Effect, Viewport};
use crate::gallery::{Gallery, GalleryEntry, LightboxTarget, NavKey};

/// Element tracked for fade-in, with its top relative to the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedElement {
    pub id: String,
    pub top: f64,
}

impl TrackedElement {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Input the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// DOM ready: device class and first reveal pass
    Ready {
        has_touch: bool,
        inner_height: f64,
        elements: Vec<TrackedElement>,
    },
    /// All resources loaded
    Loaded,
    /// Portfolio entry clicked, by document position
    EntryClicked(usize),
    Lightbox(LightboxTarget),
    Key(NavKey),
    MenuButtonClicked,
    NavLinkClicked,
    /// In-page link clicked
    AnchorClicked {
        href: String,
        target_top: Option<f64>,
        page_offset: f64,
        header_height: f64,
    },
    Scrolled {
        offset: f64,
        inner_height: f64,
        elements: Vec<TrackedElement>,
    },
}

/// Page state: the gallery plus the chrome trackers.
#[derive(Debug, Clone)]
pub struct Page {
    gallery: Gallery,
    menu: MobileMenu,
    header: HeaderTracker,
    reveal: Reveal,
    anchor_gap: f64,
}

impl Page {
    /// Build the page from its portfolio entries.
    pub fn new(config: &SiteConfig, entries: &[GalleryEntry]) -> Self {
        Self {
            gallery: Gallery::new(entries, &config.fallback_alt),
            menu: MobileMenu::default(),
            header: HeaderTracker::default(),
            reveal: Reveal::new(config.reveal_margin),
            anchor_gap: config.anchor_gap,
        }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn header(&self) -> &HeaderTracker {
        &self.header
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    /// Route one event to its handler.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::Ready {
                has_touch,
                inner_height,
                elements,
            } => {
                let mut effects = vec![chrome::device_class(has_touch)];
                effects.extend(self.check_reveal(&elements, inner_height));
                effects
            }
            PageEvent::Loaded => chrome::loaded_classes(),
            PageEvent::EntryClicked(position) => self.gallery.click_entry(position),
            PageEvent::Lightbox(target) => self.gallery.click(target),
            PageEvent::Key(key) => self.gallery.key(key),
            PageEvent::MenuButtonClicked => self.menu.toggle(),
            PageEvent::NavLinkClicked => self.menu.link_followed(),
            PageEvent::AnchorClicked {
                href,
                target_top,
                page_offset,
                header_height,
            } => {
                let mut effects = vec![Effect::PreventDefault];
                if let Some(top) = anchor_scroll_position(
                    &href,
                    target_top,
                    page_offset,
                    header_height,
                    self.anchor_gap,
                ) {
                    debug!("Scrolling to {} at {}", href, top);
                    effects.push(Effect::ScrollTo { top });
                }
                effects
            }
            PageEvent::Scrolled {
                offset,
                inner_height,
                elements,
            } => {
                let mut effects = self.header.scrolled(offset);
                effects.extend(self.check_reveal(&elements, inner_height));
                effects
            }
        }
    }

    /// Scroll event built from the viewport's current geometry.
    pub fn scrolled_in<V: Viewport + ?Sized>(
        &mut self,
        viewport: &V,
        elements: Vec<TrackedElement>,
    ) -> Vec<Effect> {
        self.dispatch(PageEvent::Scrolled {
            offset: viewport.scroll_offset(),
            inner_height: viewport.inner_height(),
            elements,
        })
    }

    /// Ready event built from the viewport's capabilities.
    pub fn ready_in<V: Viewport + ?Sized>(
        &mut self,
        viewport: &V,
        elements: Vec<TrackedElement>,
    ) -> Vec<Effect> {
        self.dispatch(PageEvent::Ready {
            has_touch: viewport.has_touch(),
            inner_height: viewport.inner_height(),
            elements,
        })
    }

    fn check_reveal(&mut self, elements: &[TrackedElement], inner_height: f64) -> Vec<Effect> {
        self.reveal.check(
            elements.iter().map(|e| (e.id.as_str(), e.top)),
            inner_height,
        )
    }
}
