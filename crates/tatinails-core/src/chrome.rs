//! Page chrome: mobile menu, anchor scrolling, sticky header and reveal.
//!
//! None of these hold anything beyond a flag or an offset, but each one keeps
//! that state here so the handlers stay pure.

use std::collections::BTreeSet;

use crate::effect::{Effect, Target};

pub const MENU_ACTIVE: &str = "active";
pub const MENU_OPEN: &str = "menu-open";
pub const SCROLL_UP: &str = "scroll-up";
pub const SCROLL_DOWN: &str = "scroll-down";
pub const FADE_IN: &str = "fade-in";
pub const TOUCH_DEVICE: &str = "touch-device";
pub const NO_TOUCH_DEVICE: &str = "no-touch-device";
pub const LOADING: &str = "loading";
pub const LOADED: &str = "loaded";

/// Hamburger menu shown on narrow screens.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button clicked.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        self.effects()
    }

    /// A nav link was followed; close the menu if it is open.
    pub fn link_followed(&mut self) -> Vec<Effect> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.effects()
    }

    fn effects(&self) -> Vec<Effect> {
        let on = self.open;
        vec![
            Effect::SetClass {
                target: Target::MenuButton,
                class: MENU_ACTIVE,
                on,
            },
            Effect::SetClass {
                target: Target::Nav,
                class: MENU_ACTIVE,
                on,
            },
            Effect::SetClass {
                target: Target::Body,
                class: MENU_OPEN,
                on,
            },
        ]
    }
}

/// Where the page should scroll for an in-page link.
///
/// `target_top` is the target's top relative to the viewport, `None` when
/// nothing matches the href. A bare `#` goes nowhere.
pub fn anchor_scroll_position(
    href: &str,
    target_top: Option<f64>,
    page_offset: f64,
    header_height: f64,
    gap: f64,
) -> Option<f64> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    target_top.map(|top| top + page_offset - header_height - gap)
}

/// Header direction flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum HeaderMode {
    #[default]
    Plain,
    ScrollingDown,
    ScrollingUp,
}

/// Hides the header while scrolling down and brings it back on the way up.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderTracker {
    last_offset: f64,
    mode: HeaderMode,
}

impl HeaderTracker {
    pub fn is_hidden(&self) -> bool {
        self.mode == HeaderMode::ScrollingDown
    }

    /// Page scrolled to `offset`.
    pub fn scrolled(&mut self, offset: f64) -> Vec<Effect> {
        if offset <= 0.0 {
            // At the top the remembered offset is left alone
            if self.mode == HeaderMode::ScrollingUp {
                self.mode = HeaderMode::Plain;
            }
            return vec![Effect::remove(Target::Header, SCROLL_UP)];
        }

        let mut effects = Vec::new();
        if offset > self.last_offset && self.mode != HeaderMode::ScrollingDown {
            self.mode = HeaderMode::ScrollingDown;
            effects.push(Effect::remove(Target::Header, SCROLL_UP));
            effects.push(Effect::add(Target::Header, SCROLL_DOWN));
        } else if offset < self.last_offset && self.mode == HeaderMode::ScrollingDown {
            self.mode = HeaderMode::ScrollingUp;
            effects.push(Effect::remove(Target::Header, SCROLL_DOWN));
            effects.push(Effect::add(Target::Header, SCROLL_UP));
        }

        self.last_offset = offset;
        effects
    }
}

/// Fades tracked elements in once they come into view.
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    margin: f64,
    shown: BTreeSet<String>,
}

impl Reveal {
    pub fn new(margin: f64) -> Self {
        Self {
            margin,
            shown: BTreeSet::new(),
        }
    }

    pub fn is_shown(&self, id: &str) -> bool {
        self.shown.contains(id)
    }

    /// Check element positions (`id`, top relative to viewport).
    ///
    /// Only newly visible elements produce effects.
    pub fn check<'a, I>(&mut self, elements: I, inner_height: f64) -> Vec<Effect>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let threshold = inner_height - self.margin;
        elements
            .into_iter()
            .filter(|(_, top)| *top < threshold)
            .filter(|(id, _)| self.shown.insert((*id).to_string()))
            .map(|(id, _)| Effect::add(Target::Reveal(id.to_string()), FADE_IN))
            .collect()
    }
}

/// Body class for the device's input capability.
pub fn device_class(has_touch: bool) -> Effect {
    Effect::add(
        Target::Body,
        if has_touch { TOUCH_DEVICE } else { NO_TOUCH_DEVICE },
    )
}

/// Body classes once the page has fully loaded.
pub fn loaded_classes() -> Vec<Effect> {
    vec![
        Effect::remove(Target::Body, LOADING),
        Effect::add(Target::Body, LOADED),
    ]
}
