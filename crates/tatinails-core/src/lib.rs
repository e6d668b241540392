//! Tati Nails Core Library
//!
//! UI-free state machines behind the salon landing page.
//!
//! ## Overview
//!
//! The page is a collection of event bindings wired to ambient browser state.
//! Everything with state or rules lives here so it can be exercised without a
//! rendering environment:
//!
//! - **Gallery viewer**: lightbox cursor over the portfolio images
//! - **Booking form**: fail-fast validation and the submit lifecycle
//! - **Page chrome**: mobile menu, anchor scrolling, sticky header, reveal
//!
//! Handlers never touch the DOM. They return [`Effect`] values which a
//! [`Viewport`] implementation applies.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tatinails_core::{Page, PageEvent, SiteConfig, apply_all};
//!
//! let mut page = Page::new(&SiteConfig::default(), &entries);
//! let effects = page.dispatch(PageEvent::EntryClicked(2));
//! apply_all(&mut viewport, &effects);
//! ```

pub mod booking;
pub mod chrome;
pub mod config;
pub mod effect;
pub mod error;
pub mod gallery;
pub mod page;
pub mod transport;

// Re-exports
pub use booking::{
    min_booking_date, validate, BookingForm, BookingSubmission, FormSurface, Notice,
    RawBookingFields, SheetRow, SubmitControl, SubmitControlState,
};
pub use chrome::{anchor_scroll_position, HeaderTracker, MobileMenu, Reveal};
pub use config::{Notices, SiteConfig, SubmitLabels};
pub use effect::{apply_all, Effect, RecordingViewport, Target, Viewport};
pub use error::{SiteError, SiteResult, TransportError, ValidationError};
pub use gallery::{EmbeddedImage, Gallery, GalleryEntry, ImageDescriptor, LightboxTarget, NavKey};
pub use page::{Page, PageEvent, TrackedElement};
pub use transport::{HttpTransport, Transport};
