//! UI Components for Tati Nails.
//!
//! Every interactive component forwards its events to the page state through
//! [`crate::context::fire`].

mod anchor_link;
mod booking_form;
mod lightbox;
mod notice_modal;
mod portfolio;
mod site_header;

pub use anchor_link::AnchorLink;
pub use booking_form::BookingFormView;
pub use lightbox::Lightbox;
pub use notice_modal::NoticeModal;
pub use portfolio::{portfolio_entries, PortfolioGallery};
pub use site_header::SiteHeader;
