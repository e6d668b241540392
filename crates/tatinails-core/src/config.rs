//! Site configuration.
//!
//! Every constant the page needs lives in [`SiteConfig`]. The defaults are the
//! production values; the desktop binary overrides the endpoint from the
//! command line.

use chrono::format::{Item, StrftimeItems};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// Spreadsheet ingestion script that receives bookings.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyRRNaAK1mz-_Z7fCCWgXK-EjmTeZJm1RgNUSu_tuS7lotijNtb2gdp_DYhsgFymJA1/exec";

/// Labels shown on the submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLabels {
    pub idle: String,
    pub busy: String,
}

impl Default for SubmitLabels {
    fn default() -> Self {
        Self {
            idle: "Отправить заявку".to_string(),
            busy: "Отправка...".to_string(),
        }
    }
}

/// Notices shown once a booking request settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notices {
    pub success: String,
    pub failure: String,
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            success: "Спасибо за заявку! Мы свяжемся с вами в ближайшее время для подтверждения записи."
                .to_string(),
            failure: "Произошла ошибка при отправке формы. Пожалуйста, попробуйте еще раз или свяжитесь с нами по телефону."
                .to_string(),
        }
    }
}

/// Configuration for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Booking endpoint (POST, JSON body)
    pub endpoint: String,
    pub submit_labels: SubmitLabels,
    pub notices: Notices,
    /// `chrono` format for the date sent to the spreadsheet
    pub date_display_format: String,
    /// Alt text for gallery images that carry none
    pub fallback_alt: String,
    /// Extra space left above an anchor target after the header (px)
    pub anchor_gap: f64,
    /// How far above the viewport bottom an element must be to fade in (px)
    pub reveal_margin: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            submit_labels: SubmitLabels::default(),
            notices: Notices::default(),
            date_display_format: "%d.%m.%Y".to_string(),
            fallback_alt: "Portfolio image".to_string(),
            anchor_gap: 20.0,
            reveal_margin: 100.0,
        }
    }
}

impl SiteConfig {
    /// Replace the booking endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Parse the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] if the endpoint is not an absolute URL.
    pub fn endpoint_url(&self) -> SiteResult<Url> {
        Url::parse(&self.endpoint)
            .map_err(|e| SiteError::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))
    }

    /// Check that `date_display_format` is a usable `chrono` format.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] naming the rejected format.
    pub fn check_date_format(&self) -> SiteResult<()> {
        if StrftimeItems::new(&self.date_display_format).any(|item| matches!(item, Item::Error)) {
            return Err(SiteError::Config(format!(
                "invalid date format '{}'",
                self.date_display_format
            )));
        }
        Ok(())
    }
}
