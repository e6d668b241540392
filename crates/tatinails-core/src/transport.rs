//! Outbound booking transport.
//!
//! The endpoint is an opaque spreadsheet script. Its response is never read:
//! a request that leaves without a transport error counts as delivered.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use tracing::debug;

use crate::booking::SheetRow;
use crate::config::SiteConfig;
use crate::error::{SiteResult, TransportError};

/// Sends one booking row.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Dispatch `row`. `Ok` only means the request was sent.
    async fn dispatch(&self, row: &SheetRow) -> Result<(), TransportError>;
}

impl<T: Transport> Transport for Arc<T> {
    async fn dispatch(&self, row: &SheetRow) -> Result<(), TransportError> {
        (**self).dispatch(row).await
    }
}

impl<T: Transport> Transport for &T {
    async fn dispatch(&self, row: &SheetRow) -> Result<(), TransportError> {
        (**self).dispatch(row).await
    }
}

/// JSON-over-HTTP POST to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    /// Build from the site configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`](crate::SiteError::Config) if the endpoint
    /// does not parse.
    pub fn from_config(config: &SiteConfig) -> SiteResult<Self> {
        Ok(Self::new(config.endpoint_url()?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    async fn dispatch(&self, row: &SheetRow) -> Result<(), TransportError> {
        let body = serde_json::to_vec(row)?;

        debug!(endpoint = %self.endpoint, bytes = body.len(), "Posting booking");

        // The response stays unread.
        let _ = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}
