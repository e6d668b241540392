#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tatinails_core::{HttpTransport, SiteConfig, SiteResult};

/// Site configuration, set once at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Booking transport built from the configured endpoint
static TRANSPORT: OnceLock<HttpTransport> = OnceLock::new();

/// Get the site configuration (set from command line or default)
pub fn site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Get the booking transport.
///
/// `main` sets it before launch; otherwise it is built from the default
/// configuration.
pub fn transport() -> SiteResult<HttpTransport> {
    match TRANSPORT.get() {
        Some(transport) => Ok(transport.clone()),
        None => HttpTransport::from_config(&SiteConfig::default()),
    }
}

/// Tati Nails - salon landing page
#[derive(Parser, Debug)]
#[command(name = "tatinails-desktop")]
#[command(about = "Tati Nails - nail salon landing page with online booking")]
struct Args {
    /// Booking endpoint (spreadsheet script URL)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        match &self.endpoint {
            Some(endpoint) => SiteConfig::default().with_endpoint(endpoint),
            None => SiteConfig::default(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.site_config();
    config.check_date_format().context("Invalid date format")?;
    let transport = HttpTransport::from_config(&config).context("Invalid booking endpoint")?;

    tracing::info!("Starting Tati Nails, bookings go to {}", transport.endpoint());

    let _ = SITE_CONFIG.set(config);
    let _ = TRANSPORT.set(transport);

    // Window size: roughly a laptop viewport
    let window_width = 1200.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Tati Nails")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_use_default_endpoint() {
        let args = Args::try_parse_from(["tatinails-desktop"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(
            args.site_config().endpoint,
            tatinails_core::config::DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_endpoint_override() {
        let args = Args::try_parse_from([
            "tatinails-desktop",
            "--endpoint",
            "http://localhost:8080/book",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.site_config().endpoint, "http://localhost:8080/book");
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let args = Args::try_parse_from(["tatinails-desktop", "-e", "nowhere"]).unwrap();
        assert!(HttpTransport::from_config(&args.site_config()).is_err());
    }

    #[test]
    fn test_transport_defaults_without_startup() {
        let transport = transport().unwrap();
        assert_eq!(transport.endpoint().host_str(), Some("script.google.com"));
    }
}
