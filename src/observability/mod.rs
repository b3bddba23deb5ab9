//! Observability for recval
//!
//! Structured logging through `tracing`. Logs always go to stderr so that a
//! summary printed on stdout stays machine-readable.
//!
//! # Usage
//!
//! ```ignore
//! use recval::observability::{self, Event, LogFormat};
//!
//! observability::init(LogFormat::Json);
//! tracing::info!(event = %Event::InputLoaded, records = 42, "input loaded");
//! ```

mod events;

pub use events::Event;

use std::fmt;
use std::io;

use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "recval=info";

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed; the existing one
/// stays in place.
pub fn init(format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let (text, json) = match format {
        LogFormat::Text => (
            Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .try_init()
        .is_ok()
}

/// Logs a lifecycle event at the level its severity calls for
pub fn log_event(event: Event) {
    if event.is_fatal() {
        tracing::error!(event = %event);
    } else {
        tracing::info!(event = %event);
    }
}
