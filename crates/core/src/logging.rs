//! Logging and observability
//!
//! This module provides structured logging via `tracing`. It supports both
//! human-readable text output and JSON formatting, controlled at runtime via
//! environment variables and CLI flags.
//!
//! All logging output is directed to stderr to preserve stdout for command output.

use anyhow::Result;
use std::{io, sync::Once};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the logging system with an optional output format
///
/// Sets up tracing-subscriber with either JSON or text formatting. It can be
/// called multiple times safely - subsequent calls will be no-ops.
///
/// ## Arguments
///
/// * `format` - `None` or `"text"` for human-readable text, `"json"` for JSON lines.
///
/// ## Environment Variables
///
/// * `GROWTHBOOK_LOG_FORMAT` - Used when `format` is `None` ("json" for JSON, anything else for text)
/// * `GROWTHBOOK_LOG` - Controls the logging filter
/// * `RUST_LOG` - Standard Rust logging environment variable (used as fallback)
///
/// ## Example
///
/// ```rust
/// use growthbook_core::logging;
///
/// logging::init(None).expect("Failed to initialize logging");
/// ```
pub fn init(format: Option<&str>) -> Result<()> {
    INIT.call_once(|| {
        let filter = create_env_filter();

        let env_format = std::env::var("GROWTHBOOK_LOG_FORMAT").ok();
        let effective_format = format.or(env_format.as_deref()).unwrap_or("text");

        match effective_format {
            "json" => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .json()
                            .with_target(true)
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
            _ => {
                tracing_subscriber::registry()
                    .with(
                        fmt::layer()
                            .with_target(false)
                            .without_time()
                            .with_writer(io::stderr),
                    )
                    .with(filter)
                    .init();
            }
        }

        tracing::debug!("Logging initialized with format: {}", effective_format);
    });

    Ok(())
}

/// Create an EnvFilter based on environment variables
fn create_env_filter() -> EnvFilter {
    if let Ok(spec) = std::env::var("GROWTHBOOK_LOG") {
        EnvFilter::try_new(&spec).unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid GROWTHBOOK_LOG filter '{}', using default 'info'",
                spec
            );
            EnvFilter::new("info")
        })
    } else {
        // Fall back to standard RUST_LOG or default (info)
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}
