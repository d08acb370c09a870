//! Core library for the GrowthBook CLI
//!
//! This crate contains the shared logic behind the CLI commands: profile
//! configuration, the paginated REST API client, TypeScript type generation,
//! output handling, logging, and error handling.

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;
pub mod redaction;
pub mod typegen;
