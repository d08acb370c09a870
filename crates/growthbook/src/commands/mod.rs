//! Command implementations
//!
//! This module contains implementations for all CLI subcommands.

pub mod features;
