//! Features command implementation
//!
//! Implements the `growthbook features` subcommands.
//!
//! ## Module Organization
//!
//! - `generate_types` - generates TypeScript types for all features of an instance

mod generate_types;

pub use generate_types::{execute_generate_types, GenerateTypesArgs, GenerateTypesResult};

use crate::cli::FeatureCommands;
use anyhow::Result;
use std::path::PathBuf;
use tracing::instrument;

/// Features command arguments
#[derive(Debug, Clone)]
pub struct FeaturesArgs {
    pub command: FeatureCommands,
    pub config_dir: Option<PathBuf>,
}

/// Execute the features command
#[instrument(level = "debug", skip(args))]
pub async fn execute_features(args: FeaturesArgs) -> Result<()> {
    match args.command {
        FeatureCommands::GenerateTypes {
            api_base_url,
            output,
            profile,
        } => {
            let args = GenerateTypesArgs {
                api_base_url,
                output,
                profile,
                config_dir: args.config_dir,
                working_dir: std::env::current_dir()?,
            };
            let result = execute_generate_types(args).await?;
            println!(
                "✅ Successfully wrote TypeScript definitions to {}",
                result.output_dir.display()
            );
            Ok(())
        }
    }
}
