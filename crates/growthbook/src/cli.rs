use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log format options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON structured format
    Json,
}

/// Log level options
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Informational messages and above
    Info,
    /// Debug messages and above
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// GrowthBook CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Feature flag commands
    Features {
        /// Features subcommand
        #[command(subcommand)]
        command: FeatureCommands,
    },
}

/// Feature subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum FeatureCommands {
    /// Generate TypeScript types for all your features
    GenerateTypes {
        /// Your GrowthBook instance base URL (e.g. http://localhost:3100, default: https://api.growthbook.io)
        #[arg(short = 'u', long = "apiBaseUrl", value_name = "URL")]
        api_base_url: Option<String>,
        /// Output path for the app-features.ts file. All directories in this path should exist.
        /// If not provided, the directory growthbook-types will be created in the current working directory.
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Optional profile (for projects that use multiple GrowthBook instances, default: default)
        #[arg(short = 'p', long, value_name = "NAME")]
        profile: Option<String>,
    },
}

#[derive(Debug, Parser)]
#[command(
    name = "growthbook",
    version,
    about = "GrowthBook CLI",
    long_about = "GrowthBook CLI\n\nWork with the features of a GrowthBook instance from the command line.",
    color = clap::ColorChoice::Auto
)]
pub struct Cli {
    /// Log format (text or json, defaults to text, can be set via GROWTHBOOK_LOG_FORMAT env var)
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Directory holding config.toml (default: ~/.growthbook, can be set via GROWTHBOOK_CONFIG_DIR env var)
    #[arg(long, global = true, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub async fn dispatch(self) -> Result<()> {
        let log_format = match self.log_format {
            Some(LogFormat::Text) => Some("text"),
            Some(LogFormat::Json) => Some("json"),
            None => None, // Let logging module check environment variable
        };

        let log_level = self.log_level.as_filter();
        if std::env::var_os("GROWTHBOOK_LOG").is_none() && std::env::var_os("RUST_LOG").is_none()
        {
            std::env::set_var(
                "RUST_LOG",
                format!("growthbook={},growthbook_core={}", log_level, log_level),
            );
        }
        growthbook_core::logging::init(log_format)?;

        tracing::debug!("CLI initialized with log level: {}", log_level);

        match self.command {
            Some(Commands::Features { command }) => {
                use crate::commands::features::{execute_features, FeaturesArgs};

                let args = FeaturesArgs {
                    command,
                    config_dir: self.config_dir,
                };

                execute_features(args).await
            }
            None => {
                println!("GrowthBook CLI");
                println!("Run 'growthbook --help' to see available commands.");
                Ok(())
            }
        }
    }
}
