//! Error types and handling
//!
//! The error taxonomy follows the three stages of the generate-types pipeline:
//! profile configuration, feature retrieval and output writing. Each stage has
//! its own error enum, and all of them are wrapped in the main
//! [`GrowthBookError`] enum for unified reporting at the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Hint appended to every profile configuration error
const LOGIN_HINT: &str = "Configure the CLI with the following command:\n\n $ growthbook auth login";

/// Profile configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The default profile is missing or has no API key
    #[error("Invalid GrowthBook config. {}", LOGIN_HINT)]
    InvalidDefaultProfile,

    /// A named profile is missing or has no API key
    #[error("Cannot find config for profile '{profile}'. {}", LOGIN_HINT)]
    ProfileNotFound { profile: String },

    /// Config file exists but is not valid TOML for the profile layout
    #[error("Failed to parse config file {}: {message}", path.display())]
    Parsing { path: PathBuf, message: String },

    /// No home directory could be determined to locate the config directory
    #[error("Could not determine the home directory to locate the GrowthBook config")]
    NoHomeDirectory,

    /// Config file exists but could not be read
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while retrieving features from the REST API
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP client could not be constructed
    #[error("Failed to create HTTP client: {message}")]
    ClientInit { message: String },

    /// Transport-level failure (DNS, connect, TLS, ...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// HTTP 401
    #[error("Authentication failed: {message}")]
    Unauthorized { message: String },

    /// HTTP 403
    #[error("Authorization denied: {message}")]
    Forbidden { message: String },

    /// Any other non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected page layout
    #[error("Failed to parse features response: {message}")]
    Parsing { message: String },

    /// Server pagination cursor did not advance
    #[error("Invalid pagination: {message}")]
    Pagination { message: String },
}

/// Errors raised while resolving the output directory or writing the types file
#[derive(Error, Debug)]
pub enum OutputError {
    /// The requested output directory does not exist
    #[error("Output directory does not exist: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// The output path exists but is a file or other non-directory
    #[error("Output path is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// The default output directory could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `.gitkeep` marker could not be written into a new output directory
    #[error("Failed to write marker file {}: {source}", path.display())]
    CreateMarker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The types file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Main error enum wrapping all domain-specific errors
#[derive(Error, Debug)]
pub enum GrowthBookError {
    /// Profile configuration errors are user-facing as-is
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Feature retrieval errors
    #[error("There was an error fetching the features: {0}")]
    Fetch(#[from] ApiError),

    /// Output directory / file errors
    #[error("Could not write TypeScript definition file to disk: {0}")]
    Output(#[from] OutputError),
}

/// Convenience type alias for Results with GrowthBookError
pub type Result<T> = std::result::Result<T, GrowthBookError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidDefaultProfile;
        assert_eq!(
            format!("{}", error),
            "Invalid GrowthBook config. Configure the CLI with the following command:\n\n $ growthbook auth login"
        );

        let error = ConfigError::ProfileNotFound {
            profile: "staging".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Cannot find config for profile 'staging'. Configure the CLI with the following command:\n\n $ growthbook auth login"
        );

        let error = ConfigError::Parsing {
            path: PathBuf::from("/home/u/.growthbook/config.toml"),
            message: "expected `=`".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to parse config file /home/u/.growthbook/config.toml: expected `=`"
        );

        let error = ConfigError::Io {
            path: PathBuf::from("/home/u/.growthbook/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to read config file /home/u/.growthbook/config.toml: denied"
        );
    }

    #[test]
    fn test_output_error_display() {
        let error = OutputError::NotADirectory {
            path: PathBuf::from("/w/growthbook-types"),
        };
        assert_eq!(
            format!("{}", error),
            "Output path is not a directory: /w/growthbook-types"
        );

        let error = OutputError::CreateMarker {
            path: PathBuf::from("/w/growthbook-types/.gitkeep"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to write marker file /w/growthbook-types/.gitkeep: denied"
        );
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::Unauthorized {
            message: "Invalid API key".to_string(),
        };
        assert_eq!(format!("{}", error), "Authentication failed: Invalid API key");

        let error = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 500: boom");
    }

    #[test]
    fn test_wrapper_prefixes() {
        let error: GrowthBookError = ConfigError::InvalidDefaultProfile.into();
        assert!(format!("{}", error).starts_with("Invalid GrowthBook config."));

        let error: GrowthBookError = ApiError::Network {
            message: "connection refused".to_string(),
        }
        .into();
        assert_eq!(
            format!("{}", error),
            "There was an error fetching the features: Network error: connection refused"
        );

        let error: GrowthBookError = OutputError::MissingDirectory {
            path: PathBuf::from("/nope"),
        }
        .into();
        assert_eq!(
            format!("{}", error),
            "Could not write TypeScript definition file to disk: Output directory does not exist: /nope"
        );
    }

    #[test]
    fn test_anyhow_conversions() {
        let error = GrowthBookError::Fetch(ApiError::Forbidden {
            message: "read-only key".to_string(),
        });
        let anyhow_error = anyhow::Error::from(error);
        assert!(anyhow_error
            .to_string()
            .contains("There was an error fetching the features"));
        assert!(anyhow_error.downcast_ref::<GrowthBookError>().is_some());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let output_error = OutputError::Write {
            path: PathBuf::from("/tmp/x/app-features.ts"),
            source: io_error,
        };
        let error = GrowthBookError::Output(output_error);

        assert!(error.source().is_some());
        if let Some(source) = error.source() {
            assert!(source.source().is_some());
        }
    }
}
