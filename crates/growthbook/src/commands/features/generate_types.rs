//! `growthbook features generate-types`
//!
//! Resolves the profile, fetches every feature of the instance, renders the
//! `AppFeatures` TypeScript type and writes it to `app-features.ts`.

use growthbook_core::api::{default_features_client, FeaturesClient, HttpClient};
use growthbook_core::config::{ConfigStore, DEFAULT_PROFILE};
use growthbook_core::errors::Result;
use growthbook_core::output::{resolve_output_dir, write_types_file};
use growthbook_core::typegen::render_app_features;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Inputs of the generate-types command
#[derive(Debug, Clone)]
pub struct GenerateTypesArgs {
    /// `--apiBaseUrl`, overrides the profile's base URL
    pub api_base_url: Option<String>,
    /// `--output`, an existing directory
    pub output: Option<PathBuf>,
    /// `--profile`, defaults to `default`
    pub profile: Option<String>,
    /// `--config-dir`, location of `config.toml`
    pub config_dir: Option<PathBuf>,
    /// Directory relative output paths resolve against
    pub working_dir: PathBuf,
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTypesResult {
    pub output_dir: PathBuf,
    pub file_path: PathBuf,
    pub feature_count: usize,
    pub created_directory: bool,
}

/// Execute the generate-types command against the real API
#[instrument(level = "debug", skip(args), fields(profile = ?args.profile))]
pub async fn execute_generate_types(args: GenerateTypesArgs) -> Result<GenerateTypesResult> {
    let profile_name = args.profile.as_deref().unwrap_or(DEFAULT_PROFILE);

    let store = ConfigStore::locate(args.config_dir.as_deref())?;
    debug!("Reading profiles from {}", store.config_path().display());
    let profile = store.resolve_profile(profile_name)?;

    let base_url = profile.effective_base_url(args.api_base_url.as_deref());
    let client = default_features_client(&base_url, &profile.api_key)?;

    generate_types(&client, args.output.as_deref(), &args.working_dir).await
}

/// Fetch, render and write with an already configured client.
///
/// The output directory is only resolved after a successful fetch, so a
/// failed fetch leaves the filesystem untouched.
pub async fn generate_types<C: HttpClient>(
    client: &FeaturesClient<C>,
    output: Option<&Path>,
    working_dir: &Path,
) -> Result<GenerateTypesResult> {
    info!("Fetching features from {}", client.base_url());
    let features = client.fetch_all_features().await?;
    let contents = render_app_features(&features);
    debug!("Rendered types for {} features", features.len());

    let resolved = resolve_output_dir(output, working_dir)?;
    let file_path = write_types_file(&resolved.path, &contents)?;

    Ok(GenerateTypesResult {
        output_dir: resolved.path,
        file_path,
        feature_count: features.len(),
        created_directory: resolved.created,
    })
}
