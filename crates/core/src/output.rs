//! Output directory resolution and types file writing

use crate::errors::OutputError;
use crate::typegen::APP_FEATURES_FILENAME;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Directory created in the working directory when no output path is given
pub const DEFAULT_TYPES_DESTINATION: &str = "growthbook-types";

/// Marker file written into a freshly created default directory
pub const MARKER_FILENAME: &str = ".gitkeep";

/// Outcome of output directory resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOutputDir {
    /// Absolute directory the types file is written into
    pub path: PathBuf,
    /// Whether the default directory was created by this run
    pub created: bool,
}

/// Resolve the directory the types file goes into.
///
/// An explicit `output` is resolved against `working_dir` and must already be
/// a directory. Without one, `<working_dir>/growthbook-types` is reused when
/// present, or created along with an empty `.gitkeep` marker.
#[instrument(level = "debug")]
pub fn resolve_output_dir(
    output: Option<&Path>,
    working_dir: &Path,
) -> Result<ResolvedOutputDir, OutputError> {
    if let Some(output) = output {
        let path = working_dir.join(output);
        if !path.exists() {
            return Err(OutputError::MissingDirectory { path });
        }
        if !path.is_dir() {
            return Err(OutputError::NotADirectory { path });
        }
        debug!("Using output directory: {}", path.display());
        return Ok(ResolvedOutputDir {
            path,
            created: false,
        });
    }

    let path = working_dir.join(DEFAULT_TYPES_DESTINATION);

    if path.exists() {
        if !path.is_dir() {
            return Err(OutputError::NotADirectory { path });
        }
        info!("👍 Directory {} already exists. OK.", path.display());
        return Ok(ResolvedOutputDir {
            path,
            created: false,
        });
    }

    fs::create_dir(&path).map_err(|source| OutputError::CreateDirectory {
        path: path.clone(),
        source,
    })?;
    write_marker(&path)?;
    info!("👍 Created directory {}", path.display());

    Ok(ResolvedOutputDir {
        path,
        created: true,
    })
}

/// Drop an empty `.gitkeep` into a freshly created directory
fn write_marker(dir: &Path) -> Result<(), OutputError> {
    let marker = dir.join(MARKER_FILENAME);
    fs::write(&marker, "").map_err(|source| OutputError::CreateMarker {
        path: marker,
        source,
    })
}

/// Write the types file into `dir`, replacing any previous version.
///
/// Returns the path of the written file.
#[instrument(level = "debug", skip(contents))]
pub fn write_types_file(dir: &Path, contents: &str) -> Result<PathBuf, OutputError> {
    let file_path = dir.join(APP_FEATURES_FILENAME);
    fs::write(&file_path, contents).map_err(|source| OutputError::Write {
        path: file_path.clone(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", contents.len(), file_path.display());
    Ok(file_path)
}
