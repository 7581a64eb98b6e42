//! Directory batch driver
//!
//! Files are processed one at a time, in path order. The first failure aborts
//! the rest of the batch.

use crate::convert::{ConvertOptions, convert_file};
use crate::error::ConvertError;
use crate::paths::{self, OutputPaths};
use crate::report;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions (lowercase) picked up by the configurable converter
pub const DEPTH_EXTENSIONS: &[&str] = &["tif", "tiff"];

/// Output directory created inside the input directory when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "colormap_output";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outputs: Vec<OutputPaths>,
}

impl BatchSummary {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.outputs.len()
    }
}

#[must_use]
pub fn has_depth_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            DEPTH_EXTENSIONS
                .iter()
                .any(|wanted| ext.eq_ignore_ascii_case(wanted))
        })
}

/// Regular files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns [`ConvertError::ListDir`] if the directory cannot be read
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let list_error = |source| ConvertError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let path = entry.map_err(list_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// TIFF files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns [`ConvertError::ListDir`] if the directory cannot be read
pub fn find_depth_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    Ok(list_files(dir)?
        .into_iter()
        .filter(|path| has_depth_extension(path))
        .collect())
}

/// Convert every TIFF in `dir`
///
/// Color output defaults to `<dir>/colormap_output`; grayscale output
/// defaults to the color output directory. Both are created before the
/// first file is written. A directory without TIFF files yields an empty
/// summary.
///
/// # Errors
///
/// Returns the first error raised while listing, creating directories or
/// converting a file
pub fn process_directory(dir: &Path, options: &ConvertOptions) -> Result<BatchSummary, ConvertError> {
    let files = find_depth_files(dir)?;
    if files.is_empty() {
        report::print_none_found(dir);
        return Ok(BatchSummary::default());
    }

    let output_dir = options
        .output_path
        .clone()
        .unwrap_or_else(|| dir.join(DEFAULT_OUTPUT_DIR));
    let depth_output_dir = options
        .depth_output_path
        .clone()
        .unwrap_or_else(|| output_dir.clone());

    paths::ensure_dir(&output_dir)?;
    paths::ensure_dir(&depth_output_dir)?;
    debug!(
        color = %output_dir.display(),
        grayscale = %depth_output_dir.display(),
        "output directories ready"
    );

    let file_options = ConvertOptions {
        output_path: Some(output_dir),
        depth_output_path: Some(depth_output_dir),
        ..options.clone()
    };

    report::print_found(files.len(), dir);
    let mut summary = BatchSummary::default();
    for file in &files {
        summary.outputs.push(convert_file(file, &file_options)?);
    }
    report::print_finished(summary.processed());

    Ok(summary)
}
