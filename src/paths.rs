//! Output path resolution
//!
//! An output argument may be absent, an existing directory, or a concrete file
//! path. Directories receive `<stem>_<kind>.png`; concrete paths are used as is.

use crate::error::ConvertError;
use crate::types::OutputKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the two renditions of one input are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub colormap: PathBuf,
    pub grayscale: PathBuf,
}

/// `<stem>_<kind>.png` for `input`
#[must_use]
pub fn output_file_name(input: &Path, kind: OutputKind) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(format!("_{kind}.png"));
    PathBuf::from(name)
}

/// Destination for one rendition of `input`
#[must_use]
pub fn resolve_output_path(input: &Path, output: Option<&Path>, kind: OutputKind) -> PathBuf {
    match output {
        None => output_file_name(input, kind),
        Some(dir) if dir.is_dir() => dir.join(output_file_name(input, kind)),
        Some(file) => file.to_path_buf(),
    }
}

/// Destinations for both renditions of `input`
///
/// Without an explicit grayscale path, the grayscale file follows the color
/// output: beside it in the same directory, or named after it with a
/// `_grayscale` suffix when the color output is a concrete file.
#[must_use]
pub fn resolve_output_paths(
    input: &Path,
    output: Option<&Path>,
    depth_output: Option<&Path>,
) -> OutputPaths {
    let colormap = resolve_output_path(input, output, OutputKind::Colormap);

    let grayscale = match (depth_output, output) {
        (Some(_), _) | (None, None) => {
            resolve_output_path(input, depth_output, OutputKind::Grayscale)
        }
        (None, Some(dir)) if dir.is_dir() => {
            resolve_output_path(input, Some(dir), OutputKind::Grayscale)
        }
        (None, Some(_)) => suffixed(&colormap, OutputKind::Grayscale),
    };

    OutputPaths {
        colormap,
        grayscale,
    }
}

/// `dir/name.ext` -> `dir/name_<kind>.png`
fn suffixed(path: &Path, kind: OutputKind) -> PathBuf {
    let mut name = path.with_extension("").into_os_string();
    name.push(format!("_{kind}.png"));
    PathBuf::from(name)
}

/// Create every missing directory above `path`
///
/// # Errors
///
/// Returns [`ConvertError::CreateDir`] if a directory cannot be created
pub fn ensure_parent_dir(path: &Path) -> Result<(), ConvertError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Create `dir` and its ancestors; succeeds if it already exists
///
/// # Errors
///
/// Returns [`ConvertError::CreateDir`] if a directory cannot be created
pub fn ensure_dir(dir: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(dir).map_err(|source| ConvertError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
