//! Console progress lines
//!
//! These go to stdout for the person running the batch. They are not meant
//! to be parsed; diagnostics go through `tracing` on stderr instead.

use crate::paths::OutputPaths;
use std::path::Path;

#[must_use]
pub fn found_message(count: usize, dir: &Path) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("Found {count} TIFF {noun} in {}, processing...", dir.display())
}

#[must_use]
pub fn none_found_message(dir: &Path) -> String {
    format!("No TIFF files found in {}", dir.display())
}

#[must_use]
pub fn finished_message(count: usize) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    format!("Finished processing {count} {noun}")
}

pub fn print_found(count: usize, dir: &Path) {
    println!("{}", found_message(count, dir));
}

pub fn print_none_found(dir: &Path) {
    println!("{}", none_found_message(dir));
}

pub fn print_finished(count: usize) {
    println!("{}", finished_message(count));
}

pub fn print_saved(paths: &OutputPaths) {
    print_path("Colormap saved to", &paths.colormap);
    print_path("Grayscale saved to", &paths.grayscale);
}

pub fn print_path(label: &str, path: &Path) {
    println!("{label:20}: {}", path.display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_message_counts_files() {
        let msg = found_message(3, Path::new("scans"));
        assert!(msg.starts_with("Found 3 TIFF files"));
        assert!(msg.contains("scans"));
        assert!(found_message(1, Path::new("x")).contains("1 TIFF file in"));
    }

    #[test]
    fn test_none_and_finished_messages() {
        assert_eq!(none_found_message(Path::new("empty")), "No TIFF files found in empty");
        assert_eq!(finished_message(2), "Finished processing 2 files");
    }
}
