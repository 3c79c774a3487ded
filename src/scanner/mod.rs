
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix a file name must carry to be picked up by the scan
pub const TXT_SUFFIX: &str = ".txt";

/// List the files directly contained in `folder` whose name ends with
/// `suffix`. Non-recursive: subdirectories are not descended into.
///
/// The suffix match is case-sensitive (`c.TXT` is not selected by `.txt`),
/// and entries that are not regular files are skipped. Order is whatever the
/// directory listing yields.
pub fn scan_folder(folder: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", folder.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}
