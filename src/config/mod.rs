#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::splitter::DEFAULT_CHUNK_SIZE_KB;

/// Folder scanned when none is configured
pub const DEFAULT_FOLDER: &str = "./books";

/// Run parameters: where to look for `.txt` files and how large each
/// fragment may be. Fragments are always written next to their source, so
/// there is no separate output location.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Folder scanned for `.txt` files
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    /// Per-fragment budget in kilobytes of characters
    #[serde(default = "default_chunk_size_kb")]
    pub chunk_size_kb: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            chunk_size_kb: default_chunk_size_kb(),
        }
    }
}

impl RunConfig {
    /// Load a config from a JSON file. Missing fields fall back to the
    /// defaults; a missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply command-line overrides on top of this config. `None` keeps the
    /// configured value; flags win over the file, which wins over defaults.
    pub fn apply_overrides(&mut self, folder: Option<PathBuf>, chunk_size_kb: Option<usize>) {
        if let Some(folder) = folder {
            self.folder = folder;
        }
        if let Some(chunk_size_kb) = chunk_size_kb {
            self.chunk_size_kb = chunk_size_kb;
        }
    }
}

fn default_folder() -> PathBuf {
    PathBuf::from(DEFAULT_FOLDER)
}

fn default_chunk_size_kb() -> usize {
    DEFAULT_CHUNK_SIZE_KB
}
