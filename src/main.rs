use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use txtpart::{scan_folder, split_file, RunConfig, TXT_SUFFIX};

/// Split every .txt file in a folder into fixed-size numbered fragments
#[derive(Parser, Debug)]
#[command(name = "txtpart")]
#[command(version)]
struct Cli {
    /// Folder to scan for .txt files (default: ./books)
    folder: Option<PathBuf>,

    /// Per-fragment budget in kilobytes of characters
    #[arg(long, value_name = "KB")]
    chunk_size_kb: Option<usize>,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective config: defaults, then config file, then flags.
    fn resolve_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };
        config.apply_overrides(self.folder.clone(), self.chunk_size_kb);
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    println!(
        "Splitting {} files in {} ({} KB per fragment)\n",
        TXT_SUFFIX,
        config.folder.display(),
        config.chunk_size_kb
    );

    let files = scan_folder(&config.folder, TXT_SUFFIX)?;
    if files.is_empty() {
        println!("No {} files found, nothing to do", TXT_SUFFIX);
        return Ok(());
    }

    // One file is fully split before the next is considered.
    for path in &files {
        let fragments = split_file(path, config.chunk_size_kb)?;
        println!("✓ {} -> {} fragments", path.display(), fragments);
    }

    println!("\nDone: {} files split", files.len());
    Ok(())
}
