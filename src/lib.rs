// Public API exports
pub mod config;
pub mod scanner;
pub mod splitter;

// Re-export main types for convenience
pub use config::RunConfig;

pub use scanner::{scan_folder, TXT_SUFFIX};

pub use splitter::{char_chunks, fragment_path, split_file, DEFAULT_CHUNK_SIZE_KB};
