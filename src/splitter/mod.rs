
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default per-fragment budget, in kilobytes of characters read
pub const DEFAULT_CHUNK_SIZE_KB: usize = 64;

/// Iterate over contiguous, non-overlapping slices of `text`, each holding at
/// most `max_chars` characters. Slices always break on `char` boundaries, so
/// every chunk is valid UTF-8; the last chunk may be shorter and no chunk is
/// ever empty. A zero budget yields no chunks at all.
pub fn char_chunks(text: &str, max_chars: usize) -> CharChunks<'_> {
    CharChunks {
        rest: text,
        max_chars,
    }
}

/// Borrowing iterator returned by [`char_chunks`]
#[derive(Debug)]
pub struct CharChunks<'a> {
    rest: &'a str,
    max_chars: usize,
}

impl<'a> Iterator for CharChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() || self.max_chars == 0 {
            return None;
        }

        // Byte offset just past the first `max_chars` characters, or the
        // whole remainder if fewer are left.
        let split = self
            .rest
            .char_indices()
            .nth(self.max_chars)
            .map_or(self.rest.len(), |(offset, _)| offset);

        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(chunk)
    }
}

/// Path of the `part_num`-th fragment of `source`: the source path itself
/// with `_part_<N>` appended (1-based, no zero padding).
pub fn fragment_path(source: &Path, part_num: usize) -> PathBuf {
    let mut name = source.as_os_str().to_os_string();
    name.push(format!("_part_{part_num}"));
    PathBuf::from(name)
}

/// Split one UTF-8 text file into fragment files written next to the source.
///
/// Reads the whole file, then writes each chunk of up to
/// `chunk_size_kb * 1024` characters verbatim as `<source>_part_<N>`.
/// Returns the number of fragments written; an empty source or a zero
/// budget yields zero fragments and no files. The source itself is never modified, and a read
/// or write failure aborts the loop, leaving any fragments already written
/// on disk.
pub fn split_file(path: &Path, chunk_size_kb: usize) -> Result<usize> {
    let max_chars = chunk_size_kb * 1024;

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file {}", path.display()))?;

    let mut part_num = 0;
    for chunk in char_chunks(&text, max_chars) {
        part_num += 1;
        let part_path = fragment_path(path, part_num);
        fs::write(&part_path, chunk)
            .with_context(|| format!("Failed to write fragment {}", part_path.display()))?;
    }

    Ok(part_num)
}
