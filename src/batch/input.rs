// src/batch/input.rs
// =============================================================================
// Reads an input file (base URLs or URI suffixes) into a list of lines.
//
// Line handling:
// - CRLF and LF line endings are both accepted (BufRead::lines strips them)
// - Lines that are empty or only whitespace are skipped, otherwise a blank
//   base line would turn every suffix into a bare path candidate
// - Everything else is kept verbatim, leading/trailing spaces included
//
// Rust concepts:
// - BufReader: Reads the file in chunks instead of one syscall per byte
// - Closures: `input_error` captures the path once and is reused for every
//   error conversion
// =============================================================================

use crate::error::SetupError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads `path` line by line. Any open or read failure (including invalid
/// UTF-8) is a fatal `SetupError::InputFile`.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SetupError> {
    let input_error = |source| SetupError::InputFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut skipped = 0usize;

    for line in reader.lines() {
        let line = line.map_err(input_error)?;

        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }

        lines.push(line);
    }

    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        skipped,
        "read input file"
    );

    Ok(lines)
}
