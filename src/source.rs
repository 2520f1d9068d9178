//! Line counting for tracked source files

use crate::error::{ProfilerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count the lines of the identified text
///
/// A trailing fragment without a terminating newline still counts as a
/// line. Unreadable files surface as [`ProfilerError::SourceUnreadable`]
/// rather than a sentinel count.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| ProfilerError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut count = 0;
    for line in reader.lines() {
        line?;
        count += 1;
    }
    Ok(count)
}
