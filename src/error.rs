//! Error types for recorder construction, tic recording, and rendering
//!
//! Sprint 1: Typed error taxonomy replacing the sentinel returns of the
//! prototype (a -1 line count left recorders in a degraded state; an
//! out-of-range tic was an out-of-bounds write). All three failure classes
//! are local, synchronous, and recoverable by the host.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors for profiler operations
#[derive(Error, Debug)]
pub enum ProfilerError {
    #[error("unable to open source file {}: {}", .path.display(), .source)]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source file {} contains no lines", .path.display())]
    EmptySource { path: PathBuf },

    #[error("line {line} is outside the tracked range 1..={line_count}")]
    LineOutOfRange { line: usize, line_count: usize },

    #[error("unable to create annotated copy {}: {}", .path.display(), .source)]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while rendering: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProfilerError>;
