//! Disabled-mode recorder
//!
//! Sprint 4: Null-object recorder for the compile-time switch
//!
//! [`NoopRecorder`] mirrors the call-site surface of
//! [`LineRecorder`](crate::recorder::LineRecorder) with empty bodies, so a
//! host can swap the two types and keep every instrumentation site
//! compiling. It never reads the clock, never touches the filesystem, and
//! never consumes a registry id.

use crate::error::Result;
use crate::registry::InstanceRegistry;
use crate::report::OutputOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Recorder stand-in that records nothing
#[derive(Debug, Clone)]
pub struct NoopRecorder {
    source: PathBuf,
}

impl NoopRecorder {
    /// Create a no-op recorder for `source`
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Surface parity with `LineRecorder::with_line_count`; always succeeds
    pub fn with_line_count(source: impl Into<PathBuf>, _line_count: usize) -> Result<Self> {
        Ok(Self::new(source))
    }

    /// Surface parity with `LineRecorder::from_source`; does not open the file
    pub fn from_source(source: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(source))
    }

    /// Surface parity with the registry-injected constructors
    pub fn from_source_in(
        _registry: &InstanceRegistry,
        source: impl Into<PathBuf>,
    ) -> Result<Self> {
        Ok(Self::new(source))
    }

    /// Does nothing
    pub fn tic(&mut self, _line: usize) -> Result<()> {
        Ok(())
    }

    /// Does nothing
    pub fn observe(&mut self, _line: usize, _elapsed: Duration) -> Result<()> {
        Ok(())
    }

    /// Path the recorder was created for
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Always zero: nothing is tracked
    pub fn line_count(&self) -> usize {
        0
    }

    /// Always zero: no registry id is consumed
    pub fn instance_id(&self) -> u32 {
        0
    }

    /// Writes nothing and reports no annotated copy
    pub fn output<W: Write>(
        &self,
        _options: OutputOptions,
        _sink: &mut W,
    ) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}
