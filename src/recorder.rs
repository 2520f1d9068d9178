//! Per-line tic recording
//!
//! Sprint 1: Core recorder implementation
//!
//! A [`LineRecorder`] owns one statistics cell per source line and a single
//! shared "previous tic" timestamp. Each tic measures elapsed time since
//! the previous tic of *any* line, so consecutive checkpoints profile the
//! sequential phases of a program rather than per-line revisit intervals.

use crate::error::{ProfilerError, Result};
use crate::registry::InstanceRegistry;
use crate::source;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Running statistics for a single source line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineStats {
    /// Number of tics recorded against this line
    pub calls: u64,
    /// Running average elapsed time in nanoseconds
    pub avg_nanos: f64,
}

impl LineStats {
    /// Fold a new observation into the running average
    ///
    /// Incremental mean: `(a*n + d) / (n + 1)`, carried in f64 nanoseconds
    /// so no observation history needs to be stored.
    fn fold(&mut self, nanos: f64) {
        let n = self.calls as f64;
        self.avg_nanos = (self.avg_nanos * n + nanos) / (n + 1.0);
        self.calls += 1;
    }
}

/// Records tic checkpoints against the lines of one source file
///
/// The shared previous-tic timestamp and the statistics cells are updated
/// through `&mut self`, so unsynchronized concurrent tics are
/// unrepresentable; callers that share a recorder across threads wrap it
/// in a lock.
#[derive(Debug)]
pub struct LineRecorder {
    /// Path of the tracked source file
    source: PathBuf,
    /// Registry-assigned instance id, used for output naming
    instance_id: u32,
    /// One cell per line, index 0 holding line 1
    cells: Vec<LineStats>,
    /// Timestamp of the most recent tic (or construction)
    previous: Instant,
}

impl LineRecorder {
    /// Create a recorder with an explicit line count
    ///
    /// Rejects a zero line count: a recorder must always have at least one
    /// trackable line.
    pub fn with_line_count(source: impl Into<PathBuf>, line_count: usize) -> Result<Self> {
        Self::with_line_count_in(InstanceRegistry::global(), source, line_count)
    }

    /// Create a recorder with an explicit line count and an injected registry
    pub fn with_line_count_in(
        registry: &InstanceRegistry,
        source: impl Into<PathBuf>,
        line_count: usize,
    ) -> Result<Self> {
        let source = source.into();
        if line_count == 0 {
            return Err(ProfilerError::EmptySource { path: source });
        }
        let instance_id = registry.next_id();
        debug!(
            source = %source.display(),
            line_count,
            instance_id,
            "recorder created"
        );
        Ok(Self {
            source,
            instance_id,
            cells: vec![LineStats::default(); line_count],
            previous: Instant::now(),
        })
    }

    /// Create a recorder by counting the lines of the source file
    ///
    /// Fails fast when the source cannot be read or holds no lines; no
    /// degraded recorder is ever constructed.
    pub fn from_source(source: impl Into<PathBuf>) -> Result<Self> {
        Self::from_source_in(InstanceRegistry::global(), source)
    }

    /// Create a recorder from a source file with an injected registry
    pub fn from_source_in(
        registry: &InstanceRegistry,
        source: impl Into<PathBuf>,
    ) -> Result<Self> {
        let source = source.into();
        let line_count = source::count_lines(&source)?;
        Self::with_line_count_in(registry, source, line_count)
    }

    /// Record a tic checkpoint against `line`
    ///
    /// Measures elapsed time since the previous tic on this recorder (or
    /// since construction for the first tic), folds it into the cell at
    /// `line`, and advances the shared timestamp. Out-of-range lines are
    /// rejected without touching any state.
    pub fn tic(&mut self, line: usize) -> Result<()> {
        let now = Instant::now();
        let elapsed = now - self.previous;
        self.observe(line, elapsed)?;
        self.previous = now;
        Ok(())
    }

    /// Fold a caller-measured elapsed duration into the cell at `line`
    ///
    /// Unlike [`tic`](Self::tic) this does not read the clock and leaves
    /// the shared previous-tic timestamp alone.
    pub fn observe(&mut self, line: usize, elapsed: Duration) -> Result<()> {
        let cell = self.cell_mut(line)?;
        cell.fold(elapsed.as_nanos() as f64);
        Ok(())
    }

    fn cell_mut(&mut self, line: usize) -> Result<&mut LineStats> {
        let line_count = self.cells.len();
        if line == 0 || line > line_count {
            warn!(line, line_count, "tic outside tracked range rejected");
            return Err(ProfilerError::LineOutOfRange { line, line_count });
        }
        Ok(&mut self.cells[line - 1])
    }

    /// Path of the tracked source file
    pub fn source_path(&self) -> &Path {
        &self.source
    }

    /// Number of tracked lines
    pub fn line_count(&self) -> usize {
        self.cells.len()
    }

    /// Registry-assigned instance id
    pub fn instance_id(&self) -> u32 {
        self.instance_id
    }

    /// Statistics for one line, if it lies in the tracked range
    pub fn stats(&self, line: usize) -> Option<&LineStats> {
        if line == 0 {
            return None;
        }
        self.cells.get(line - 1)
    }

    /// Iterate all cells as `(line, stats)` pairs in line order
    pub fn cells(&self) -> impl Iterator<Item = (usize, &LineStats)> {
        self.cells.iter().enumerate().map(|(i, s)| (i + 1, s))
    }

    /// Combined output shortcut, equivalent to rendering through a
    /// [`Reporter`](crate::report::Reporter)
    pub fn output<W: std::io::Write>(
        &self,
        options: crate::report::OutputOptions,
        sink: &mut W,
    ) -> Result<Option<PathBuf>> {
        crate::report::Reporter::new(self).output(options, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(lines: usize) -> LineRecorder {
        let registry = InstanceRegistry::new();
        LineRecorder::with_line_count_in(&registry, "src/fake.rs", lines).unwrap()
    }

    #[test]
    fn test_cells_zero_initialized() {
        let rec = recorder(5);
        assert_eq!(rec.line_count(), 5);
        for (_, stats) in rec.cells() {
            assert_eq!(stats.calls, 0);
            assert_eq!(stats.avg_nanos, 0.0);
        }
    }

    #[test]
    fn test_zero_line_count_rejected() {
        let registry = InstanceRegistry::new();
        let err = LineRecorder::with_line_count_in(&registry, "src/fake.rs", 0).unwrap_err();
        assert!(matches!(err, ProfilerError::EmptySource { .. }));
    }

    #[test]
    fn test_tic_counts_calls() {
        let mut rec = recorder(10);
        for _ in 0..7 {
            rec.tic(3).unwrap();
        }
        assert_eq!(rec.stats(3).unwrap().calls, 7);
    }

    #[test]
    fn test_tic_out_of_range_rejected() {
        let mut rec = recorder(10);
        let err = rec.tic(11).unwrap_err();
        assert!(matches!(
            err,
            ProfilerError::LineOutOfRange {
                line: 11,
                line_count: 10
            }
        ));
        let err = rec.tic(0).unwrap_err();
        assert!(matches!(err, ProfilerError::LineOutOfRange { line: 0, .. }));
    }

    #[test]
    fn test_rejected_tic_leaves_neighbors_untouched() {
        let mut rec = recorder(10);
        rec.observe(10, Duration::from_nanos(500)).unwrap();
        let before = *rec.stats(10).unwrap();

        assert!(rec.tic(11).is_err());

        assert_eq!(*rec.stats(10).unwrap(), before);
        assert_eq!(rec.stats(1).unwrap().calls, 0);
    }

    #[test]
    fn test_observe_exact_mean() {
        let mut rec = recorder(10);
        rec.observe(4, Duration::from_nanos(1_000)).unwrap();
        rec.observe(4, Duration::from_nanos(2_000)).unwrap();
        rec.observe(4, Duration::from_nanos(6_000)).unwrap();

        let stats = rec.stats(4).unwrap();
        assert_eq!(stats.calls, 3);
        assert!((stats.avg_nanos - 3_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_observe_does_not_advance_shared_timestamp() {
        let mut rec = recorder(10);
        let before = rec.previous;
        rec.observe(2, Duration::from_millis(5)).unwrap();
        assert_eq!(rec.previous, before);
    }

    #[test]
    fn test_tics_span_lines() {
        let mut rec = recorder(10);
        rec.tic(1).unwrap();
        rec.tic(5).unwrap();
        rec.tic(5).unwrap();
        rec.tic(9).unwrap();

        assert_eq!(rec.stats(1).unwrap().calls, 1);
        assert_eq!(rec.stats(5).unwrap().calls, 2);
        assert_eq!(rec.stats(9).unwrap().calls, 1);
        assert_eq!(rec.stats(2).unwrap().calls, 0);
    }

    #[test]
    fn test_stats_accessor_bounds() {
        let rec = recorder(3);
        assert!(rec.stats(0).is_none());
        assert!(rec.stats(1).is_some());
        assert!(rec.stats(3).is_some());
        assert!(rec.stats(4).is_none());
    }

    #[test]
    fn test_instance_ids_distinct_per_registry() {
        let registry = InstanceRegistry::new();
        let a = LineRecorder::with_line_count_in(&registry, "src/fake.rs", 3).unwrap();
        let b = LineRecorder::with_line_count_in(&registry, "src/fake.rs", 3).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn test_from_source_counts_lines() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..12 {
            writeln!(file, "line {}", i).unwrap();
        }
        let registry = InstanceRegistry::new();
        let rec = LineRecorder::from_source_in(&registry, file.path()).unwrap();
        assert_eq!(rec.line_count(), 12);
        assert_eq!(rec.source_path(), file.path());
    }

    #[test]
    fn test_from_source_missing_file_fails_fast() {
        let registry = InstanceRegistry::new();
        let err = LineRecorder::from_source_in(&registry, "/no/such/file.rs").unwrap_err();
        assert!(matches!(err, ProfilerError::SourceUnreadable { .. }));
    }

    #[test]
    fn test_from_source_empty_file_fails_fast() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let registry = InstanceRegistry::new();
        let err = LineRecorder::from_source_in(&registry, file.path()).unwrap_err();
        assert!(matches!(err, ProfilerError::EmptySource { .. }));
    }

    #[test]
    fn test_incremental_mean_running_value() {
        let mut cell = LineStats::default();
        cell.fold(10.0);
        assert_eq!(cell.avg_nanos, 10.0);
        cell.fold(20.0);
        assert_eq!(cell.avg_nanos, 15.0);
        cell.fold(30.0);
        assert_eq!(cell.avg_nanos, 20.0);
        assert_eq!(cell.calls, 3);
    }
}
