//! Tabular report rendering
//!
//! Sprint 2: Report output for recorded line statistics
//!
//! Reads a recorder's cells without mutating them and writes aligned rows
//! to a caller-supplied sink. Rendering twice without intervening tics
//! produces identical output.

use crate::annotate;
use crate::error::Result;
use crate::recorder::{LineRecorder, LineStats};
use crate::unit::TimeUnit;
use std::io::Write;
use std::path::PathBuf;

/// Width of the rendered average value column
pub(crate) const VALUE_WIDTH: usize = 13;

/// Which outputs the combined [`Reporter::output`] operation produces
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Write an annotated copy of the source file
    pub annotate: bool,
    /// Write a tabular report to the sink
    pub print: bool,
    /// Unit for rendered averages
    pub unit: TimeUnit,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            annotate: false,
            print: true,
            unit: TimeUnit::default(),
        }
    }
}

/// Read-only view over a recorder that renders its statistics
#[derive(Debug)]
pub struct Reporter<'a> {
    recorder: &'a LineRecorder,
}

/// One aligned statistics row: `Line <4> | Calls <10> | <Unit> <13> |`
pub(crate) fn format_row(line: usize, stats: &LineStats, unit: TimeUnit) -> String {
    format!(
        "Line {:>4} | Calls {:>10} | {} {:>13.prec$} |",
        line,
        stats.calls,
        unit.label(),
        unit.scale(stats.avg_nanos),
        prec = unit.decimals(),
    )
}

/// A row with the calls and value columns blank-filled to matching width
pub(crate) fn format_blank_row(line: usize, unit: TimeUnit) -> String {
    // 16 = "Calls " plus the 10-wide counter column
    format!(
        "Line {:>4} | {:>16} | {:>width$} |",
        line,
        "",
        "",
        width = unit.label().len() + 1 + VALUE_WIDTH,
    )
}

impl<'a> Reporter<'a> {
    /// Create a reporter over `recorder`
    pub fn new(recorder: &'a LineRecorder) -> Self {
        Self { recorder }
    }

    /// Write one row per visited line to `sink`
    ///
    /// Lines with a zero call count are omitted. Averages are converted to
    /// `unit` at render time; the recorded nanosecond values are untouched.
    pub fn render_report<W: Write>(&self, unit: TimeUnit, sink: &mut W) -> Result<()> {
        writeln!(sink)?;
        writeln!(sink, "TIC print: {}", self.recorder.source_path().display())?;
        for (line, stats) in self.recorder.cells() {
            if stats.calls > 0 {
                writeln!(sink, "{}", format_row(line, stats, unit))?;
            }
        }
        Ok(())
    }

    /// Dump every cell, including untouched lines, in milliseconds
    pub fn dump_cells<W: Write>(&self, sink: &mut W) -> Result<()> {
        writeln!(sink, "Data entries:")?;
        for (line, stats) in self.recorder.cells() {
            writeln!(sink, "{}", format_row(line, stats, TimeUnit::Milliseconds))?;
        }
        Ok(())
    }

    /// One-line summary of the tracked source
    pub fn info_line<W: Write>(&self, sink: &mut W) -> Result<()> {
        writeln!(
            sink,
            "filename = {}\tnumber of lines = {}",
            self.recorder.source_path().display(),
            self.recorder.line_count()
        )?;
        Ok(())
    }

    /// Render an annotated copy of the source at its derived output path
    ///
    /// Returns the path that was written. See [`annotate`] for naming and
    /// layout details.
    pub fn render_annotated_copy(&self, unit: TimeUnit) -> Result<PathBuf> {
        annotate::render_annotated_copy(self.recorder, unit)
    }

    /// Render an annotated copy to an explicit destination
    pub fn render_annotated_copy_to(
        &self,
        unit: TimeUnit,
        output: impl Into<PathBuf>,
    ) -> Result<()> {
        annotate::render_annotated_copy_to(self.recorder, unit, &output.into())
    }

    /// Combined output operation: either, both, or neither of the two forms
    ///
    /// Returns the annotated-copy path when one was written.
    pub fn output<W: Write>(
        &self,
        options: OutputOptions,
        sink: &mut W,
    ) -> Result<Option<PathBuf>> {
        if options.print {
            self.render_report(options.unit, sink)?;
        }
        let mut written = None;
        if options.annotate {
            written = Some(self.render_annotated_copy(options.unit)?);
        }
        Ok(written)
    }
}
