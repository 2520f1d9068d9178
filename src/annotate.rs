//! Annotated source copies
//!
//! Sprint 3: Annotated copy output
//!
//! Writes a line-for-line copy of the tracked source with a fixed-width
//! timing comment in front of every line. Visited lines carry their call
//! count and average; untouched lines get a blank comment of identical
//! width so the copy stays column-aligned. A footer names the column
//! meanings and the render time.

use crate::error::{ProfilerError, Result};
use crate::recorder::LineRecorder;
use crate::report::{self, VALUE_WIDTH};
use crate::unit::TimeUnit;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const SEPARATOR_WIDTH: usize = 105;

/// Derive the annotated-copy path for a recorder
///
/// `<file-name>_prf<instance-id>.<ext>` next to the source, `<ext>` being
/// the source's own extension (`txt` when it has none). The instance id
/// keeps copies from different recorders over the same source from
/// colliding.
pub fn annotated_path(recorder: &LineRecorder) -> PathBuf {
    let source = recorder.source_path();
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");
    let file_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{}_prf{}.{}", file_name, recorder.instance_id(), ext))
}

/// Render an annotated copy at the derived output path
pub fn render_annotated_copy(recorder: &LineRecorder, unit: TimeUnit) -> Result<PathBuf> {
    let output = annotated_path(recorder);
    render_annotated_copy_to(recorder, unit, &output)?;
    Ok(output)
}

/// Render an annotated copy of the recorder's source to `output`
///
/// Every physical source line is copied exactly once, in order, regardless
/// of call count. Lines past the recorder's declared line count are still
/// copied with a blank prefix. Both file handles close on every exit path.
pub fn render_annotated_copy_to(
    recorder: &LineRecorder,
    unit: TimeUnit,
    output: &Path,
) -> Result<()> {
    let source_path = recorder.source_path();
    let source = File::open(source_path).map_err(|source| ProfilerError::SourceUnreadable {
        path: source_path.to_path_buf(),
        source,
    })?;
    let destination = File::create(output).map_err(|source| ProfilerError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(
        source = %source_path.display(),
        output = %output.display(),
        "rendering annotated copy"
    );

    let reader = BufReader::new(source);
    let mut writer = BufWriter::new(destination);

    let mut line_no = 0;
    for line in reader.lines() {
        let line = line?;
        line_no += 1;
        let row = match recorder.stats(line_no) {
            Some(stats) if stats.calls > 0 => report::format_row(line_no, stats, unit),
            _ => report::format_blank_row(line_no, unit),
        };
        writeln!(writer, "/* {} */ {}", row, line)?;
    }

    write_footer(&mut writer, unit)?;
    writer.flush()?;
    Ok(())
}

/// Trailing footer: separator, column header with render timestamp, separator
fn write_footer<W: Write>(writer: &mut W, unit: TimeUnit) -> Result<()> {
    let separator = format!("/* {} */", "-".repeat(SEPARATOR_WIDTH));
    let timestamp = chrono::Local::now().format("%a %b %e %H:%M:%S %Y");
    writeln!(writer, "{}", separator)?;
    writeln!(
        writer,
        "/* {:<9} | {:<16} | {:<value_col$} | latido run at {} */",
        "",
        "Call Counter",
        "Average Time",
        timestamp,
        value_col = unit.label().len() + 1 + VALUE_WIDTH,
    )?;
    writeln!(writer, "{}", separator)?;
    Ok(())
}
