//! Latido - Source-line timing instrumentation with annotated source output
//!
//! This library lets a program mark "tic" checkpoints at source lines,
//! accumulates a call count and running average elapsed time per line, and
//! renders the results as a tabular report or as an annotated copy of the
//! source file with per-line timing comments.
//!
//! Each tic measures elapsed time since the previous tic of any line on
//! the same recorder, so consecutive checkpoints profile the sequential
//! phases of a program.

pub mod annotate;
pub mod error;
mod macros;
pub mod noop;
pub mod recorder;
pub mod registry;
pub mod report;
pub mod source;
pub mod unit;
