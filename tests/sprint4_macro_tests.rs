//! Sprint 4: Macro shortcut tests
//!
//! The tic! family against a real recorder over this very test file.

#![cfg(feature = "instrument")]

use latido::recorder::LineRecorder;
use latido::{tic, tic_annotate, tic_init};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_tic_init_binds_to_this_file() {
    let rec = tic_init!().unwrap();
    assert!(rec.source_path().ends_with("sprint4_macro_tests.rs"));
    // This file is longer than a screenful
    assert!(rec.line_count() > 20);
}

#[test]
fn test_tic_records_at_call_site_line() {
    let mut rec = tic_init!().unwrap();
    let expected = line!() as usize + 1;
    tic!(rec).unwrap();

    assert_eq!(rec.stats(expected).unwrap().calls, 1);
    // No other line was touched
    let visited: Vec<usize> = rec
        .cells()
        .filter(|(_, s)| s.calls > 0)
        .map(|(line, _)| line)
        .collect();
    assert_eq!(visited, vec![expected]);
}

#[test]
fn test_repeated_tics_in_loop() {
    let mut rec = tic_init!().unwrap();
    let expected = line!() as usize + 2;
    for _ in 0..5 {
        tic!(rec).unwrap();
    }
    assert_eq!(rec.stats(expected).unwrap().calls, 5);
}

#[test]
fn test_tic_annotate_writes_copy_of_this_file() {
    // Annotate a scratch copy of this file so the output lands in the
    // tempdir, not next to the test sources.
    let dir = tempfile::tempdir().unwrap();
    let scratch = dir.path().join("sprint4_macro_tests.rs");
    fs::copy(file!(), &scratch).unwrap();

    let mut rec = LineRecorder::from_source(&scratch).unwrap();
    tic!(rec).unwrap();

    let written = tic_annotate!(rec).unwrap();
    let copy: PathBuf = written.expect("annotated copy path");
    assert!(copy.starts_with(dir.path()));

    let original_lines = fs::read_to_string(file!()).unwrap().lines().count();
    let copy_lines = fs::read_to_string(&copy).unwrap().lines().count();
    assert_eq!(copy_lines, original_lines + 3);
}
