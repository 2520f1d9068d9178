#![no_main]

use latido::recorder::LineRecorder;
use latido::registry::InstanceRegistry;
use latido::unit::TimeUnit;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Treat arbitrary bytes as source text and render an annotated copy.
    // This should never panic: construction either succeeds or fails with
    // a typed error, and every line of a valid source must round-trip.
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("input.txt");
    if std::fs::write(&source, data).is_err() {
        return;
    }

    let registry = InstanceRegistry::new();
    let Ok(mut rec) = LineRecorder::from_source_in(&registry, &source) else {
        return;
    };
    let _ = rec.tic(1);
    let _ = latido::annotate::render_annotated_copy(&rec, TimeUnit::Milliseconds);
});
