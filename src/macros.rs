//! Call-site shortcut macros
//!
//! Sprint 4: Macro shortcuts with compile-time disable
//!
//! The macros capture the current source line via `line!()` and forward to
//! the recorder, keeping instrumentation sites to a single token:
//!
//! ```ignore
//! let mut profiler = tic_init!()?;          // recorder over file!()
//! tic!(profiler)?;                          // checkpoint at this line
//! tic_print!(profiler)?;                    // tabular report to stdout
//! tic_annotate!(profiler)?;                 // annotated copy of file!()
//! tic_annotate_print!(profiler)?;           // both
//! ```
//!
//! With the `instrument` feature disabled each macro expands to a no-op
//! that ignores its argument and evaluates to `Ok`, and `tic_init!` yields
//! a [`NoopRecorder`](crate::noop::NoopRecorder) instead, so instrumented
//! call sites compile away entirely.

/// Record a tic checkpoint at the current source line
#[cfg(feature = "instrument")]
#[macro_export]
macro_rules! tic {
    ($recorder:expr) => {
        $recorder.tic(line!() as usize)
    };
}

/// Record a tic checkpoint at the current source line (disabled: no-op)
#[cfg(not(feature = "instrument"))]
#[macro_export]
macro_rules! tic {
    ($recorder:expr) => {{
        let _ = &$recorder;
        $crate::error::Result::Ok(())
    }};
}

/// Create a recorder over the current source file
#[cfg(feature = "instrument")]
#[macro_export]
macro_rules! tic_init {
    () => {
        $crate::recorder::LineRecorder::from_source(file!())
    };
}

/// Create a recorder over the current source file (disabled: null object)
#[cfg(not(feature = "instrument"))]
#[macro_export]
macro_rules! tic_init {
    () => {
        $crate::error::Result::Ok($crate::noop::NoopRecorder::new(file!()))
    };
}

/// Render the tabular report to stdout
#[cfg(feature = "instrument")]
#[macro_export]
macro_rules! tic_print {
    ($recorder:expr) => {
        $recorder.output(
            $crate::report::OutputOptions {
                annotate: false,
                print: true,
                unit: $crate::unit::TimeUnit::Milliseconds,
            },
            &mut ::std::io::stdout(),
        )
    };
}

/// Render the tabular report to stdout (disabled: no-op)
#[cfg(not(feature = "instrument"))]
#[macro_export]
macro_rules! tic_print {
    ($recorder:expr) => {{
        let _ = &$recorder;
        $crate::error::Result::<::std::option::Option<::std::path::PathBuf>>::Ok(
            ::std::option::Option::None,
        )
    }};
}

/// Write an annotated copy of the tracked source
#[cfg(feature = "instrument")]
#[macro_export]
macro_rules! tic_annotate {
    ($recorder:expr) => {
        $recorder.output(
            $crate::report::OutputOptions {
                annotate: true,
                print: false,
                unit: $crate::unit::TimeUnit::Milliseconds,
            },
            &mut ::std::io::stdout(),
        )
    };
}

/// Write an annotated copy of the tracked source (disabled: no-op)
#[cfg(not(feature = "instrument"))]
#[macro_export]
macro_rules! tic_annotate {
    ($recorder:expr) => {{
        let _ = &$recorder;
        $crate::error::Result::<::std::option::Option<::std::path::PathBuf>>::Ok(
            ::std::option::Option::None,
        )
    }};
}

/// Report to stdout and write an annotated copy
#[cfg(feature = "instrument")]
#[macro_export]
macro_rules! tic_annotate_print {
    ($recorder:expr) => {
        $recorder.output(
            $crate::report::OutputOptions {
                annotate: true,
                print: true,
                unit: $crate::unit::TimeUnit::Milliseconds,
            },
            &mut ::std::io::stdout(),
        )
    };
}

/// Report to stdout and write an annotated copy (disabled: no-op)
#[cfg(not(feature = "instrument"))]
#[macro_export]
macro_rules! tic_annotate_print {
    ($recorder:expr) => {{
        let _ = &$recorder;
        $crate::error::Result::<::std::option::Option<::std::path::PathBuf>>::Ok(
            ::std::option::Option::None,
        )
    }};
}
