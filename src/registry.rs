//! Instance identity for recorders
//!
//! Sprint 1: The prototype used a bare static counter bumped in every
//! constructor. An explicit registry object keeps construction testable in
//! isolation while still offering a process-wide default for the common
//! one-liner setup.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

/// Allocates unique recorder instance ids within one process
///
/// Ids start at 1 and only ever grow. They are used to derive distinct
/// annotated-copy filenames when several recorders track the same source.
#[derive(Debug, Default)]
pub struct InstanceRegistry {
    counter: AtomicU32,
}

impl InstanceRegistry {
    /// Create a registry whose first issued id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next instance id
    pub fn next_id(&self) -> u32 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of ids issued so far
    pub fn issued(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }

    /// The process-wide default registry
    pub fn global() -> &'static InstanceRegistry {
        static GLOBAL: OnceLock<InstanceRegistry> = OnceLock::new();
        GLOBAL.get_or_init(InstanceRegistry::new)
    }
}
