//! The shared "solution found" signal.
//!
//! Every branch polls this flag before doing any work, so it sits on its own
//! cache line. Under `--cfg loom` the inner atomic is swapped for loom's so the
//! compare-and-set can be model checked.

use crossbeam_utils::CachePadded;

#[cfg(loom)]
use loom::sync::atomic::{AtomicBool, Ordering};
#[cfg(not(loom))]
use std::sync::atomic::{AtomicBool, Ordering};

/// A write-once boolean shared by all branches of one search.
///
/// There is no `store` or `reset`. The only transition is
/// `false -> true`, performed by [`try_set`](Self::try_set).
pub struct SolutionFlag {
    inner: CachePadded<AtomicBool>,
}

impl SolutionFlag {
    /// Creates an unset flag.
    pub fn new() -> Self {
        Self {
            inner: CachePadded::new(AtomicBool::new(false)),
        }
    }

    /// Returns `true` once some branch has claimed the solution.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// Sets the flag if it is still unset.
    ///
    /// Returns `true` only for the one caller that performed the transition;
    /// every later (or concurrently losing) caller gets `false`.
    #[inline]
    pub fn try_set(&self) -> bool {
        self.inner
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for SolutionFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for SolutionFlag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SolutionFlag")
            .field("set", &self.is_set())
            .finish()
    }
}
