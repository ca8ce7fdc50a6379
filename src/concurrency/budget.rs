//! Thread-budget arithmetic for the thread-budget strategy.
//!
//! Kept free of any threading so the split can be tested on its own.

/// How a branch runs once its share of the budget is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchMode {
    /// Run on the current thread, sharing the caller's path buffer.
    Inline,
    /// Run on a fresh thread with a private copy of the path.
    Spawn,
}

impl BranchMode {
    /// A branch gets its own thread only if it may spawn further below.
    #[inline]
    pub const fn for_budget(budget: usize) -> Self {
        if budget > 1 {
            Self::Spawn
        } else {
            Self::Inline
        }
    }
}

/// Splits `budget` across `branches` children.
///
/// Every child gets `budget / branches`; the first `budget % branches`
/// children get one more. The result is non-increasing and sums to `budget`.
/// Zero branches yields an empty split.
pub fn split_budget(budget: usize, branches: usize) -> Vec<usize> {
    if branches == 0 {
        return Vec::new();
    }
    let base = budget / branches;
    let extra = budget % branches;
    (0..branches)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}
