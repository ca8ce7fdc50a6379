//! Concurrency building blocks shared by the two search strategies.
//!
//! - `flag`: the write-once "solution found" signal every branch polls
//! - `budget`: splitting a thread budget across branches
//! - `scoped`: scoped OS threads for the thread-budget strategy
//! - `executor`: fork-join schedulers for the fork-join strategy

pub mod budget;
pub mod executor;
pub mod flag;
pub mod scoped;

pub use budget::{split_budget, BranchMode};
pub use executor::{ForkJoinExecutor, RayonExecutor, SequentialExecutor};
pub use flag::SolutionFlag;
