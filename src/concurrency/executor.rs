//! Fork-join executors for the fork-join strategy.
//!
//! The search only needs two things from a scheduler: a way to run the root
//! inside its pool, and "fork all of these, then join them in order and give me
//! the first hit". Load balancing is the executor's business; the rayon
//! executor gets it from rayon's work-stealing deques.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::SearchError;

/// A scheduler that can run a tree of fork-join tasks.
pub trait ForkJoinExecutor: Sync {
    /// Runs `op` inside this executor, so tasks forked from it land in the
    /// executor's pool.
    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send;

    /// Forks every task, then joins them in submission order and returns the
    /// first `Some`.
    ///
    /// Tasks after the winner may already be running; they are not aborted,
    /// only ignored.
    fn first_in_order<T, F>(&self, tasks: Vec<F>) -> Option<T>
    where
        F: FnOnce() -> Option<T> + Send,
        T: Send;
}

/// Work-stealing executor backed by rayon.
///
/// Either borrows the global rayon pool or owns a dedicated one with a fixed
/// worker count. Live parallelism never exceeds the pool size no matter how
/// many tasks the search forks.
#[derive(Debug, Default)]
pub struct RayonExecutor {
    pool: Option<ThreadPool>,
}

impl RayonExecutor {
    /// Uses the global rayon pool.
    pub fn global() -> Self {
        Self { pool: None }
    }

    /// Builds a dedicated pool with `threads` workers.
    ///
    /// # Errors
    /// Returns [`SearchError::PoolBuild`] if `threads` is zero or rayon cannot
    /// start the pool.
    pub fn with_threads(threads: usize) -> Result<Self, SearchError> {
        // rayon treats zero as "pick a default".
        if threads == 0 {
            return Err(SearchError::PoolBuild {
                reason: "a dedicated pool needs at least one thread".to_owned(),
            });
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("hamcycle-fj-{i}"))
            .build()
            .map_err(|e| SearchError::PoolBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of worker threads tasks can run on.
    pub fn current_num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl ForkJoinExecutor for RayonExecutor {
    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    fn first_in_order<T, F>(&self, tasks: Vec<F>) -> Option<T>
    where
        F: FnOnce() -> Option<T> + Send,
        T: Send,
    {
        // `find_map_first` keeps every task before the winner and may skip
        // the ones after it.
        tasks.into_par_iter().find_map_first(|task| task())
    }
}

/// Runs every task on the calling thread, in order.
///
/// Useful as a deterministic baseline: the first cycle it finds is the one a
/// plain depth-first search would find.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialExecutor;

impl ForkJoinExecutor for SequentialExecutor {
    fn install<R, OP>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        op()
    }

    fn first_in_order<T, F>(&self, tasks: Vec<F>) -> Option<T>
    where
        F: FnOnce() -> Option<T> + Send,
        T: Send,
    {
        tasks.into_iter().find_map(|task| task())
    }
}
