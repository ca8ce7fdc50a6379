//! Fork-join search: one task per viable branch, no budget bookkeeping.
//!
//! Each call forks a task for every valid neighbor, each owning its own copy of
//! the extended path, then joins them in submission order. How many tasks run
//! at once is the executor's decision, not the algorithm's.

use std::panic::{self, AssertUnwindSafe};

use crate::concurrency::executor::{ForkJoinExecutor, RayonExecutor};
use crate::error::SearchError;
use crate::graph::DirectedGraph;

use crate::concurrency::scoped::panic_message;

use super::{HamiltonianCycle, SearchContext};

/// Searches for a Hamiltonian cycle through `start` on the current rayon pool.
///
/// Inside `ThreadPool::install` this is that pool; otherwise the global one.
///
/// # Errors
/// - [`SearchError::InvalidStartVertex`] if `start` is not a vertex.
/// - [`SearchError::BranchPanicked`] if a task panicked.
pub fn solve_fork_join(
    graph: &DirectedGraph,
    start: usize,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    solve_fork_join_with(graph, start, &RayonExecutor::global())
}

/// Searches for a Hamiltonian cycle through `start` on `executor`.
///
/// A panic in any task reaches the caller through the joins and is reported
/// as [`SearchError::BranchPanicked`] against `start`, since the join tree does
/// not say which branch it came from.
///
/// # Errors
/// - [`SearchError::InvalidStartVertex`] if `start` is not a vertex.
/// - [`SearchError::BranchPanicked`] if a task panicked.
pub fn solve_fork_join_with<E: ForkJoinExecutor>(
    graph: &DirectedGraph,
    start: usize,
    executor: &E,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    let ctx = SearchContext::new(graph, start)?;
    tracing::info!(start, vertices = graph.vertex_count(), "fork-join search started");

    let search = ForkJoinSearch {
        ctx: &ctx,
        executor,
    };
    let found = panic::catch_unwind(AssertUnwindSafe(|| {
        executor.install(|| search.explore(start, vec![start]))
    }))
    .map_err(|payload| SearchError::BranchPanicked {
        vertex: start,
        message: panic_message(&*payload),
    })?;

    tracing::info!(start, found = found.is_some(), "fork-join search finished");
    Ok(found.map(HamiltonianCycle::from_path))
}

struct ForkJoinSearch<'a, 'g, E> {
    ctx: &'a SearchContext<'g>,
    executor: &'a E,
}

impl<E: ForkJoinExecutor> ForkJoinSearch<'_, '_, E> {
    fn explore(&self, current: usize, path: Vec<usize>) -> Option<Vec<usize>> {
        if self.ctx.is_cancelled() {
            return None;
        }
        if self.ctx.is_full(&path) {
            return self.ctx.try_close(current, &path);
        }

        let tasks: Vec<_> = self
            .ctx
            .valid_neighbors(current, &path)
            .into_iter()
            .map(|next| {
                let mut branch = path.clone();
                branch.push(next);
                move || self.explore(next, branch)
            })
            .collect();
        if tasks.is_empty() {
            tracing::trace!(current, depth = path.len(), "dead end");
            return None;
        }

        self.executor.first_in_order(tasks)
    }
}
