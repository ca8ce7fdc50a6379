//! Parallel backtracking search for a Hamiltonian cycle.
//!
//! Two strategies explore the same tree and agree on whether a cycle exists:
//! - [`solve_thread_budget`]: a fixed budget of OS threads is split across
//!   branches; once a branch's share drops to one it runs depth-first on the
//!   current thread.
//! - [`solve_fork_join`]: every viable branch becomes a task and a
//!   work-stealing pool decides what runs where.
//!
//! Both share one [`SolutionFlag`](crate::concurrency::SolutionFlag). The flag
//! is cooperative: it stops branches from starting new work, but branches
//! already running finish on their own, so the top-level call can return some
//! time after the winning branch claimed the flag.

pub mod cycle;
pub mod fork_join;
pub mod thread_budget;

pub use cycle::{is_hamiltonian_cycle, HamiltonianCycle};
pub use fork_join::{solve_fork_join, solve_fork_join_with};
pub use thread_budget::solve_thread_budget;

use crate::concurrency::SolutionFlag;
use crate::error::SearchError;
use crate::graph::DirectedGraph;

/// Per-invocation state shared by every branch of one search.
pub(crate) struct SearchContext<'g> {
    graph: &'g DirectedGraph,
    start: usize,
    flag: SolutionFlag,
}

impl<'g> SearchContext<'g> {
    pub(crate) fn new(graph: &'g DirectedGraph, start: usize) -> Result<Self, SearchError> {
        if !graph.contains_vertex(start) {
            return Err(SearchError::InvalidStartVertex {
                vertex: start,
                vertex_count: graph.vertex_count(),
            });
        }
        Ok(Self {
            graph,
            start,
            flag: SolutionFlag::new(),
        })
    }

    #[inline]
    pub(crate) fn is_cancelled(&self) -> bool {
        self.flag.is_set()
    }

    #[inline]
    pub(crate) fn is_full(&self, path: &[usize]) -> bool {
        path.len() == self.graph.vertex_count()
    }

    /// Tries to close a full path into a cycle.
    ///
    /// Only the branch that wins the flag reports its path; a branch that
    /// closes a valid cycle a moment later gets `None`.
    pub(crate) fn try_close(&self, current: usize, path: &[usize]) -> Option<Vec<usize>> {
        if !self.graph.has_edge(current, self.start) {
            return None;
        }
        if self.flag.try_set() {
            tracing::debug!(last = current, "branch closed the cycle");
            Some(path.to_vec())
        } else {
            tracing::trace!(last = current, "cycle closed after another branch won");
            None
        }
    }

    /// Out-neighbors of `current` not yet on `path`, in graph order.
    pub(crate) fn valid_neighbors(&self, current: usize, path: &[usize]) -> Vec<usize> {
        self.graph
            .neighbors(current)
            .iter()
            .copied()
            .filter(|next| !path.contains(next))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_rejects_bad_start() {
        let graph = DirectedGraph::new(3);
        let err = SearchContext::new(&graph, 3).err();
        assert_eq!(
            err,
            Some(SearchError::InvalidStartVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn valid_neighbors_skip_visited_and_keep_order() {
        let graph = DirectedGraph::from_adjacency(vec![vec![3, 1, 2], vec![], vec![], vec![]])
            .expect("graph");
        let ctx = SearchContext::new(&graph, 0).expect("ctx");
        assert_eq!(ctx.valid_neighbors(0, &[0, 1]), vec![3, 2]);
    }

    #[test]
    fn only_first_closer_reports() {
        let graph = DirectedGraph::from_adjacency(vec![vec![1], vec![0]]).expect("graph");
        let ctx = SearchContext::new(&graph, 0).expect("ctx");
        assert!(ctx.is_full(&[0, 1]));
        assert_eq!(ctx.try_close(1, &[0, 1]), Some(vec![0, 1]));
        assert!(ctx.is_cancelled());
        assert_eq!(ctx.try_close(1, &[0, 1]), None);
    }
}
