//! Thread-budget search: explicit OS threads, explicit budget.
//!
//! Each call splits its remaining budget across the valid neighbors with
//! [`split_budget`]. A neighbor whose share is above one gets its own scoped
//! thread and a private copy of the path; the rest run depth-first on the
//! current thread through one push/pop path buffer. Every spawned thread is
//! joined before the call returns, even after a solution turned up elsewhere.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::concurrency::budget::{split_budget, BranchMode};
use crate::concurrency::scoped::{with_branch_scope, BranchHandle};
use crate::error::SearchError;
use crate::graph::DirectedGraph;

use super::{HamiltonianCycle, SearchContext};

type BranchOutcome = Result<Option<Vec<usize>>, SearchError>;

/// Searches for a Hamiltonian cycle through `start`, spawning at most about
/// `budget` threads.
///
/// `budget == 1` is a plain sequential depth-first search.
///
/// # Errors
/// - [`SearchError::InvalidStartVertex`] if `start` is not a vertex.
/// - [`SearchError::InvalidThreadBudget`] if `budget` is zero.
/// - [`SearchError::BranchPanicked`] if a branch thread panicked.
pub fn solve_thread_budget(
    graph: &DirectedGraph,
    start: usize,
    budget: usize,
) -> Result<Option<HamiltonianCycle>, SearchError> {
    if budget == 0 {
        return Err(SearchError::InvalidThreadBudget { budget });
    }
    let ctx = SearchContext::new(graph, start)?;
    tracing::info!(start, budget, vertices = graph.vertex_count(), "thread-budget search started");

    let mut path = Vec::with_capacity(graph.vertex_count());
    path.push(start);
    let search = ThreadBudgetSearch::new(&ctx);
    let found = search.explore(start, &mut path, budget)?;

    tracing::info!(
        start,
        found = found.is_some(),
        spawned = search.spawned(),
        "thread-budget search finished"
    );
    Ok(found.map(HamiltonianCycle::from_path))
}

struct ThreadBudgetSearch<'a, 'g> {
    ctx: &'a SearchContext<'g>,
    spawned: AtomicUsize,
}

impl<'a, 'g> ThreadBudgetSearch<'a, 'g> {
    fn new(ctx: &'a SearchContext<'g>) -> Self {
        Self {
            ctx,
            spawned: AtomicUsize::new(0),
        }
    }

    /// Branch threads spawned so far across the whole search.
    fn spawned(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }

    fn explore(&self, current: usize, path: &mut Vec<usize>, budget: usize) -> BranchOutcome {
        if self.ctx.is_cancelled() {
            return Ok(None);
        }
        if self.ctx.is_full(path) {
            return Ok(self.ctx.try_close(current, path));
        }

        let valid = self.ctx.valid_neighbors(current, path);
        if valid.is_empty() {
            tracing::trace!(current, depth = path.len(), "dead end");
            return Ok(None);
        }
        let shares = split_budget(budget, valid.len());

        // Shares are non-increasing, so the branches that get a thread form a
        // prefix and all of them are running before this thread starts its DFS.
        let spawn_count = shares
            .iter()
            .take_while(|&&share| BranchMode::for_budget(share) == BranchMode::Spawn)
            .count();
        if spawn_count == 0 {
            return self.explore_inline(&valid, path);
        }

        with_branch_scope(|scope| {
            let spawned: Vec<_> = valid[..spawn_count]
                .iter()
                .zip(&shares)
                .map(|(&next, &share)| {
                    let mut branch = path.clone();
                    branch.push(next);
                    tracing::debug!(from = current, to = next, share, "spawning branch thread");
                    self.spawned.fetch_add(1, Ordering::Relaxed);
                    scope.spawn(next, move || self.explore(next, &mut branch, share))
                })
                .collect();

            let inline = self.explore_inline(&valid[spawn_count..], path);
            merge(join_in_order(spawned), inline)
        })
    }

    /// Depth-first over `neighbors` on this thread, sharing `path` by push/pop.
    fn explore_inline(&self, neighbors: &[usize], path: &mut Vec<usize>) -> BranchOutcome {
        for &next in neighbors {
            path.push(next);
            let outcome = self.explore(next, path, 1);
            path.pop();
            if !matches!(outcome, Ok(None)) {
                return outcome;
            }
        }
        Ok(None)
    }
}

/// Joins every branch, keeping the first error, else the first found path.
fn join_in_order(handles: Vec<BranchHandle<'_, BranchOutcome>>) -> BranchOutcome {
    let mut outcome = Ok(None);
    for handle in handles {
        let joined = handle.join().and_then(|branch| branch);
        outcome = merge(outcome, joined);
    }
    outcome
}

/// Errors win over paths, and an earlier path wins over a later one.
fn merge(earlier: BranchOutcome, later: BranchOutcome) -> BranchOutcome {
    match (earlier, later) {
        (Err(e), _) | (Ok(_), Err(e)) => Err(e),
        (Ok(Some(found)), Ok(_)) | (Ok(None), Ok(Some(found))) => Ok(Some(found)),
        (Ok(None), Ok(None)) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(lists: Vec<Vec<usize>>) -> DirectedGraph {
        DirectedGraph::from_adjacency(lists).expect("graph")
    }

    #[test]
    fn finds_cycle_sequentially() {
        let g = graph(vec![vec![1, 2], vec![2], vec![0]]);
        let cycle = solve_thread_budget(&g, 0, 1).expect("search").expect("cycle");
        assert_eq!(cycle.vertices(), &[0, 1, 2]);
    }

    #[test]
    fn finds_cycle_with_threads() {
        let g = graph(vec![vec![1, 2, 3], vec![2, 3], vec![3, 1], vec![0]]);
        for budget in [2, 3, 4, 8, 64] {
            let cycle = solve_thread_budget(&g, 0, budget)
                .expect("search")
                .expect("cycle");
            assert!(cycle.is_valid_for(&g), "budget {budget}: {cycle:?}");
            assert_eq!(cycle.start(), Some(0));
        }
    }

    #[test]
    fn open_chain_has_no_cycle() {
        let g = graph(vec![vec![1], vec![2], vec![]]);
        for budget in [1, 2, 7] {
            assert_eq!(solve_thread_budget(&g, 0, budget), Ok(None));
        }
    }

    #[test]
    fn single_vertex_self_loop() {
        let g = graph(vec![vec![0]]);
        let cycle = solve_thread_budget(&g, 0, 4).expect("search").expect("cycle");
        assert_eq!(cycle.vertices(), &[0]);

        assert_eq!(solve_thread_budget(&graph(vec![vec![]]), 0, 4), Ok(None));
    }

    #[test]
    fn rejects_zero_budget_and_bad_start() {
        let g = graph(vec![vec![0]]);
        assert_eq!(
            solve_thread_budget(&g, 0, 0),
            Err(SearchError::InvalidThreadBudget { budget: 0 })
        );
        assert_eq!(
            solve_thread_budget(&g, 1, 2),
            Err(SearchError::InvalidStartVertex {
                vertex: 1,
                vertex_count: 1
            })
        );
    }

    fn complete(n: usize) -> DirectedGraph {
        graph(
            (0..n)
                .map(|v| (0..n).filter(|&w| w != v).collect())
                .collect(),
        )
    }

    #[test]
    fn set_flag_stops_new_work() {
        let g = complete(5);
        let ctx = SearchContext::new(&g, 0).expect("ctx");
        assert!(ctx.flag.try_set());

        let search = ThreadBudgetSearch::new(&ctx);
        for budget in [1, 4] {
            let mut path = vec![0];
            assert_eq!(search.explore(0, &mut path, budget), Ok(None));
            assert_eq!(path, vec![0]);
        }
        assert_eq!(search.spawned(), 0);
    }

    #[test]
    fn budget_above_one_spawns_threads() {
        let g = complete(7);
        let ctx = SearchContext::new(&g, 0).expect("ctx");
        let search = ThreadBudgetSearch::new(&ctx);
        let found = search.explore(0, &mut vec![0], 8).expect("search");
        assert!(found.is_some());
        // Six neighbors share a budget of eight: [2, 2, 1, 1, 1, 1].
        assert!(search.spawned() >= 2, "spawned {}", search.spawned());
    }

    #[test]
    fn budget_of_one_never_spawns() {
        let g = complete(7);
        let ctx = SearchContext::new(&g, 0).expect("ctx");
        let search = ThreadBudgetSearch::new(&ctx);
        let found = search.explore(0, &mut vec![0], 1).expect("search");
        assert!(found.is_some());
        assert_eq!(search.spawned(), 0);
    }

    #[test]
    fn join_prefers_error_then_first_hit() {
        let outcome = with_branch_scope(|scope| {
            let handles = vec![
                scope.spawn(1, || -> BranchOutcome { Ok(None) }),
                scope.spawn(2, || -> BranchOutcome { Ok(Some(vec![0, 2])) }),
                scope.spawn(3, || -> BranchOutcome { Ok(Some(vec![0, 3])) }),
            ];
            join_in_order(handles)
        });
        assert_eq!(outcome, Ok(Some(vec![0, 2])));

        let outcome = with_branch_scope(|scope| {
            let handles = vec![
                scope.spawn(1, || -> BranchOutcome { Ok(Some(vec![0, 1])) }),
                scope.spawn(2, || -> BranchOutcome {
                    Err(SearchError::InvalidThreadBudget { budget: 0 })
                }),
            ];
            join_in_order(handles)
        });
        assert_eq!(outcome, Err(SearchError::InvalidThreadBudget { budget: 0 }));
    }
}
