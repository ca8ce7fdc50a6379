//! # `hamcycle` - Parallel Hamiltonian Cycle Search
//!
//! Backtracking search for a Hamiltonian cycle in a directed graph, under two
//! concurrency disciplines that must agree on whether a cycle exists.
//!
//! ## Strategies
//!
//! 1. **Thread budget** ([`solve_thread_budget`]):
//!    - A fixed number of permitted threads is split across branches at every
//!      step (`budget / n`, the remainder going to the first branches)
//!    - Branches with a share above one get a scoped OS thread and a private path
//!    - The rest run depth-first on the current thread with one push/pop buffer
//!
//! 2. **Fork-join** ([`solve_fork_join`], [`solve_fork_join_with`]):
//!    - Every viable branch becomes a task
//!    - Tasks are forked together and joined in submission order
//!    - A work-stealing pool (rayon by default) bounds the live parallelism
//!
//! ## Cancellation
//!
//! Branches share one [`SolutionFlag`]. The first branch to close a cycle wins
//! it with a compare-and-set; everyone else stops *starting* new work. Nothing
//! is interrupted, so branches already running finish before the solver
//! returns. On adversarial graphs that tail can be long, and there is no
//! deadline: callers wanting bounded latency must impose their own.
//!
//! ## Outcomes
//!
//! Both solvers return `Result<Option<HamiltonianCycle>, SearchError>`:
//! `Ok(None)` means no cycle through the start vertex exists, `Err` means the
//! input was invalid or a branch died.
//!
//! ## Example
//!
//! ```rust
//! use hamcycle::{solve_fork_join, solve_thread_budget, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new(3);
//! graph.add_edge(0, 1)?;
//! graph.add_edge(1, 2)?;
//! graph.add_edge(2, 0)?;
//!
//! let cycle = solve_thread_budget(&graph, 0, 4)?.expect("ring is Hamiltonian");
//! assert_eq!(cycle.vertices(), &[0, 1, 2]);
//!
//! let cycle = solve_fork_join(&graph, 0)?.expect("ring is Hamiltonian");
//! assert!(cycle.is_valid_for(&graph));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod concurrency;
pub mod error;
pub mod graph;
pub mod search;

pub use concurrency::{ForkJoinExecutor, RayonExecutor, SequentialExecutor, SolutionFlag};
pub use error::{GraphError, SearchError};
pub use graph::{ring_with_chords, DirectedGraph};
pub use search::{
    is_hamiltonian_cycle, solve_fork_join, solve_fork_join_with, solve_thread_budget,
    HamiltonianCycle,
};
