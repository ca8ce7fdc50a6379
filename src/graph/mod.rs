//! Directed graphs searched by the solvers.
//!
//! - `directed`: the immutable-during-search adjacency-list graph
//! - `generate`: seeded random graphs with a guaranteed Hamiltonian ring

pub mod directed;
pub mod generate;

pub use directed::DirectedGraph;
pub use generate::ring_with_chords;
