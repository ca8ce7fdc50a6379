//! Seeded random graphs for benchmarks and tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DirectedGraph;

/// Builds a ring `0 -> 1 -> ... -> n-1 -> 0` and then adds up to
/// `chords_per_vertex` random out-edges per vertex.
///
/// The ring goes in first, so every vertex's first neighbor is its successor
/// and the graph always has a Hamiltonian cycle. Self targets are skipped and
/// repeated targets collapse, so a vertex may end up with fewer chords than
/// requested. The same `seed` always yields the same graph.
pub fn ring_with_chords(vertex_count: usize, chords_per_vertex: usize, seed: u64) -> DirectedGraph {
    let mut graph = DirectedGraph::new(vertex_count);
    if vertex_count == 0 {
        return graph;
    }

    for v in 0..vertex_count {
        graph.insert_edge(v, (v + 1) % vertex_count);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for v in 0..vertex_count {
        for _ in 0..chords_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            if target != v {
                graph.insert_edge(v, target);
            }
        }
    }

    graph
}
