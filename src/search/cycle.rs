//! The value a successful search hands back.

use serde::Serialize;

use crate::graph::DirectedGraph;

/// A Hamiltonian cycle, stored as the `N` vertices in visiting order.
///
/// The closing edge back to the first vertex is implied and not repeated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HamiltonianCycle {
    vertices: Vec<usize>,
}

impl HamiltonianCycle {
    pub(crate) fn from_path(vertices: Vec<usize>) -> Self {
        Self { vertices }
    }

    /// The vertices in visiting order, starting at the start vertex.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// The vertex the cycle starts (and implicitly ends) at.
    pub fn start(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    /// Number of vertices on the cycle.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a cycle produced by a search.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks the cycle against `graph`; see [`is_hamiltonian_cycle`].
    pub fn is_valid_for(&self, graph: &DirectedGraph) -> bool {
        is_hamiltonian_cycle(graph, &self.vertices)
    }

    /// Consumes the cycle, returning the vertex sequence.
    pub fn into_vec(self) -> Vec<usize> {
        self.vertices
    }
}

impl AsRef<[usize]> for HamiltonianCycle {
    fn as_ref(&self) -> &[usize] {
        &self.vertices
    }
}

/// Returns `true` if `path` visits every vertex of `graph` exactly once,
/// follows graph edges, and its last vertex has an edge back to the first.
pub fn is_hamiltonian_cycle(graph: &DirectedGraph, path: &[usize]) -> bool {
    let n = graph.vertex_count();
    if n == 0 || path.len() != n {
        return false;
    }

    let mut seen = vec![false; n];
    for &v in path {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }

    path.windows(2).all(|w| graph.has_edge(w[0], w[1])) && graph.has_edge(path[n - 1], path[0])
}
