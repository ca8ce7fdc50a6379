//! An adjacency-list directed graph.
//!
//! Each vertex keeps an ordered list of distinct out-neighbors. Insertion order
//! is preserved because the search strategies visit branches in that order, so
//! it decides which cycle is found first.
//!
//! Mutation needs `&mut self`; the solvers only ever see `&DirectedGraph`, which
//! is `Sync` and can be shared by every branch without locking.

use crate::error::GraphError;

/// A directed graph over vertices `0..vertex_count`.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_edge` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `neighbors` | \(O(1)\) | Borrowed slice |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of adjacency list |
/// | `out_degree` | \(O(1)\) | returns `Vec::len` |
/// | `edge_count` | \(O(n)\) | Sums out-degrees |
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl DirectedGraph {
    /// Creates a graph with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph from adjacency lists.
    ///
    /// Repeated targets in a list are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if any target is not a vertex.
    pub fn from_adjacency(adjacency_lists: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let mut graph = Self::new(adjacency_lists.len());
        for (from, targets) in adjacency_lists.into_iter().enumerate() {
            for to in targets {
                graph.add_edge(from, to)?;
            }
        }
        Ok(graph)
    }

    /// Adds a directed edge `from -> to` if it is not already present.
    ///
    /// Returns `true` if the edge was inserted, `false` if it already existed.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.insert_edge(from, to))
    }

    /// Inserts an edge between two vertices already known to be in range.
    pub(crate) fn insert_edge(&mut self, from: usize, to: usize) -> bool {
        debug_assert!(to < self.vertex_count(), "to vertex {to} out of bounds");
        let nbrs = &mut self.adjacency[from];
        if nbrs.contains(&to) {
            false
        } else {
            nbrs.push(to);
            true
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if `vertex` is in `0..vertex_count`.
    #[inline]
    pub fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns the out-neighbors of `vertex` in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        assert!(self.contains_vertex(vertex), "vertex {vertex} out of bounds");
        &self.adjacency[vertex]
    }

    /// Returns the out-degree of a vertex.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Checks if an edge exists from `from` to `to`.
    ///
    /// Out-of-range endpoints simply have no edges.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|nbrs| nbrs.contains(&to))
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
