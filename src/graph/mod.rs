//! Undirected graph storage and introspection
//!
//! The graph is a fixed set of vertices identified by the dense indices
//! `0..vertex_count`, plus an append-only adjacency list. Traversal
//! algorithms live in [`algos`]; degree analytics in [`degree`].

pub mod algos;
pub mod degree;

pub use degree::DegreeEntry;

use std::fmt;

use crate::error::{GraphError, Result};

/// Undirected graph over dense vertex indices.
///
/// Adjacency sequences preserve edge-insertion order, and that order is
/// visible in traversal output. Parallel edges and self-loops are
/// stored as-is: inserting the same edge twice yields two adjacency
/// entries, and a self-loop appends the vertex to its own sequence
/// twice.
///
/// All state is plain owned data with no interior mutability. Concurrent
/// mutation requires external synchronization by the caller; traversal
/// calls only read the adjacency and own their scratch state.
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// A zero-vertex graph is valid; every per-vertex operation on it
    /// fails with [`GraphError::VertexNotFound`].
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edge_count: 0,
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Create a graph and insert edges from an iterator of endpoint
    /// pairs, in order.
    ///
    /// Equivalent to [`Graph::new`] followed by [`Graph::add_edge`] per
    /// pair; the first invalid endpoint aborts with its error.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v1, v2) in edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Neighbors of a vertex already known to be in range.
    pub(crate) fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Insert an undirected edge between `v1` and `v2`.
    ///
    /// Appends `v2` to `v1`'s adjacency sequence and `v1` to `v2`'s,
    /// then increments the edge count by one. Both endpoints are
    /// validated before anything is written. Self-loops and duplicate
    /// edges are not rejected: repeating a call inserts a parallel
    /// edge and counts again.
    pub fn add_edge(&mut self, v1: usize, v2: usize) -> Result<()> {
        self.check_vertex(v1)?;
        self.check_vertex(v2)?;

        self.adjacency[v1].push(v2);
        self.adjacency[v2].push(v1);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edge insertions performed so far.
    ///
    /// Each [`Graph::add_edge`] call counts once, even though it writes
    /// two adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbors of `vertex` in insertion order.
    ///
    /// Returns an immutable view; internal state cannot be corrupted
    /// through it.
    pub fn adjacent_vertices(&self, vertex: usize) -> Result<&[usize]> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Degree of `vertex`: the length of its adjacency sequence.
    ///
    /// Parallel edges count separately and a self-loop contributes 2,
    /// since the vertex appears in its own sequence twice.
    pub fn vertex_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Deterministic textual dump: a counts header plus one adjacency
    /// line per vertex in index order.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "vertex count: {}, edge count: {}",
            self.vertex_count, self.edge_count
        )?;
        for (vertex, neighbors) in self.adjacency.iter().enumerate() {
            writeln!(f, "vertex {}: {:?}", vertex, neighbors)?;
        }
        Ok(())
    }
}
