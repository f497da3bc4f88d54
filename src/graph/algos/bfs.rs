//! Breadth-first traversal

use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::Graph;

impl Graph {
    /// Breadth-first traversal from `start`.
    ///
    /// Emits vertices in non-decreasing distance from `start`; within a
    /// level, emission follows discovery order through the adjacency
    /// sequences. A vertex is marked visited the moment it is
    /// discovered, so it is enqueued at most once even through parallel
    /// edges.
    #[tracing::instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>> {
        self.check_vertex(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);

            for &neighbor in self.neighbors(vertex) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        tracing::debug!(visited = order.len(), "bfs traversal complete");
        Ok(order)
    }
}
