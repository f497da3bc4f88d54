//! Path reconstruction between two vertices
//!
//! Both searches record a discovery predecessor per vertex and walk
//! those links backward from `end` once the search reaches it. The BFS
//! variant additionally records distances and is minimal in edge count;
//! the DFS variant returns whichever branch the depth-first exploration
//! reached `end` through.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

impl Graph {
    /// Path from `start` to `end` following depth-first discovery.
    ///
    /// Runs the iterative DFS of [`Graph::dfs_iterative`], recording
    /// the predecessor of each newly-pushed vertex and stopping as soon
    /// as `end` is popped. The result is a valid simple path but
    /// carries no length guarantee; [`Graph::bfs_path`] minimizes edge
    /// count. `dfs_path(v, v)` is `[v]` for any in-range `v`.
    ///
    /// Fails with [`GraphError::PathNotFound`] when the stack drains
    /// without visiting `end`.
    #[tracing::instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn dfs_path(&self, start: usize, end: usize) -> Result<Vec<usize>> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut path_to: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut stack = vec![start];

        while let Some(vertex) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;

            if vertex == end {
                break;
            }

            for &neighbor in self.neighbors(vertex).iter().rev() {
                if !visited[neighbor] {
                    stack.push(neighbor);
                    // Last push wins; the slot freezes once the
                    // neighbor is popped and marked visited.
                    path_to[neighbor] = Some(vertex);
                }
            }
        }

        if !visited[end] {
            return Err(GraphError::PathNotFound {
                from: start,
                to: end,
            });
        }

        let path = walk_predecessors(start, end, &path_to);
        tracing::debug!(path_len = path.len(), "dfs path reconstructed");
        Ok(path)
    }

    /// Shortest path (fewest edges) from `start` to `end` via BFS.
    ///
    /// Records predecessor and distance for each vertex at discovery
    /// (the start vertex has distance 0) and stops once `end` is
    /// dequeued. Since BFS discovers vertices in non-decreasing
    /// distance order, no `start`→`end` path has fewer edges than the
    /// one returned. `bfs_path(v, v)` is `[v]`: the start vertex is
    /// dequeued with distance 0 before any expansion happens.
    ///
    /// Fails with [`GraphError::PathNotFound`] when the queue drains
    /// without visiting `end`.
    #[tracing::instrument(skip(self), fields(vertex_count = self.vertex_count()))]
    pub fn bfs_path(&self, start: usize, end: usize) -> Result<Vec<usize>> {
        self.check_vertex(start)?;
        self.check_vertex(end)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut path_to: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut distance_to = vec![0usize; self.vertex_count()];
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            if vertex == end {
                break;
            }

            for &neighbor in self.neighbors(vertex) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    path_to[neighbor] = Some(vertex);
                    distance_to[neighbor] = distance_to[vertex] + 1;
                    queue.push_back(neighbor);
                }
            }
        }

        if !visited[end] {
            return Err(GraphError::PathNotFound {
                from: start,
                to: end,
            });
        }

        // Walk back until the recorded distance hits 0; that vertex is
        // the start, which also covers start == end with no expansion.
        let mut path = Vec::new();
        let mut current = end;
        while distance_to[current] != 0 {
            path.push(current);
            match path_to[current] {
                Some(predecessor) => current = predecessor,
                None => break,
            }
        }
        path.push(current);
        path.reverse();

        tracing::debug!(path_len = path.len(), "bfs path reconstructed");
        Ok(path)
    }
}

/// Walk predecessor links from `end` back to `start`, then reverse.
fn walk_predecessors(start: usize, end: usize, path_to: &[Option<usize>]) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match path_to[current] {
            Some(predecessor) => {
                path.push(predecessor);
                current = predecessor;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
