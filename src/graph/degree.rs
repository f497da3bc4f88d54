//! Degree analytics

use crate::graph::Graph;

/// One vertex in a degree ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeEntry {
    pub vertex: usize,
    pub degree: usize,
}

impl Graph {
    /// Vertices ranked by degree, highest first.
    ///
    /// Ties break toward the lower vertex index. `top_n == 0` returns
    /// the full ranking. Degrees count adjacency entries, so parallel
    /// edges and both sides of a self-loop are included.
    pub fn degree_ranking(&self, top_n: usize) -> Vec<DegreeEntry> {
        let mut entries: Vec<DegreeEntry> = (0..self.vertex_count())
            .map(|vertex| DegreeEntry {
                vertex,
                degree: self.neighbors(vertex).len(),
            })
            .collect();

        entries.sort_by(|a, b| b.degree.cmp(&a.degree).then(a.vertex.cmp(&b.vertex)));

        if top_n > 0 && top_n < entries.len() {
            entries.truncate(top_n);
        }

        entries
    }
}
