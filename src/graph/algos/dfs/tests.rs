use crate::error::GraphError;
use crate::graph::Graph;

fn chain(n: usize) -> Graph {
    Graph::from_edges(n, (0..n - 1).map(|i| (i, i + 1))).unwrap()
}

fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n))).unwrap()
}

/// Five vertices, edges (0,1),(0,2),(1,3),(2,3),(3,4).
fn diamond_with_tail() -> Graph {
    Graph::from_edges(5, [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]).unwrap()
}

#[test]
fn test_dfs_recursive_chain() {
    let graph = chain(5);
    assert_eq!(graph.dfs_recursive(0).unwrap(), vec![0, 1, 2, 3, 4]);
    // From the middle, the earlier-inserted neighbor is explored first
    assert_eq!(graph.dfs_recursive(2).unwrap(), vec![2, 1, 0, 3, 4]);
}

#[test]
fn test_dfs_recursive_preorder_follows_insertion() {
    let graph = diamond_with_tail();
    // 0 -> 1 (first neighbor) -> 3 -> 2 (via 3's list) -> 4
    assert_eq!(graph.dfs_recursive(0).unwrap(), vec![0, 1, 3, 2, 4]);
}

#[test]
fn test_dfs_iterative_matches_recursive() {
    let fixtures = [
        chain(6),
        cycle(5),
        diamond_with_tail(),
        Graph::from_edges(3, [(0, 1), (0, 1), (1, 2)]).unwrap(),
        Graph::from_edges(2, [(0, 0), (0, 1)]).unwrap(),
        Graph::from_edges(4, [(0, 1), (2, 3)]).unwrap(),
    ];
    for graph in &fixtures {
        for start in 0..graph.vertex_count() {
            assert_eq!(
                graph.dfs_recursive(start).unwrap(),
                graph.dfs_iterative(start).unwrap(),
                "orders diverge from start {}",
                start
            );
        }
    }
}

#[test]
fn test_dfs_cycle_terminates() {
    let graph = cycle(4);
    assert_eq!(graph.dfs_iterative(0).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_dfs_parallel_edges_visited_once() {
    let graph = Graph::from_edges(3, [(0, 1), (0, 1), (1, 2)]).unwrap();
    assert_eq!(graph.dfs_iterative(0).unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_dfs_self_loop_skipped() {
    let graph = Graph::from_edges(2, [(0, 0), (0, 1)]).unwrap();
    assert_eq!(graph.dfs_recursive(0).unwrap(), vec![0, 1]);
}

#[test]
fn test_dfs_disconnected_stays_in_component() {
    let graph = Graph::from_edges(4, [(0, 1), (2, 3)]).unwrap();
    assert_eq!(graph.dfs_iterative(0).unwrap(), vec![0, 1]);
    assert_eq!(graph.dfs_iterative(3).unwrap(), vec![3, 2]);
}

#[test]
fn test_dfs_isolated_start() {
    let graph = Graph::new(3);
    assert_eq!(graph.dfs_recursive(1).unwrap(), vec![1]);
    assert_eq!(graph.dfs_iterative(1).unwrap(), vec![1]);
}

#[test]
fn test_dfs_start_out_of_range() {
    let graph = chain(3);
    assert_eq!(
        graph.dfs_recursive(3),
        Err(GraphError::VertexNotFound {
            vertex: 3,
            vertex_count: 3
        })
    );
    assert_eq!(
        graph.dfs_iterative(9),
        Err(GraphError::VertexNotFound {
            vertex: 9,
            vertex_count: 3
        })
    );
}
