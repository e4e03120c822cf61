use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use fxhash::FxHashSet;
use std::collections::VecDeque;

#[cfg(feature = "log")]
use log::debug;

/// Vertex and edge k-core reduction. Every clique of `graph` with at least `k` vertices
/// survives: its vertices keep degree `>= k - 1` and its edges keep `>= k - 2` common
/// neighbors. Runs until a full pass removes no edge or the graph is empty.
pub fn k_core_reduction(graph: &mut HashMapGraph, k: usize) {
    let min_degree = k.saturating_sub(1);
    let min_common_neighbors = k.saturating_sub(2);
    #[cfg(feature = "log")]
    let (order, size) = (graph.order(), graph.size());
    loop {
        remove_low_degree(graph, min_degree);
        if graph.order() == 0 {
            break;
        }
        let before = graph.size();
        remove_weak_edges(graph, min_common_neighbors);
        if graph.size() == before {
            break;
        }
    }
    #[cfg(feature = "log")]
    debug!(
        "k-core ({}) reduced {} vertices / {} edges to {} / {}",
        k,
        order,
        size,
        graph.order(),
        graph.size()
    );
}

fn remove_low_degree(graph: &mut HashMapGraph, min_degree: usize) {
    if min_degree == 0 {
        return;
    }
    let mut queue: VecDeque<usize> = graph
        .sorted_vertices()
        .into_iter()
        .filter(|v| graph.degree(*v) < min_degree)
        .collect();
    let mut queued: FxHashSet<usize> = queue.iter().copied().collect();
    while let Some(v) = queue.pop_front() {
        let nb: Vec<usize> = graph.neighborhood(v).collect();
        graph.remove_vertex(v);
        for u in nb {
            if graph.degree(u) < min_degree && queued.insert(u) {
                queue.push_back(u);
            }
        }
    }
}

fn remove_weak_edges(graph: &mut HashMapGraph, min_common_neighbors: usize) {
    if min_common_neighbors == 0 {
        return;
    }
    for (u, v) in graph.edges() {
        if graph.common_neighbor_count(u, v) < min_common_neighbors {
            graph.remove_edge(u, v);
        }
    }
}
