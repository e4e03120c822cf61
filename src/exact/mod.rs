use crate::graph::{BaseGraph, HashMapGraph};
use fxhash::FxHashSet;

mod bron_kerbosch;

pub use bron_kerbosch::BronKerbosch;

/// Maximum clique in ascending order. Exponential, meant for leaf-sized graphs.
pub fn max_clique_exact(graph: &HashMapGraph) -> Vec<usize> {
    BronKerbosch::with_graph(graph).compute()
}

/// Minimum vertex cover as the complement of a maximum independent set, which is a maximum
/// clique of the complement graph.
pub fn min_vertex_cover_exact(graph: &HashMapGraph) -> Vec<usize> {
    let independent: FxHashSet<usize> = max_clique_exact(&graph.complement())
        .into_iter()
        .collect();
    graph
        .sorted_vertices()
        .into_iter()
        .filter(|v| !independent.contains(v))
        .collect()
}
