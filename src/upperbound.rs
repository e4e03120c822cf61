use crate::graph::{BaseGraph, HashMapGraph};
use crate::heuristics::{color_count, greedy_coloring, maximal_independent_set};
use fxhash::FxHashSet;

/// Colors of a greedy proper coloring. A clique needs pairwise distinct colors, so this is at
/// least the clique number.
pub fn clique_upper_bound(graph: &HashMapGraph) -> usize {
    color_count(&greedy_coloring(graph))
}

/// Everything outside a maximal independent set. Always a vertex cover, in ascending order.
pub fn vertex_cover_upper_bound(graph: &HashMapGraph) -> Vec<usize> {
    let independent: FxHashSet<usize> = maximal_independent_set(graph).into_iter().collect();
    graph
        .sorted_vertices()
        .into_iter()
        .filter(|v| !independent.contains(v))
        .collect()
}
