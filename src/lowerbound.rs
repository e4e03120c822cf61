use crate::graph::{BaseGraph, HashMapGraph};
use crate::heuristics::{color_count, greedy_coloring, maximal_independent_set};

/// A maximal independent set of the complement, i.e. a maximal clique of `graph`.
pub fn clique_lower_bound(graph: &HashMapGraph) -> Vec<usize> {
    maximal_independent_set(&graph.complement())
}

/// `|V| - colors(complement)`. Color classes of the complement are cliques of `graph` and a
/// cover leaves out at most one vertex of each.
pub fn vertex_cover_lower_bound(graph: &HashMapGraph) -> usize {
    let colors = color_count(&greedy_coloring(&graph.complement()));
    graph.order().saturating_sub(colors)
}
