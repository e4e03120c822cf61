use crate::datastructures::BitSet;
use crate::graph::BaseGraph;
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

/// First-fit coloring in largest-degree-first order (ties by smaller id). Colors are
/// `0..k` without gaps.
pub fn greedy_coloring<G: BaseGraph>(graph: &G) -> FxHashMap<usize, usize> {
    let mut order = graph.sorted_vertices();
    order.sort_by_key(|v| Reverse(graph.degree(*v)));

    let mut colors: FxHashMap<usize, usize> =
        FxHashMap::with_capacity_and_hasher(order.len(), Default::default());
    for v in order {
        let degree = graph.degree(v);
        // at most `degree` colors are blocked, so one of 0..=degree is free
        let mut blocked = BitSet::new(degree + 1);
        for u in graph.neighborhood(v) {
            if let Some(color) = colors.get(&u) {
                blocked.set_bit(*color);
            }
        }
        let color = blocked.get_first_unset().unwrap_or(degree);
        colors.insert(v, color);
    }
    colors
}

pub fn color_count(coloring: &FxHashMap<usize, usize>) -> usize {
    coloring.values().max().map_or(0, |max| max + 1)
}

/// Greedy maximal independent set: scan vertices by increasing degree (ties by smaller id)
/// and take every vertex none of whose neighbors was taken. Returned in ascending order.
pub fn maximal_independent_set<G: BaseGraph>(graph: &G) -> Vec<usize> {
    let mut order = graph.sorted_vertices();
    order.sort_by_key(|v| graph.degree(*v));

    let mut blocked: FxHashSet<usize> = FxHashSet::default();
    let mut independent_set = Vec::new();
    for v in order {
        if blocked.contains(&v) {
            continue;
        }
        independent_set.push(v);
        blocked.insert(v);
        blocked.extend(graph.neighborhood(v));
    }
    independent_set.sort_unstable();
    independent_set
}
