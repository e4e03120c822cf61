use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};

/// One side of a pivot split: the remaining graph and the vertices the split commits to.
#[derive(Clone, Debug)]
pub struct Branch {
    pub graph: HashMapGraph,
    pub forced: Vec<usize>,
}

/// Minimum degree vertex, ties broken towards the smaller id.
pub fn lowest_degree_vertex(graph: &HashMapGraph) -> Option<usize> {
    graph.min_vertex_by(|a, b| graph.degree(*a).cmp(&graph.degree(*b)).then(a.cmp(b)))
}

/// Maximum degree vertex, ties broken towards the smaller id.
pub fn highest_degree_vertex(graph: &HashMapGraph) -> Option<usize> {
    graph.max_vertex_by(|a, b| graph.degree(*a).cmp(&graph.degree(*b)).then(b.cmp(a)))
}

/// Either the clique contains `pivot`, and then lives in its neighborhood, or it does not.
/// Returns `[confine, exclude]`.
pub fn clique_partition(mut graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
    let confine = graph.vertex_induced(graph.neighborhood_set(pivot));
    graph.remove_vertex(pivot);
    [
        Branch {
            graph: confine,
            forced: vec![pivot],
        },
        Branch {
            graph,
            forced: Vec::new(),
        },
    ]
}

/// Either `pivot` is outside the cover, and then its whole halo is inside, or it is in the
/// cover. Returns `[halo, pivot]`.
pub fn vertex_cover_partition(mut graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
    let mut halo: Vec<usize> = graph.neighborhood(pivot).collect();
    halo.sort_unstable();
    let mut without_pivot = graph.clone();
    without_pivot.remove_vertex(pivot);
    graph.remove_vertex(pivot);
    for u in halo.iter() {
        graph.remove_vertex(*u);
    }
    [
        Branch {
            graph,
            forced: halo,
        },
        Branch {
            graph: without_pivot,
            forced: vec![pivot],
        },
    ]
}
