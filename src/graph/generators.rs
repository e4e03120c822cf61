use crate::graph::hash_map_graph::HashMapGraph;
use crate::graph::mutable_graph::MutableGraph;
use rand::Rng;

/// Erdős–Rényi G(n, p): vertices `0..n`, every pair joined independently with probability `p`.
pub fn gnp_random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> HashMapGraph {
    let p = p.max(0.0).min(1.0);
    let mut graph = HashMapGraph::with_capacity(n);
    for u in 0..n {
        graph.add_vertex(u);
        for v in 0..u {
            if rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }
    graph
}

pub fn complete_graph(n: usize) -> HashMapGraph {
    let mut graph = HashMapGraph::with_capacity(n);
    for u in 0..n {
        graph.add_vertex(u);
    }
    graph.make_clique(&(0..n).collect::<Vec<_>>());
    graph
}

pub fn cycle_graph(n: usize) -> HashMapGraph {
    let mut graph = path_graph(n);
    if n > 2 {
        graph.add_edge(n - 1, 0);
    }
    graph
}

pub fn path_graph(n: usize) -> HashMapGraph {
    let mut graph = HashMapGraph::with_capacity(n);
    for u in 0..n {
        graph.add_vertex(u);
        if u > 0 {
            graph.add_edge(u - 1, u);
        }
    }
    graph
}

/// Center `0` joined to the leaves `1..=leaves`.
pub fn star_graph(leaves: usize) -> HashMapGraph {
    let mut graph = HashMapGraph::with_capacity(leaves + 1);
    graph.add_vertex(0);
    for leaf in 1..=leaves {
        graph.add_edge(0, leaf);
    }
    graph
}
