use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};

#[cfg(feature = "log")]
use log::debug;

/// Neighbor based vertex reduction for vertex cover. Every rule removes a local piece of the
/// graph and forces vertices that belong to some minimum cover of it, so that
/// `forced + min_cover(reduced)` is a minimum cover of the input.
pub struct NbvrReducer<'a> {
    graph: &'a mut HashMapGraph,
    forced: Vec<usize>,
}

impl<'a> NbvrReducer<'a> {
    pub fn new(graph: &'a mut HashMapGraph) -> Self {
        Self {
            graph,
            forced: Vec::new(),
        }
    }

    /// Applies the rules until a full scan fires none. Returns the forced vertices in the
    /// order they were forced.
    pub fn preprocess(mut self) -> Vec<usize> {
        #[cfg(feature = "log")]
        let order = self.graph.order();
        while self.apply_rules() {}
        #[cfg(feature = "log")]
        debug!(
            "nbvr reduced {} vertices to {}, forcing {}",
            order,
            self.graph.order(),
            self.forced.len()
        );
        self.forced
    }

    fn apply_rules(&mut self) -> bool {
        // islet
        let isolated = self.graph.remove_isolated_vertices();
        if !isolated.is_empty() {
            return true;
        }

        let vertices = self.graph.sorted_vertices();

        // single-degree
        let graph = &*self.graph;
        let found = vertices
            .iter()
            .copied()
            .filter(|v| graph.degree(*v) == 1)
            .find_map(|v| graph.neighborhood(v).next().map(|u| (v, u)));
        if let Some((v, u)) = found {
            self.forced.push(u);
            self.graph.remove_vertex(v);
            self.graph.remove_vertex(u);
            return true;
        }

        // triangle with a degree two corner
        for v in vertices.iter().copied() {
            if self.graph.degree(v) != 2 {
                continue;
            }
            let mut nb: Vec<usize> = self.graph.neighborhood(v).collect();
            nb.sort_unstable();
            let (a, b) = (nb[0], nb[1]);
            if !self.graph.has_edge(a, b) {
                continue;
            }
            let a_two = self.graph.degree(a) == 2;
            let b_two = self.graph.degree(b) == 2;
            match (a_two, b_two) {
                // isolated triangle, any two corners
                (true, true) => self.forced.extend_from_slice(&[v, a]),
                // v and a only see each other and b
                (true, false) => self.forced.extend_from_slice(&[v, b]),
                (false, true) => self.forced.extend_from_slice(&[v, a]),
                (false, false) => self.forced.extend_from_slice(&[a, b]),
            }
            self.graph.remove_vertex(v);
            self.graph.remove_vertex(a);
            self.graph.remove_vertex(b);
            return true;
        }
        false
    }
}

/// Runs [`NbvrReducer`] on `graph` in place and returns the forced vertices.
pub fn nbvr_reduction(graph: &mut HashMapGraph) -> Vec<usize> {
    NbvrReducer::new(graph).preprocess()
}
