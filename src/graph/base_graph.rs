use std::cmp::Ordering;
use std::fmt::Debug;

pub trait BaseGraph: Clone + Debug {
    fn degree(&self, u: usize) -> usize;
    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn has_vertex(&self, u: usize) -> bool;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn is_clique(&self, vertices: &[usize]) -> bool;
    fn is_vertex_cover(&self, vertices: &[usize]) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
    fn min_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize>;
    fn max_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize>;

    /// Vertices in ascending id order. Every deterministic scan in the crate starts from here.
    fn sorted_vertices(&self) -> Vec<usize> {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort_unstable();
        vertices
    }

    /// Edges as `(u, v)` with `u < v`, sorted.
    fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.size());
        for u in self.vertices() {
            for v in self.neighborhood(u).filter(|v| u < *v) {
                edges.push((u, v));
            }
        }
        edges.sort_unstable();
        edges
    }

    fn is_complete(&self) -> bool {
        let n = self.order();
        n < 2 || self.size() == n * (n - 1) / 2
    }
}
