use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;
use std::cmp::Ordering;

/// Adjacency-set graph. Vertices are arbitrary `usize` ids, so subgraphs keep the ids of the
/// graph they were cut from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges.iter().copied() {
            graph.add_edge(u, v);
        }
        graph
    }

    pub fn neighborhood_set(&self, u: usize) -> &FxHashSet<usize> {
        assert!(self.data.contains_key(&u));
        self.data.get(&u).unwrap()
    }

    pub fn vertex_induced(&self, vertices: &FxHashSet<usize>) -> Self {
        let data: FxHashMap<usize, FxHashSet<usize>> = self
            .data
            .iter()
            .filter(|(vertex, _)| vertices.contains(vertex))
            .map(|(vertex, neighborhood)| {
                (
                    *vertex,
                    neighborhood
                        .iter()
                        .copied()
                        .filter(|x| vertices.contains(x))
                        .collect(),
                )
            })
            .collect();
        Self { data }
    }

    /// Same vertex set, an edge exactly where `self` has none.
    pub fn complement(&self) -> Self {
        let mut complement = Self::with_capacity(self.data.len());
        let vertices = self.sorted_vertices();
        for (i, u) in vertices.iter().copied().enumerate() {
            complement.add_vertex(u);
            let nb = self.data.get(&u).unwrap();
            for v in vertices.iter().copied().skip(i + 1) {
                if !nb.contains(&v) {
                    complement.add_edge(u, v);
                }
            }
        }
        complement
    }

    pub fn common_neighbor_count(&self, u: usize, v: usize) -> usize {
        let (a, b) = (self.neighborhood_set(u), self.neighborhood_set(v));
        let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
        small.iter().filter(|x| large.contains(x)).count()
    }

    /// Removes every degree zero vertex, returning them in ascending order.
    pub fn remove_isolated_vertices(&mut self) -> Vec<usize> {
        let mut isolated: Vec<_> = self
            .data
            .iter()
            .filter(|(_, nb)| nb.is_empty())
            .map(|(v, _)| *v)
            .collect();
        isolated.sort_unstable();
        for v in isolated.iter() {
            self.data.remove(v);
        }
        isolated
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn remove_vertex(&mut self, u: usize) {
        if let Some(nb) = self.data.remove(&u) {
            for i in nb.iter() {
                self.data.get_mut(i).unwrap().remove(&u);
            }
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        assert!(self.data.contains_key(&u));
        self.data.get(&u).unwrap().len()
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn size(&self) -> usize {
        self.data.values().map(|nb| nb.len()).sum::<usize>() / 2
    }

    fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).map_or(false, |nb| nb.contains(&v))
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            if !self.data.contains_key(v) {
                return false;
            }
            for u in vertices.iter().skip(i + 1) {
                if !self.has_edge(*v, *u) {
                    return false;
                }
            }
        }
        true
    }

    fn is_vertex_cover(&self, vertices: &[usize]) -> bool {
        let cover: FxHashSet<usize> = vertices.iter().copied().collect();
        self.data
            .iter()
            .filter(|(u, _)| !cover.contains(u))
            .all(|(_, nb)| nb.iter().all(|v| cover.contains(v)))
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let keys = self.data.keys().copied();
        Box::new(keys)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.get(&u).unwrap().iter().copied())
    }

    fn min_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.data.keys().copied().min_by(cmp)
    }

    fn max_vertex_by<F: FnMut(&usize, &usize) -> Ordering>(&self, cmp: F) -> Option<usize> {
        self.data.keys().copied().max_by(cmp)
    }
}
