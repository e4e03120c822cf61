use crate::graph::{BaseGraph, HashMapGraph};
use fxhash::FxHashSet;

/// Bron–Kerbosch with Tomita pivoting, keeping only the largest clique seen and cutting
/// branches that cannot beat it.
pub struct BronKerbosch<'a> {
    graph: &'a HashMapGraph,
    best: Vec<usize>,
}

impl<'a> BronKerbosch<'a> {
    pub fn with_graph(graph: &'a HashMapGraph) -> Self {
        Self {
            graph,
            best: Vec::new(),
        }
    }

    pub fn compute(mut self) -> Vec<usize> {
        let candidates: FxHashSet<usize> = self.graph.vertices().collect();
        let mut clique = Vec::new();
        self.expand(&mut clique, candidates, FxHashSet::default());
        self.best.sort_unstable();
        self.best
    }

    fn expand(
        &mut self,
        clique: &mut Vec<usize>,
        mut candidates: FxHashSet<usize>,
        mut excluded: FxHashSet<usize>,
    ) {
        if candidates.is_empty() {
            if excluded.is_empty() && clique.len() > self.best.len() {
                self.best = clique.clone();
            }
            return;
        }
        if clique.len() + candidates.len() <= self.best.len() {
            return;
        }

        let graph = self.graph;
        let pivot = match candidates
            .iter()
            .chain(excluded.iter())
            .copied()
            .max_by_key(|u| {
                let nb = graph.neighborhood_set(*u);
                (candidates.iter().filter(|v| nb.contains(v)).count(), *u)
            }) {
            Some(pivot) => pivot,
            None => return,
        };
        let pivot_nb = graph.neighborhood_set(pivot);
        let mut branches: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|v| !pivot_nb.contains(v))
            .collect();
        branches.sort_unstable();

        for v in branches {
            let nb = graph.neighborhood_set(v);
            let next_candidates = candidates.iter().copied().filter(|u| nb.contains(u)).collect();
            let next_excluded = excluded.iter().copied().filter(|u| nb.contains(u)).collect();
            clique.push(v);
            self.expand(clique, next_candidates, next_excluded);
            clique.pop();
            candidates.remove(&v);
            excluded.insert(v);
        }
    }
}
