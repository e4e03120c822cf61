//! The two optimization problems the branch and bound driver can run on. Each one bundles the
//! reduction, bounds and split that keep `forced + vertices(graph)` extendable to a solution of
//! the input graph.
use crate::error::Violation;
use crate::graph::{BaseGraph, HashMapGraph};
use crate::lowerbound::{clique_lower_bound, vertex_cover_lower_bound};
use crate::partition::{
    clique_partition, highest_degree_vertex, lowest_degree_vertex, vertex_cover_partition, Branch,
};
use crate::reduction::{k_core_reduction, nbvr_reduction};
use crate::upperbound::{clique_upper_bound, vertex_cover_upper_bound};
use fxhash::FxHashSet;

pub trait Objective {
    const NAME: &'static str;

    /// Whether `reduce` prunes harder once the incumbent improves.
    const REDUCTION_READS_INCUMBENT: bool;

    /// Whether a solution (or bound) of size `candidate` strictly beats `incumbent`.
    fn improves(candidate: usize, incumbent: usize) -> bool;

    /// Checks that `vertices` is a feasible solution of `graph`.
    fn verify(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation>;

    /// Checks that `forced + vertices(graph)` can still be extended to a solution of `original`.
    fn check_branch(
        original: &HashMapGraph,
        graph: &HashMapGraph,
        forced: &[usize],
    ) -> Result<(), Violation>;

    fn reduce(graph: &mut HashMapGraph, forced: &mut Vec<usize>, incumbent: usize);

    /// An optimal solution for graphs simple enough to need no search.
    fn solve_directly(graph: &HashMapGraph) -> Option<Vec<usize>>;

    /// Cheap feasible solution.
    fn heuristic_solution(graph: &HashMapGraph) -> Vec<usize>;

    /// Bound on the optimum that no solution of `graph` can beat.
    fn optimistic_bound(graph: &HashMapGraph) -> usize;

    fn pivot(graph: &HashMapGraph) -> Option<usize>;

    /// Complete case split on `pivot`. The second branch is explored first.
    fn split(graph: HashMapGraph, pivot: usize) -> [Branch; 2];
}

fn check_vertices(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation> {
    let mut seen = FxHashSet::default();
    for v in vertices.iter().copied() {
        if !graph.has_vertex(v) {
            return Err(Violation::UnknownVertex(v));
        }
        if !seen.insert(v) {
            return Err(Violation::DuplicateVertex(v));
        }
    }
    Ok(())
}

pub struct MaxClique;

impl Objective for MaxClique {
    const NAME: &'static str = "maximum clique";
    const REDUCTION_READS_INCUMBENT: bool = true;

    fn improves(candidate: usize, incumbent: usize) -> bool {
        candidate > incumbent
    }

    fn verify(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation> {
        check_vertices(graph, vertices)?;
        for (i, u) in vertices.iter().copied().enumerate() {
            for v in vertices.iter().copied().skip(i + 1) {
                if !graph.has_edge(u, v) {
                    return Err(Violation::MissingEdge((u, v)));
                }
            }
        }
        Ok(())
    }

    fn check_branch(
        original: &HashMapGraph,
        graph: &HashMapGraph,
        forced: &[usize],
    ) -> Result<(), Violation> {
        Self::verify(original, forced)?;
        for v in graph.sorted_vertices() {
            if !original.has_vertex(v) {
                return Err(Violation::UnknownVertex(v));
            }
            for f in forced.iter().copied() {
                if f == v {
                    return Err(Violation::DuplicateVertex(v));
                }
                if !original.has_edge(f, v) {
                    return Err(Violation::MissingEdge((f, v)));
                }
            }
        }
        Ok(())
    }

    fn reduce(graph: &mut HashMapGraph, forced: &mut Vec<usize>, incumbent: usize) {
        k_core_reduction(graph, incumbent.saturating_sub(forced.len()));
        // a lone vertex is still a clique of one while nothing better is left
        if graph.size() > 0 {
            graph.remove_isolated_vertices();
        }
    }

    fn solve_directly(graph: &HashMapGraph) -> Option<Vec<usize>> {
        if graph.is_complete() {
            Some(graph.sorted_vertices())
        } else if graph.size() == 0 {
            graph.min_vertex_by(|a, b| a.cmp(b)).map(|v| vec![v])
        } else {
            None
        }
    }

    fn heuristic_solution(graph: &HashMapGraph) -> Vec<usize> {
        clique_lower_bound(graph)
    }

    fn optimistic_bound(graph: &HashMapGraph) -> usize {
        clique_upper_bound(graph)
    }

    fn pivot(graph: &HashMapGraph) -> Option<usize> {
        lowest_degree_vertex(graph)
    }

    fn split(graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
        clique_partition(graph, pivot)
    }
}

pub struct MinVertexCover;

impl Objective for MinVertexCover {
    const NAME: &'static str = "minimum vertex cover";
    const REDUCTION_READS_INCUMBENT: bool = false;

    fn improves(candidate: usize, incumbent: usize) -> bool {
        candidate < incumbent
    }

    fn verify(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation> {
        check_vertices(graph, vertices)?;
        let cover: FxHashSet<usize> = vertices.iter().copied().collect();
        match graph
            .edges()
            .into_iter()
            .find(|(u, v)| !cover.contains(u) && !cover.contains(v))
        {
            Some(edge) => Err(Violation::UncoveredEdge(edge)),
            None => Ok(()),
        }
    }

    fn check_branch(
        original: &HashMapGraph,
        graph: &HashMapGraph,
        forced: &[usize],
    ) -> Result<(), Violation> {
        check_vertices(original, forced)?;
        let forced: FxHashSet<usize> = forced.iter().copied().collect();
        for v in graph.sorted_vertices() {
            if !original.has_vertex(v) {
                return Err(Violation::UnknownVertex(v));
            }
            if forced.contains(&v) {
                return Err(Violation::DuplicateVertex(v));
            }
        }
        // every edge the forced vertices leave open must still be in the branch graph
        match original.edges().into_iter().find(|(u, v)| {
            !forced.contains(u) && !forced.contains(v) && !graph.has_edge(*u, *v)
        }) {
            Some(edge) => Err(Violation::UncoveredEdge(edge)),
            None => Ok(()),
        }
    }

    fn reduce(graph: &mut HashMapGraph, forced: &mut Vec<usize>, _incumbent: usize) {
        forced.extend(nbvr_reduction(graph));
    }

    fn solve_directly(graph: &HashMapGraph) -> Option<Vec<usize>> {
        if graph.size() == 0 {
            Some(Vec::new())
        } else if graph.is_complete() {
            let mut vertices = graph.sorted_vertices();
            vertices.pop();
            Some(vertices)
        } else {
            None
        }
    }

    fn heuristic_solution(graph: &HashMapGraph) -> Vec<usize> {
        vertex_cover_upper_bound(graph)
    }

    fn optimistic_bound(graph: &HashMapGraph) -> usize {
        vertex_cover_lower_bound(graph)
    }

    fn pivot(graph: &HashMapGraph) -> Option<usize> {
        highest_degree_vertex(graph)
    }

    fn split(graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
        vertex_cover_partition(graph, pivot)
    }
}
