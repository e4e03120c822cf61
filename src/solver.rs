use crate::error::{DecompositionError, Invariant};
use crate::graph::{BaseGraph, HashMapGraph};
use crate::objective::{MaxClique, MinVertexCover, Objective};
use crate::partition::Branch;
use crate::worklist::{Subproblem, WorkStack};
#[cfg(feature = "log")]
use log::{debug, info};
use std::cmp::max;
use std::marker::PhantomData;

/// Solves subproblems that fit the size limit. Must return a clique (resp. vertex cover) of
/// the graph it is handed; exactness of the final answer follows exactness of the leaf solver.
pub trait LeafSolver {
    fn solve(&mut self, graph: &HashMapGraph) -> Vec<usize>;
}

impl<F> LeafSolver for F
where
    F: FnMut(&HashMapGraph) -> Vec<usize>,
{
    fn solve(&mut self, graph: &HashMapGraph) -> Vec<usize> {
        self(graph)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    pub subproblems: usize,
    pub splits: usize,
    pub pruned: usize,
    pub solved_directly: usize,
    pub leaf_calls: usize,
    pub largest_leaf: usize,
    pub incumbent_updates: usize,
}

#[derive(Clone, Debug)]
pub struct SearchResult {
    pub solution: Vec<usize>,
    pub statistics: SearchStatistics,
}

/// Per-call search state; the incumbent only ever changes through [`SearchContext::offer`].
struct SearchContext<'a> {
    original: &'a HashMapGraph,
    incumbent: Vec<usize>,
    statistics: SearchStatistics,
}

impl<'a> SearchContext<'a> {
    fn new<O: Objective>(original: &'a HashMapGraph, initial: Vec<usize>) -> Result<Self, Invariant> {
        O::verify(original, &initial).map_err(Invariant::InfeasibleCandidate)?;
        #[cfg(feature = "log")]
        info!("initial {} of size {}", O::NAME, initial.len());
        Ok(Self {
            original,
            incumbent: initial,
            statistics: SearchStatistics::default(),
        })
    }

    /// Adopts `candidate` if it strictly improves the incumbent. Every candidate is checked
    /// against the input graph, adopted or not.
    fn offer<O: Objective>(&mut self, candidate: Vec<usize>) -> Result<bool, Invariant> {
        O::verify(self.original, &candidate).map_err(Invariant::InfeasibleCandidate)?;
        if !O::improves(candidate.len(), self.incumbent.len()) {
            return Ok(false);
        }
        #[cfg(feature = "log")]
        info!(
            "improved {} from {} to {}",
            O::NAME,
            self.incumbent.len(),
            candidate.len()
        );
        self.incumbent = candidate;
        self.statistics.incumbent_updates += 1;
        Ok(true)
    }
}

/// Decomposition based branch and bound. Subproblems with at most `size_limit` vertices go to
/// the leaf solver, larger ones are reduced, bounded and split.
pub struct BranchAndBound<O: Objective> {
    size_limit: usize,
    _objective: PhantomData<O>,
}

impl<O: Objective> BranchAndBound<O> {
    pub fn with_size_limit(size_limit: usize) -> Self {
        Self {
            size_limit,
            _objective: PhantomData,
        }
    }

    pub fn size_limit(&self) -> usize {
        self.size_limit
    }

    pub fn compute<S: LeafSolver>(
        &self,
        graph: &HashMapGraph,
        mut leaf_solver: S,
    ) -> Result<SearchResult, DecompositionError> {
        if graph.order() == 0 {
            return Err(DecompositionError::EmptyGraph);
        }
        if self.size_limit == 0 {
            return Err(DecompositionError::InvalidSizeLimit);
        }
        #[cfg(feature = "log")]
        info!(
            "searching {} on {} vertices / {} edges with size limit {}",
            O::NAME,
            graph.order(),
            graph.size(),
            self.size_limit
        );

        if graph.order() <= self.size_limit {
            #[cfg(feature = "log")]
            info!("input graph fits the size limit, calling leaf solver");
            let mut solution = leaf_solver.solve(graph);
            O::verify(graph, &solution).map_err(DecompositionError::LeafSolverContract)?;
            solution.sort_unstable();
            let statistics = SearchStatistics {
                leaf_calls: 1,
                largest_leaf: graph.order(),
                ..SearchStatistics::default()
            };
            return Ok(SearchResult {
                solution,
                statistics,
            });
        }

        let mut context = SearchContext::new::<O>(graph, O::heuristic_solution(graph))?;
        let mut work = WorkStack::default();
        let root = work.spawn(graph.clone(), Vec::new());
        self.enqueue(root, &mut work, &mut context)?;

        while let Some(subproblem) = work.pop() {
            self.process(subproblem, &mut work, &mut context, &mut leaf_solver)?;
        }
        context.statistics.subproblems = work.created();
        work.finish()?;

        #[cfg(feature = "log")]
        info!(
            "finished {} search: size {}, {:?}",
            O::NAME,
            context.incumbent.len(),
            context.statistics
        );
        let mut solution = context.incumbent;
        solution.sort_unstable();
        Ok(SearchResult {
            solution,
            statistics: context.statistics,
        })
    }

    /// Reduces a fresh subproblem against the incumbent, checks it and puts it on the stack.
    fn enqueue(
        &self,
        mut subproblem: Subproblem,
        work: &mut WorkStack,
        context: &mut SearchContext,
    ) -> Result<(), Invariant> {
        O::reduce(
            &mut subproblem.graph,
            &mut subproblem.forced,
            context.incumbent.len(),
        );
        Self::check_branch(&subproblem, context)?;
        work.push(subproblem);
        Ok(())
    }

    fn check_branch(subproblem: &Subproblem, context: &SearchContext) -> Result<(), Invariant> {
        O::check_branch(context.original, &subproblem.graph, &subproblem.forced).map_err(
            |cause| Invariant::BrokenBranch {
                subproblem: subproblem.id,
                cause,
            },
        )
    }

    fn process<S: LeafSolver>(
        &self,
        mut subproblem: Subproblem,
        work: &mut WorkStack,
        context: &mut SearchContext,
        leaf_solver: &mut S,
    ) -> Result<(), DecompositionError> {
        loop {
            O::reduce(
                &mut subproblem.graph,
                &mut subproblem.forced,
                context.incumbent.len(),
            );
            if let Some(solution) = O::solve_directly(&subproblem.graph) {
                context.statistics.solved_directly += 1;
                let mut candidate = subproblem.forced;
                candidate.extend(solution);
                context.offer::<O>(candidate)?;
                return Ok(work.resolve(subproblem.id)?);
            }
            let mut heuristic = subproblem.forced.clone();
            heuristic.extend(O::heuristic_solution(&subproblem.graph));
            let improved = context.offer::<O>(heuristic)?;
            // only a reduction that reads the incumbent gets tighter
            if !(improved && O::REDUCTION_READS_INCUMBENT) {
                break;
            }
        }
        Self::check_branch(&subproblem, context)?;

        let bound = O::optimistic_bound(&subproblem.graph) + subproblem.forced.len();
        if !O::improves(bound, context.incumbent.len()) {
            #[cfg(feature = "log")]
            debug!(
                "pruned subproblem {} ({} vertices), bound {} vs incumbent {}",
                subproblem.id,
                subproblem.graph.order(),
                bound,
                context.incumbent.len()
            );
            context.statistics.pruned += 1;
            return Ok(work.resolve(subproblem.id)?);
        }

        if subproblem.graph.order() <= self.size_limit {
            #[cfg(feature = "log")]
            debug!(
                "calling leaf solver on subproblem {} ({} vertices)",
                subproblem.id,
                subproblem.graph.order()
            );
            let solution = leaf_solver.solve(&subproblem.graph);
            O::verify(&subproblem.graph, &solution)
                .map_err(DecompositionError::LeafSolverContract)?;
            context.statistics.leaf_calls += 1;
            context.statistics.largest_leaf =
                max(context.statistics.largest_leaf, subproblem.graph.order());
            let mut candidate = subproblem.forced;
            candidate.extend(solution);
            context.offer::<O>(candidate)?;
            return Ok(work.resolve(subproblem.id)?);
        }

        let pivot =
            O::pivot(&subproblem.graph).ok_or(Invariant::MissingPivot(subproblem.id))?;
        #[cfg(feature = "log")]
        debug!(
            "splitting subproblem {} ({} vertices) on {}",
            subproblem.id,
            subproblem.graph.order(),
            pivot
        );
        work.resolve(subproblem.id)?;
        context.statistics.splits += 1;
        let [first, second] = O::split(subproblem.graph, pivot);
        self.spawn_branch(&subproblem.forced, first, work, context)?;
        self.spawn_branch(&subproblem.forced, second, work, context)?;
        Ok(())
    }

    fn spawn_branch(
        &self,
        parent_forced: &[usize],
        branch: Branch,
        work: &mut WorkStack,
        context: &mut SearchContext,
    ) -> Result<(), Invariant> {
        let mut forced = parent_forced.to_vec();
        forced.extend(branch.forced);
        let child = work.spawn(branch.graph, forced);
        self.enqueue(child, work, context)
    }
}

/// Clique of `graph`, maximum if `leaf_solver` is exact.
pub fn max_clique<S: LeafSolver>(
    graph: &HashMapGraph,
    size_limit: usize,
    leaf_solver: S,
) -> Result<Vec<usize>, DecompositionError> {
    BranchAndBound::<MaxClique>::with_size_limit(size_limit)
        .compute(graph, leaf_solver)
        .map(|result| result.solution)
}

/// Vertex cover of `graph`, minimum if `leaf_solver` is exact.
pub fn min_vertex_cover<S: LeafSolver>(
    graph: &HashMapGraph,
    size_limit: usize,
    leaf_solver: S,
) -> Result<Vec<usize>, DecompositionError> {
    BranchAndBound::<MinVertexCover>::with_size_limit(size_limit)
        .compute(graph, leaf_solver)
        .map(|result| result.solution)
}

#[cfg(test)]
mod tests {
    use crate::error::{DecompositionError, Invariant, Violation};
    use crate::exact::{max_clique_exact, min_vertex_cover_exact};
    use crate::graph::generators::{
        complete_graph, cycle_graph, gnp_random_graph, path_graph, star_graph,
    };
    use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
    use crate::objective::{MaxClique, MinVertexCover, Objective};
    use crate::partition::Branch;
    use crate::solver::{max_clique, min_vertex_cover, BranchAndBound};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::cell::{Cell, RefCell};

    #[test]
    fn clique_scenarios() {
        for limit in 1..=6 {
            let k5 = max_clique(&complete_graph(5), limit, max_clique_exact).unwrap();
            assert_eq!(k5, vec![0, 1, 2, 3, 4]);

            let c5 = cycle_graph(5);
            let clique = max_clique(&c5, limit, max_clique_exact).unwrap();
            assert_eq!(clique.len(), 2);
            assert!(c5.is_clique(&clique));

            let star = star_graph(5);
            let clique = max_clique(&star, limit, max_clique_exact).unwrap();
            assert_eq!(clique.len(), 2);
            assert!(clique.contains(&0));
        }
    }

    #[test]
    fn vertex_cover_scenarios() {
        for limit in 1..=5 {
            let path = path_graph(4);
            let cover = min_vertex_cover(&path, limit, min_vertex_cover_exact).unwrap();
            assert_eq!(cover.len(), 2);
            assert!(path.is_vertex_cover(&cover));

            let k4 = complete_graph(4);
            let cover = min_vertex_cover(&k4, limit, min_vertex_cover_exact).unwrap();
            assert_eq!(cover.len(), 3);
        }
    }

    #[test]
    fn size_limit_covering_the_input_calls_the_leaf_solver_once() {
        let graph = cycle_graph(7);
        let calls = Cell::new(0);
        let result = BranchAndBound::<MaxClique>::with_size_limit(7)
            .compute(&graph, |g: &HashMapGraph| {
                calls.set(calls.get() + 1);
                assert_eq!(g, &cycle_graph(7));
                vec![4, 3]
            })
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(result.statistics.splits, 0);
        assert_eq!(result.statistics.leaf_calls, 1);
        assert_eq!(result.solution, vec![3, 4]);

        let calls = Cell::new(0);
        let result = BranchAndBound::<MinVertexCover>::with_size_limit(100)
            .compute(&graph, |g: &HashMapGraph| {
                calls.set(calls.get() + 1);
                let mut cover = min_vertex_cover_exact(g);
                cover.reverse();
                cover
            })
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(result.statistics.splits, 0);
        assert_eq!(result.solution.len(), 4);
        assert!(result.solution.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn preconditions_fail_fast() {
        let calls = Cell::new(0);
        let counting = |g: &HashMapGraph| {
            calls.set(calls.get() + 1);
            max_clique_exact(g)
        };
        assert_eq!(
            max_clique(&HashMapGraph::new(), 3, counting),
            Err(DecompositionError::EmptyGraph)
        );
        assert_eq!(
            max_clique(&cycle_graph(5), 0, counting),
            Err(DecompositionError::InvalidSizeLimit)
        );
        assert_eq!(
            min_vertex_cover(&HashMapGraph::new(), 3, min_vertex_cover_exact),
            Err(DecompositionError::EmptyGraph)
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn leaf_solver_contract_violations_are_reported() {
        let graph = cycle_graph(5);
        let everything = |g: &HashMapGraph| g.sorted_vertices();
        assert!(matches!(
            max_clique(&graph, 5, everything),
            Err(DecompositionError::LeafSolverContract(Violation::MissingEdge(_)))
        ));
        let nothing = |_: &HashMapGraph| Vec::new();
        assert!(matches!(
            min_vertex_cover(&graph, 5, nothing),
            Err(DecompositionError::LeafSolverContract(Violation::UncoveredEdge(_)))
        ));
        let foreign = |_: &HashMapGraph| vec![99];
        assert_eq!(
            max_clique(&graph, 5, foreign),
            Err(DecompositionError::LeafSolverContract(Violation::UnknownVertex(99)))
        );
    }

    /// Max clique with a heuristic that claims every vertex is in the clique.
    struct OverlyOptimisticClique;

    impl Objective for OverlyOptimisticClique {
        const NAME: &'static str = "broken clique";
        const REDUCTION_READS_INCUMBENT: bool = true;

        fn improves(candidate: usize, incumbent: usize) -> bool {
            MaxClique::improves(candidate, incumbent)
        }

        fn verify(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation> {
            MaxClique::verify(graph, vertices)
        }

        fn check_branch(
            original: &HashMapGraph,
            graph: &HashMapGraph,
            forced: &[usize],
        ) -> Result<(), Violation> {
            MaxClique::check_branch(original, graph, forced)
        }

        fn reduce(graph: &mut HashMapGraph, forced: &mut Vec<usize>, incumbent: usize) {
            MaxClique::reduce(graph, forced, incumbent)
        }

        fn solve_directly(graph: &HashMapGraph) -> Option<Vec<usize>> {
            MaxClique::solve_directly(graph)
        }

        fn heuristic_solution(graph: &HashMapGraph) -> Vec<usize> {
            graph.sorted_vertices()
        }

        fn optimistic_bound(graph: &HashMapGraph) -> usize {
            MaxClique::optimistic_bound(graph)
        }

        fn pivot(graph: &HashMapGraph) -> Option<usize> {
            MaxClique::pivot(graph)
        }

        fn split(graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
            MaxClique::split(graph, pivot)
        }
    }

    #[test]
    fn infeasible_heuristics_are_invariant_violations() {
        let result = BranchAndBound::<OverlyOptimisticClique>::with_size_limit(2)
            .compute(&cycle_graph(6), max_clique_exact);
        assert!(matches!(
            result,
            Err(DecompositionError::InvariantViolation(
                Invariant::InfeasibleCandidate(Violation::MissingEdge(_))
            ))
        ));
    }

    #[test]
    fn leaf_graphs_respect_the_size_limit() {
        let mut rng = StdRng::seed_from_u64(392);
        for _ in 0..10 {
            let graph = gnp_random_graph(40, rng.gen_range(0.2..0.8), &mut rng);
            for limit in [3usize, 6, 10].iter().copied() {
                let largest = Cell::new(0);
                let result = BranchAndBound::<MaxClique>::with_size_limit(limit)
                    .compute(&graph, |g: &HashMapGraph| {
                        largest.set(largest.get().max(g.order()));
                        max_clique_exact(g)
                    })
                    .unwrap();
                assert!(largest.get() <= limit);
                assert_eq!(result.statistics.largest_leaf, largest.get());
                assert!(result.statistics.subproblems >= 1);
            }
        }
    }

    #[test]
    fn max_clique_matches_exact_solver() {
        let mut rng = StdRng::seed_from_u64(392);
        for _ in 0..60 {
            let n = rng.gen_range(12..26);
            let graph = gnp_random_graph(n, rng.gen_range(0.01..0.99), &mut rng);
            let omega = max_clique_exact(&graph).len();
            for limit in 1..=8 {
                let clique = max_clique(&graph, limit, max_clique_exact).unwrap();
                assert!(graph.is_clique(&clique));
                assert_eq!(clique.len(), omega, "limit {} on {:?}", limit, graph.edges());
            }
        }
    }

    #[test]
    fn min_vertex_cover_matches_exact_solver() {
        let mut rng = StdRng::seed_from_u64(483);
        for _ in 0..60 {
            let n = rng.gen_range(12..24);
            let graph = gnp_random_graph(n, rng.gen_range(0.01..0.99), &mut rng);
            let tau = min_vertex_cover_exact(&graph).len();
            for limit in 1..=8 {
                let cover = min_vertex_cover(&graph, limit, min_vertex_cover_exact).unwrap();
                assert!(graph.is_vertex_cover(&cover));
                assert_eq!(cover.len(), tau, "limit {} on {:?}", limit, graph.edges());
            }
        }
    }

    #[test]
    fn approximate_leaf_solvers_still_give_feasible_answers() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let graph = gnp_random_graph(30, rng.gen_range(0.1..0.9), &mut rng);
            let single = |g: &HashMapGraph| -> Vec<usize> {
                g.min_vertex_by(|a, b| a.cmp(b)).into_iter().collect()
            };
            let clique = max_clique(&graph, 4, single).unwrap();
            assert!(graph.is_clique(&clique));
            assert!(!clique.is_empty());

            let everything = |g: &HashMapGraph| g.sorted_vertices();
            let cover = min_vertex_cover(&graph, 4, everything).unwrap();
            assert!(graph.is_vertex_cover(&cover));
        }
    }

    #[test]
    fn isolated_vertices_do_not_hide_single_vertex_cliques() {
        let mut graph = HashMapGraph::new();
        for v in 0..6 {
            graph.add_vertex(v);
        }
        let clique = max_clique(&graph, 2, max_clique_exact).unwrap();
        assert_eq!(clique.len(), 1);
        let cover = min_vertex_cover(&graph, 2, min_vertex_cover_exact).unwrap();
        assert!(cover.is_empty());
    }

    #[test]
    fn search_is_deterministic() {
        let graph = gnp_random_graph(45, 0.5, &mut StdRng::seed_from_u64(11));
        let a = BranchAndBound::<MaxClique>::with_size_limit(5)
            .compute(&graph, max_clique_exact)
            .unwrap();
        let b = BranchAndBound::<MaxClique>::with_size_limit(5)
            .compute(&graph, max_clique_exact)
            .unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.statistics, b.statistics);
    }

    /// Vertex 0 on top, rings 1..=5 and 6..=10, vertex 11 at the bottom. Five-regular, every
    /// neighborhood is a 5-cycle, largest clique 3, largest independent set 3.
    fn icosahedron() -> HashMapGraph {
        let mut edges = Vec::new();
        for i in 1..=5 {
            let next = i % 5 + 1;
            edges.push((0, i));
            edges.push((i, next));
            edges.push((i + 5, next + 5));
            edges.push((i + 5, 11));
            edges.push((i, i + 5));
            edges.push((i, next + 5));
        }
        HashMapGraph::from_edges(&edges)
    }

    fn recording_leaf<'a>(
        seen: &'a RefCell<Vec<Vec<usize>>>,
        exact: fn(&HashMapGraph) -> Vec<usize>,
    ) -> impl FnMut(&HashMapGraph) -> Vec<usize> + 'a {
        move |g: &HashMapGraph| {
            seen.borrow_mut().push(g.sorted_vertices());
            exact(g)
        }
    }

    #[test]
    fn clique_search_explores_the_exclude_branch_first() {
        let graph = icosahedron();
        assert_eq!(graph.size(), 30);
        let seen = RefCell::new(Vec::new());
        let result = BranchAndBound::<MaxClique>::with_size_limit(11)
            .compute(&graph, recording_leaf(&seen, max_clique_exact))
            .unwrap();
        assert_eq!(result.solution.len(), 3);
        assert_eq!(result.statistics.splits, 1);
        assert_eq!(
            seen.into_inner(),
            vec![(1..12).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]]
        );
    }

    #[test]
    fn cover_search_explores_the_pivot_branch_first() {
        let graph = icosahedron();
        let seen = RefCell::new(Vec::new());
        let result = BranchAndBound::<MinVertexCover>::with_size_limit(11)
            .compute(&graph, recording_leaf(&seen, min_vertex_cover_exact))
            .unwrap();
        assert_eq!(result.solution.len(), 9);
        assert_eq!(result.statistics.splits, 1);
        assert_eq!(
            seen.into_inner(),
            vec![(1..12).collect::<Vec<_>>(), vec![6, 7, 8, 9, 10, 11]]
        );
    }

    thread_local! {
        static REDUCTIONS: Cell<usize> = Cell::new(0);
        static HEURISTIC_CALLS: Cell<usize> = Cell::new(0);
    }

    /// Vertex cover whose first heuristic answer is the whole vertex set, so the search starts
    /// from a bad incumbent and the root heuristic improves it. Counts reductions.
    struct CountingCover;

    impl Objective for CountingCover {
        const NAME: &'static str = "counting cover";
        const REDUCTION_READS_INCUMBENT: bool = MinVertexCover::REDUCTION_READS_INCUMBENT;

        fn improves(candidate: usize, incumbent: usize) -> bool {
            MinVertexCover::improves(candidate, incumbent)
        }

        fn verify(graph: &HashMapGraph, vertices: &[usize]) -> Result<(), Violation> {
            MinVertexCover::verify(graph, vertices)
        }

        fn check_branch(
            original: &HashMapGraph,
            graph: &HashMapGraph,
            forced: &[usize],
        ) -> Result<(), Violation> {
            MinVertexCover::check_branch(original, graph, forced)
        }

        fn reduce(graph: &mut HashMapGraph, forced: &mut Vec<usize>, incumbent: usize) {
            REDUCTIONS.with(|count| count.set(count.get() + 1));
            MinVertexCover::reduce(graph, forced, incumbent)
        }

        fn solve_directly(graph: &HashMapGraph) -> Option<Vec<usize>> {
            MinVertexCover::solve_directly(graph)
        }

        fn heuristic_solution(graph: &HashMapGraph) -> Vec<usize> {
            let calls = HEURISTIC_CALLS.with(|count| {
                count.set(count.get() + 1);
                count.get()
            });
            if calls == 1 {
                graph.sorted_vertices()
            } else {
                MinVertexCover::heuristic_solution(graph)
            }
        }

        fn optimistic_bound(graph: &HashMapGraph) -> usize {
            MinVertexCover::optimistic_bound(graph)
        }

        fn pivot(graph: &HashMapGraph) -> Option<usize> {
            MinVertexCover::pivot(graph)
        }

        fn split(graph: HashMapGraph, pivot: usize) -> [Branch; 2] {
            MinVertexCover::split(graph, pivot)
        }
    }

    #[test]
    fn incumbent_free_reduction_runs_once_per_visit() {
        let graph = cycle_graph(8);
        let result = BranchAndBound::<CountingCover>::with_size_limit(3)
            .compute(&graph, min_vertex_cover_exact)
            .unwrap();
        assert!(result.statistics.incumbent_updates >= 1);
        assert_eq!(result.solution.len(), 4);
        assert!(graph.is_vertex_cover(&result.solution));
        // one reduction when a subproblem is pushed, one when it is popped
        assert_eq!(
            REDUCTIONS.with(|count| count.get()),
            2 * result.statistics.subproblems
        );
    }

    #[test]
    fn reductions_that_read_the_incumbent_are_flagged() {
        assert!(MaxClique::REDUCTION_READS_INCUMBENT);
        assert!(!MinVertexCover::REDUCTION_READS_INCUMBENT);
    }
}
