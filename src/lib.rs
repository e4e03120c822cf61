pub(crate) mod datastructures;

pub mod error;
pub mod exact;
pub mod graph;
pub mod heuristics;
#[cfg(feature = "logging")]
pub mod logging;
pub mod lowerbound;
pub mod objective;
pub mod partition;
pub mod reduction;
pub mod solver;
pub mod upperbound;
pub mod worklist;

pub use error::DecompositionError;
pub use solver::{
    max_clique, min_vertex_cover, BranchAndBound, LeafSolver, SearchResult, SearchStatistics,
};
