use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Why a vertex list is not a clique / vertex cover of the graph it was checked against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    UnknownVertex(usize),
    DuplicateVertex(usize),
    MissingEdge((usize, usize)),
    UncoveredEdge((usize, usize)),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Violation::UnknownVertex(v) => write!(f, "Unknown Vertex: {}", v),
            Violation::DuplicateVertex(v) => write!(f, "Duplicate Vertex: {}", v),
            Violation::MissingEdge((u, v)) => write!(f, "Missing Edge: ({}, {})", u, v),
            Violation::UncoveredEdge((u, v)) => write!(f, "Uncovered Edge: ({}, {})", u, v),
        }
    }
}

/// Internal consistency checks of the search. Any of these is a bug, never bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invariant {
    InfeasibleCandidate(Violation),
    BrokenBranch { subproblem: usize, cause: Violation },
    UnknownSubproblem(usize),
    LiveSubproblems(usize),
    MissingPivot(usize),
}

impl Display for Invariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::InfeasibleCandidate(cause) => {
                write!(f, "candidate is infeasible in the input graph: {}", cause)
            }
            Invariant::BrokenBranch { subproblem, cause } => write!(
                f,
                "subproblem {} cannot be extended to a solution: {}",
                subproblem, cause
            ),
            Invariant::UnknownSubproblem(id) => write!(f, "subproblem {} is not live", id),
            Invariant::LiveSubproblems(count) => {
                write!(f, "{} subproblems still live after the search", count)
            }
            Invariant::MissingPivot(id) => write!(f, "subproblem {} has no pivot vertex", id),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    #[error("input graph has no vertices")]
    EmptyGraph,
    #[error("size limit must be positive")]
    InvalidSizeLimit,
    #[error("leaf solver broke its contract: {0}")]
    LeafSolverContract(Violation),
    #[error("invariant violated: {0}")]
    InvariantViolation(Invariant),
}

impl From<Invariant> for DecompositionError {
    fn from(invariant: Invariant) -> Self {
        DecompositionError::InvariantViolation(invariant)
    }
}
