//! Reductions that shrink a subproblem without losing every optimal solution of it.
mod k_core;
mod nbvr;

pub use k_core::k_core_reduction;
pub use nbvr::{nbvr_reduction, NbvrReducer};
