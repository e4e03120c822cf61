use crate::error::Invariant;
use crate::graph::HashMapGraph;
use fxhash::FxHashSet;

/// A pending branch: the graph left to search and the vertices already committed to.
/// Identified by an id handed out once, never by the graph's content.
#[derive(Clone, Debug)]
pub struct Subproblem {
    pub id: usize,
    pub graph: HashMapGraph,
    pub forced: Vec<usize>,
}

/// LIFO stack of subproblems plus the ids of every subproblem that was created and not yet
/// resolved, including the one currently being processed.
#[derive(Debug, Default)]
pub struct WorkStack {
    next_id: usize,
    pending: Vec<Subproblem>,
    live: FxHashSet<usize>,
}

impl WorkStack {
    pub fn spawn(&mut self, graph: HashMapGraph, forced: Vec<usize>) -> Subproblem {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        Subproblem { id, graph, forced }
    }

    pub fn push(&mut self, subproblem: Subproblem) {
        debug_assert!(self.live.contains(&subproblem.id));
        self.pending.push(subproblem);
    }

    pub fn pop(&mut self) -> Option<Subproblem> {
        self.pending.pop()
    }

    pub fn resolve(&mut self, id: usize) -> Result<(), Invariant> {
        if self.live.remove(&id) {
            Ok(())
        } else {
            Err(Invariant::UnknownSubproblem(id))
        }
    }

    pub fn created(&self) -> usize {
        self.next_id
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Consumes the stack once the search is over; every subproblem must have been resolved.
    pub fn finish(self) -> Result<(), Invariant> {
        if self.pending.is_empty() && self.live.is_empty() {
            Ok(())
        } else {
            Err(Invariant::LiveSubproblems(self.live.len()))
        }
    }
}
