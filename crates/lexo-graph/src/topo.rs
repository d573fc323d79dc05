use std::collections::HashSet;

use lexo_core::{LexoError, Symbol, TieBreak};
use tracing::{debug, warn};

use crate::graph::PrecedenceGraph;
use crate::indegree::InDegreeIndex;

/// Lifecycle of a [`TopologicalSorter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortState {
    /// Created, nothing computed yet.
    Initialized,
    /// In-degree index built from the graph.
    InDegreeComputed,
    /// At least one symbol has been emitted.
    Extracting,
    /// Every symbol has been emitted.
    Completed,
    /// A cycle prevented further extraction.
    Failed,
}

/// Greedy minimum-in-degree linearization of a [`PrecedenceGraph`].
#[derive(Debug)]
pub struct TopologicalSorter<'g, S: Symbol> {
    graph: &'g PrecedenceGraph<S>,
    tie_break: TieBreak,
    index: Option<InDegreeIndex<S>>,
    order: Vec<S>,
    state: SortState,
}

impl<'g, S: Symbol> TopologicalSorter<'g, S> {
    /// Prepares a sorter over the graph.
    pub fn new(graph: &'g PrecedenceGraph<S>, tie_break: TieBreak) -> Self {
        Self {
            graph,
            tie_break,
            index: None,
            order: Vec::with_capacity(graph.len()),
            state: SortState::Initialized,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Symbols emitted so far.
    pub fn emitted(&self) -> &[S] {
        &self.order
    }

    /// Emits the next symbol, or `None` once every symbol has been emitted.
    pub fn step(&mut self) -> Result<Option<S>, LexoError> {
        match self.state {
            SortState::Completed => return Ok(None),
            SortState::Failed => {
                return Err(LexoError::invariant(
                    "sorter-failed",
                    "sorter already failed and cannot resume",
                ))
            }
            SortState::Initialized => {
                self.index = Some(InDegreeIndex::from_graph(self.graph, self.tie_break)?);
                self.state = SortState::InDegreeComputed;
            }
            SortState::InDegreeComputed | SortState::Extracting => {}
        }
        let Some(index) = self.index.as_mut() else {
            return Err(LexoError::invariant(
                "missing-index",
                "in-degree index was not computed",
            ));
        };

        let (symbol, degree) = match index.peek_min() {
            Some((symbol, degree)) => (symbol.clone(), degree),
            None => {
                self.state = SortState::Completed;
                return Ok(None);
            }
        };
        if degree != 0 {
            self.state = SortState::Failed;
            let cycle = index.cycle_witness();
            let err = LexoError::order(
                "cycle-detected",
                "no symbol is free of unresolved antecedents",
            )
            .with_context("remaining", index.remaining())
            .with_context("cycle", render_cycle(&cycle))
            .with_hint("the words are not sorted by any single alphabet");
            warn!(code = err.code(), remaining = index.remaining(), "precedence cycle");
            return Err(err);
        }

        index.remove(&symbol)?;
        self.order.push(symbol.clone());
        self.state = if index.is_empty() {
            SortState::Completed
        } else {
            SortState::Extracting
        };
        Ok(Some(symbol))
    }

    /// Runs to completion and returns the ordered symbols.
    pub fn run(mut self) -> Result<Vec<S>, LexoError> {
        while self.step()?.is_some() {}
        debug!(
            symbols = self.order.len(),
            edges = self.graph.edge_count(),
            "topological order complete"
        );
        Ok(self.order)
    }
}

/// Orders every symbol of the graph so that each antecedent comes first.
pub fn topological_order<S: Symbol>(
    graph: &PrecedenceGraph<S>,
    tie_break: TieBreak,
) -> Result<Vec<S>, LexoError> {
    TopologicalSorter::new(graph, tie_break).run()
}

/// Topologically orders the graph, then appends every symbol from `symbols` that
/// the graph never saw, in first-occurrence order.
pub fn linearize<S, I>(
    graph: &PrecedenceGraph<S>,
    symbols: I,
    tie_break: TieBreak,
) -> Result<Vec<S>, LexoError>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut order = topological_order(graph, tie_break)?;
    let mut unconstrained: HashSet<S> = HashSet::new();
    for symbol in symbols {
        if !graph.contains(&symbol) && unconstrained.insert(symbol.clone()) {
            order.push(symbol);
        }
    }
    if !unconstrained.is_empty() {
        debug!(count = unconstrained.len(), "appended unconstrained symbols");
    }
    Ok(order)
}

fn render_cycle<S: Symbol>(cycle: &[S]) -> String {
    cycle
        .iter()
        .map(|symbol| format!("{symbol:?}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
