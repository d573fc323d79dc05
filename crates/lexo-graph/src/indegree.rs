use std::collections::{BTreeSet, HashMap};

use lexo_core::{LexoError, Symbol, TieBreak};

use crate::graph::PrecedenceGraph;

/// Remaining-antecedent counts for the symbols of a [`PrecedenceGraph`].
///
/// Symbols are addressed by rank, which encodes the tie-break rule: with
/// [`TieBreak::SymbolOrder`] ranks follow `Ord`, with [`TieBreak::FirstSeen`] they
/// follow graph insertion order. Candidates are kept in a set keyed by
/// `(in_degree, rank)` so the minimum is always first and a decrement is a
/// remove followed by an insert.
#[derive(Debug, Clone)]
pub struct InDegreeIndex<S: Symbol> {
    symbols: Vec<S>,
    ranks: HashMap<S, usize>,
    antecedents: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    in_degree: Vec<Option<usize>>,
    queue: BTreeSet<(usize, usize)>,
}

impl<S: Symbol> InDegreeIndex<S> {
    /// Computes the index for every symbol of the graph.
    pub fn from_graph(graph: &PrecedenceGraph<S>, tie_break: TieBreak) -> Result<Self, LexoError> {
        let mut symbols: Vec<S> = graph.symbols().cloned().collect();
        if tie_break == TieBreak::SymbolOrder {
            symbols.sort();
        }
        let ranks: HashMap<S, usize> = symbols
            .iter()
            .enumerate()
            .map(|(rank, symbol)| (symbol.clone(), rank))
            .collect();

        let mut antecedents = vec![Vec::new(); symbols.len()];
        let mut successors = vec![Vec::new(); symbols.len()];
        for (rank, symbol) in symbols.iter().enumerate() {
            for antecedent in graph.antecedents_of(symbol)? {
                let before = ranks.get(antecedent).copied().ok_or_else(|| {
                    LexoError::invariant("unknown-symbol", "antecedent has no graph node")
                        .with_context("symbol", format!("{antecedent:?}"))
                })?;
                antecedents[rank].push(before);
                successors[before].push(rank);
            }
        }

        let in_degree: Vec<Option<usize>> =
            antecedents.iter().map(|list| Some(list.len())).collect();
        let queue = in_degree
            .iter()
            .enumerate()
            .filter_map(|(rank, degree)| degree.map(|d| (d, rank)))
            .collect();

        Ok(Self {
            symbols,
            ranks,
            antecedents,
            successors,
            in_degree,
            queue,
        })
    }

    /// Number of symbols not yet removed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Returns true once every symbol has been removed.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Current in-degree of a symbol that is still present.
    pub fn in_degree(&self, symbol: &S) -> Option<usize> {
        self.ranks
            .get(symbol)
            .and_then(|rank| self.in_degree[*rank])
    }

    /// The present symbol with the smallest in-degree, ties resolved by rank.
    pub fn peek_min(&self) -> Option<(&S, usize)> {
        self.queue
            .first()
            .map(|(degree, rank)| (&self.symbols[*rank], *degree))
    }

    /// Removes a ready symbol and releases the symbols that were waiting on it.
    pub fn remove(&mut self, symbol: &S) -> Result<(), LexoError> {
        let rank = self.present_rank(symbol)?;
        let degree = self.in_degree[rank].unwrap_or_default();
        if degree != 0 {
            return Err(
                LexoError::invariant("symbol-not-ready", "symbol still has antecedents")
                    .with_context("symbol", format!("{symbol:?}"))
                    .with_context("in_degree", degree),
            );
        }
        self.queue.remove(&(0, rank));
        self.in_degree[rank] = None;

        for &successor in &self.successors[rank] {
            let current = match self.in_degree[successor] {
                Some(current) if current > 0 => current,
                _ => {
                    return Err(LexoError::invariant(
                        "in-degree-underflow",
                        "successor count would drop below zero",
                    )
                    .with_context("symbol", format!("{:?}", self.symbols[successor]))
                    .with_context("released_by", format!("{symbol:?}")))
                }
            };
            self.queue.remove(&(current, successor));
            self.queue.insert((current - 1, successor));
            self.in_degree[successor] = Some(current - 1);
        }
        Ok(())
    }

    /// Finds a cycle among the remaining symbols, listed in precedence order.
    ///
    /// Only meaningful when no remaining symbol has in-degree zero: every
    /// remaining symbol then has a remaining antecedent, so walking antecedents
    /// must revisit a symbol.
    pub fn cycle_witness(&self) -> Vec<S> {
        let Some(&(_, start)) = self.queue.first() else {
            return Vec::new();
        };
        let mut path: Vec<usize> = Vec::new();
        let mut seen: HashMap<usize, usize> = HashMap::new();
        let mut current = start;
        loop {
            if let Some(&at) = seen.get(&current) {
                let mut cycle: Vec<S> = path[at..]
                    .iter()
                    .rev()
                    .map(|rank| self.symbols[*rank].clone())
                    .collect();
                if let Some(first) = cycle.first().cloned() {
                    cycle.push(first);
                }
                return cycle;
            }
            seen.insert(current, path.len());
            path.push(current);
            let next = self.antecedents[current]
                .iter()
                .copied()
                .filter(|rank| self.in_degree[*rank].is_some())
                .min();
            match next {
                Some(next) => current = next,
                None => return Vec::new(),
            }
        }
    }

    fn present_rank(&self, symbol: &S) -> Result<usize, LexoError> {
        self.ranks
            .get(symbol)
            .copied()
            .filter(|rank| self.in_degree[*rank].is_some())
            .ok_or_else(|| {
                LexoError::invariant("unknown-symbol", "symbol is not present in the index")
                    .with_context("symbol", format!("{symbol:?}"))
            })
    }
}
