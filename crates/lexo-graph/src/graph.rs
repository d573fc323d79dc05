use std::collections::BTreeSet;

use indexmap::IndexMap;
use lexo_core::{LexoError, Symbol};
use tracing::trace;

use crate::node::GraphNode;

/// Mapping from symbol to [`GraphNode`], remembering first-insertion order.
///
/// Every antecedent referenced by any node is itself a key of the mapping, and no
/// symbol is its own antecedent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecedenceGraph<S: Symbol> {
    nodes: IndexMap<S, GraphNode<S>>,
    edge_count: usize,
}

impl<S: Symbol> Default for PrecedenceGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> PrecedenceGraph<S> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Number of distinct symbols in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true when no symbol has been recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct precedence edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the symbol has a node.
    pub fn contains(&self, symbol: &S) -> bool {
        self.nodes.contains_key(symbol)
    }

    /// Returns the node for the symbol, if any.
    pub fn node(&self, symbol: &S) -> Option<&GraphNode<S>> {
        self.nodes.get(symbol)
    }

    /// Iterates over nodes in first-insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &GraphNode<S>> + '_ {
        self.nodes.values()
    }

    /// Iterates over symbols in first-insertion order.
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &S> + '_ {
        self.nodes.keys()
    }

    /// Returns the first-insertion position of the symbol.
    pub fn position(&self, symbol: &S) -> Option<usize> {
        self.nodes.get_index_of(symbol)
    }

    /// Returns the antecedents of the symbol.
    pub fn antecedents_of(&self, symbol: &S) -> Result<&BTreeSet<S>, LexoError> {
        self.nodes
            .get(symbol)
            .map(GraphNode::antecedents)
            .ok_or_else(|| {
                LexoError::invariant("unknown-symbol", "symbol has no graph node")
                    .with_context("symbol", format!("{symbol:?}"))
            })
    }

    /// All edges as `(before, after)` pairs, grouped by `after` in insertion order.
    pub fn edges(&self) -> Vec<(S, S)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for node in self.nodes.values() {
            for antecedent in node.antecedents() {
                edges.push((antecedent.clone(), node.symbol().clone()));
            }
        }
        edges
    }

    /// Creates the node for `symbol` if it does not exist yet. Returns whether it was created.
    pub fn ensure_node(&mut self, symbol: &S) -> bool {
        if self.nodes.contains_key(symbol) {
            return false;
        }
        self.nodes.insert(symbol.clone(), GraphNode::new(symbol.clone()));
        true
    }

    /// Records that `before` precedes `after`, creating both nodes on demand.
    ///
    /// Returns whether the edge was new. A symbol preceding itself is rejected as
    /// a malformed order.
    pub fn add_precedence(&mut self, before: &S, after: &S) -> Result<bool, LexoError> {
        if before == after {
            return Err(
                LexoError::order("self-precedence", "symbol cannot precede itself")
                    .with_context("symbol", format!("{before:?}")),
            );
        }
        self.ensure_node(before);
        self.ensure_node(after);
        let inserted = match self.nodes.get_mut(after) {
            Some(node) => node.insert_antecedent(before.clone()),
            None => {
                return Err(LexoError::invariant(
                    "unknown-symbol",
                    "node vanished while recording an edge",
                )
                .with_context("symbol", format!("{after:?}")))
            }
        };
        if inserted {
            self.edge_count += 1;
            trace!(before = ?before, after = ?after, "recorded precedence edge");
        }
        Ok(inserted)
    }
}
