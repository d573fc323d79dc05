use std::collections::BTreeSet;
use std::fmt::{self, Display};

use lexo_core::Symbol;

/// One vertex of the precedence graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode<S: Symbol> {
    symbol: S,
    antecedents: BTreeSet<S>,
}

impl<S: Symbol> GraphNode<S> {
    /// Creates a node with no antecedents.
    pub fn new(symbol: S) -> Self {
        Self {
            symbol,
            antecedents: BTreeSet::new(),
        }
    }

    /// Returns the symbol this node stands for.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Returns the symbols that must precede this one.
    pub fn antecedents(&self) -> &BTreeSet<S> {
        &self.antecedents
    }

    /// Records `antecedent` as preceding this symbol. Returns whether it was new.
    pub(crate) fn insert_antecedent(&mut self, antecedent: S) -> bool {
        self.antecedents.insert(antecedent)
    }
}

impl<S: Symbol + Display> Display for GraphNode<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C:{},A:", self.symbol)?;
        for (idx, antecedent) in self.antecedents.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{antecedent}")?;
        }
        Ok(())
    }
}
