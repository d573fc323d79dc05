#![deny(missing_docs)]

//! Precedence graph and deterministic topological ordering of symbols.
//!
//! A [`PrecedenceGraph`] records facts of the form "A precedes B" by storing `A`
//! in the antecedent set of `B`. [`topological_order`] linearizes the graph by
//! repeatedly emitting a symbol whose antecedents have all been emitted, and
//! reports a [`LexoError::Order`](lexo_core::LexoError::Order) carrying a cycle
//! witness when no such symbol exists.

mod graph;
mod indegree;
mod node;
mod serialization;
mod topo;

pub use graph::PrecedenceGraph;
pub use indegree::InDegreeIndex;
pub use node::GraphNode;
pub use serialization::{graph_from_json, graph_to_json};
pub use topo::{linearize, topological_order, SortState, TopologicalSorter};
