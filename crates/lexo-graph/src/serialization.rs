use lexo_core::errors::{ErrorInfo, LexoError};
use lexo_core::Symbol;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::graph::PrecedenceGraph;

/// Serializes the graph to a JSON string, nodes in first-insertion order.
pub fn graph_to_json<S>(graph: &PrecedenceGraph<S>) -> Result<String, LexoError>
where
    S: Symbol + Serialize,
{
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| LexoError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string, re-validating every edge.
pub fn graph_from_json<S>(json: &str) -> Result<PrecedenceGraph<S>, LexoError>
where
    S: Symbol + DeserializeOwned,
{
    let serializable: SerializableGraph<S> = serde_json::from_str(json)
        .map_err(|err| LexoError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph<S> {
    nodes: Vec<SerializableNode<S>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
struct SerializableNode<S> {
    symbol: S,
    #[serde(default)]
    antecedents: Vec<S>,
}

impl<S: Symbol> SerializableGraph<S> {
    fn from_graph(graph: &PrecedenceGraph<S>) -> Self {
        let nodes = graph
            .nodes()
            .map(|node| SerializableNode {
                symbol: node.symbol().clone(),
                antecedents: node.antecedents().iter().cloned().collect(),
            })
            .collect();
        Self { nodes }
    }

    fn into_graph(self) -> Result<PrecedenceGraph<S>, LexoError> {
        let mut graph = PrecedenceGraph::new();
        for node in &self.nodes {
            graph.ensure_node(&node.symbol);
        }
        for node in self.nodes {
            for antecedent in &node.antecedents {
                graph.add_precedence(antecedent, &node.symbol)?;
            }
        }
        Ok(graph)
    }
}
