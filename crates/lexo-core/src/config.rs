//! Discovery configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, LexoError};

/// YAML-configurable knobs for a discovery run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Rule used to pick among symbols that are ready at the same time.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// How the constraint extractor walks tie ranges.
    #[serde(default)]
    pub traversal: Traversal,
}

impl DiscoveryConfig {
    /// Parses a configuration from a YAML document. Missing fields take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LexoError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|err| {
            LexoError::Config(ErrorInfo::new("parse-config", err.to_string()))
        })
    }

    /// Renders the configuration as YAML.
    pub fn to_yaml_string(&self) -> Result<String, LexoError> {
        serde_yaml::to_string(self)
            .map_err(|err| LexoError::Config(ErrorInfo::new("render-config", err.to_string())))
    }

    /// Returns a copy using the provided tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns a copy using the provided traversal.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}

/// Deterministic ordering among symbols whose in-degree is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Smallest symbol under its natural `Ord` wins.
    #[default]
    SymbolOrder,
    /// Symbol first inserted into the precedence graph wins.
    FirstSeen,
}

/// Strategy used to walk nested tie ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Divide and conquer through direct recursion. Call depth grows with the
    /// longest shared prefix.
    Recursive,
    /// Same ranges, driven by a heap allocated work stack.
    #[default]
    ExplicitStack,
}
