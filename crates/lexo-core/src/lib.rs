#![deny(missing_docs)]
#![doc = "Core traits, error types and configuration shared by the lexo crates."]

use std::fmt::Debug;
use std::hash::Hash;

pub mod config;
pub mod errors;

pub use config::{DiscoveryConfig, TieBreak, Traversal};
pub use errors::{ErrorInfo, LexoError};

/// Atomic unit of an alphabet.
///
/// Identity is value equality. The `Ord` bound is only used to make tie-breaks
/// reproducible; it carries no information about the discovered order.
pub trait Symbol: Clone + Eq + Ord + Hash + Debug {}

impl<T> Symbol for T where T: Clone + Eq + Ord + Hash + Debug {}
