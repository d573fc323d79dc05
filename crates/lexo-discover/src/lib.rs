#![deny(missing_docs)]

//! Alphabet discovery: recovers the symbol order of an unknown alphabet from a
//! list of words that are already sorted under it.
//!
//! The [`extract`] module compares adjacent words group by group and records one
//! precedence edge per newly observed adjacent pair of symbols. The resulting
//! [`PrecedenceGraph`](lexo_graph::PrecedenceGraph) is linearized by
//! [`lexo_graph::linearize`], and [`AlphabetDiscovery`] memoizes the outcome.
//!
//! ```
//! let alphabet = lexo_discover::discover_alphabet(["cat", "cbt", "b"]).unwrap();
//! let at = |c: char| alphabet.iter().position(|s| *s == c).unwrap();
//! assert!(at('a') < at('b'));
//! assert!(at('c') < at('b'));
//! ```

mod discovery;
pub mod extract;

pub use discovery::{discover_alphabet, discover_alphabet_with, AlphabetDiscovery};
pub use extract::extract_constraints;
pub use lexo_core::{DiscoveryConfig, LexoError, TieBreak, Traversal};
