use std::collections::HashSet;

use lexo_core::{DiscoveryConfig, LexoError, Symbol};
use lexo_graph::{linearize, PrecedenceGraph};
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::extract::extract_constraints;

/// One discovery run over an immutable, pre-sorted word list.
///
/// The alphabet is computed on first request and cached; later calls return the
/// cached value. The cache is published at most once even when shared across
/// threads.
#[derive(Debug)]
pub struct AlphabetDiscovery<S: Symbol> {
    words: Vec<Vec<S>>,
    config: DiscoveryConfig,
    alphabet: OnceCell<Vec<S>>,
    alphabet_string: OnceCell<String>,
}

impl AlphabetDiscovery<char> {
    /// Creates a discovery over string words, one symbol per `char`.
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::from_sequences(
            words
                .into_iter()
                .map(|word| word.as_ref().chars().collect())
                .collect(),
        )
    }

    /// The alphabet as a string, cached like [`Self::alphabet`].
    pub fn alphabet_as_string(&self) -> Result<&str, LexoError> {
        self.alphabet_string
            .get_or_try_init(|| -> Result<String, LexoError> {
                Ok(self.alphabet()?.iter().collect())
            })
            .map(String::as_str)
    }
}

impl<S: Symbol> AlphabetDiscovery<S> {
    /// Creates a discovery over words given as symbol sequences.
    pub fn from_sequences(words: Vec<Vec<S>>) -> Self {
        Self {
            words,
            config: DiscoveryConfig::default(),
            alphabet: OnceCell::new(),
            alphabet_string: OnceCell::new(),
        }
    }

    /// Replaces the configuration. Has no effect once the alphabet is cached.
    pub fn with_config(mut self, config: DiscoveryConfig) -> Self {
        self.config = config;
        self
    }

    /// The input words.
    pub fn words(&self) -> &[Vec<S>] {
        &self.words
    }

    /// The active configuration.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Returns true once the alphabet has been computed and cached.
    pub fn is_cached(&self) -> bool {
        self.alphabet.get().is_some()
    }

    /// The inferred alphabet: every symbol of the input exactly once, each
    /// precedence fact derived from adjacent words respected.
    pub fn alphabet(&self) -> Result<&[S], LexoError> {
        if let Some(alphabet) = self.alphabet.get() {
            debug!(symbols = alphabet.len(), "reusing cached alphabet");
            return Ok(alphabet);
        }
        self.alphabet
            .get_or_try_init(|| {
                self.compute().map_err(|err| {
                    warn!(code = err.code(), "alphabet discovery failed");
                    err
                })
            })
            .map(Vec::as_slice)
    }

    /// Builds the precedence graph for the input without caching it.
    ///
    /// With fewer than two words nothing can be compared and the graph is empty.
    pub fn precedence_graph(&self) -> Result<PrecedenceGraph<S>, LexoError> {
        if self.words.len() < 2 {
            return Ok(PrecedenceGraph::new());
        }
        extract_constraints(&self.words, self.config.traversal)
    }

    fn compute(&self) -> Result<Vec<S>, LexoError> {
        debug!(words = self.words.len(), config = ?self.config, "discovering alphabet");
        match self.words.as_slice() {
            [] => Ok(Vec::new()),
            [word] => Ok(distinct_in_order(word)),
            words => {
                let graph = self.precedence_graph()?;
                debug!(
                    nodes = graph.len(),
                    edges = graph.edge_count(),
                    "precedence graph extracted"
                );
                let alphabet = linearize(
                    &graph,
                    words.iter().flatten().cloned(),
                    self.config.tie_break,
                )?;
                debug!(symbols = alphabet.len(), "alphabet discovered");
                Ok(alphabet)
            }
        }
    }
}

/// Infers the alphabet of `words` with the default configuration.
pub fn discover_alphabet<I, W>(words: I) -> Result<Vec<char>, LexoError>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    discover_alphabet_with(words, DiscoveryConfig::default())
}

/// Infers the alphabet of `words` with an explicit configuration.
pub fn discover_alphabet_with<I, W>(
    words: I,
    config: DiscoveryConfig,
) -> Result<Vec<char>, LexoError>
where
    I: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let discovery = AlphabetDiscovery::new(words).with_config(config);
    discovery.alphabet().map(<[char]>::to_vec)
}

fn distinct_in_order<S: Symbol>(word: &[S]) -> Vec<S> {
    let mut seen = HashSet::new();
    word.iter()
        .filter(|symbol| seen.insert((*symbol).clone()))
        .cloned()
        .collect()
}
