//! Constraint extraction over ranges of sorted words.
//!
//! A range is a contiguous run of words sharing a prefix of `skip` symbols. The
//! symbol at position `skip` is compared between neighbours: a change records
//! "previous precedes current", and each run of equal symbols (a tie range) is
//! resolved one position deeper. Both traversals visit tie ranges depth first,
//! left to right, so they build identical graphs.

use std::ops::Range;

use lexo_core::{LexoError, Symbol, Traversal};
use lexo_graph::PrecedenceGraph;
use tracing::trace;

/// Builds the precedence graph implied by `words`, which must be sorted.
pub fn extract_constraints<S: Symbol>(
    words: &[Vec<S>],
    traversal: Traversal,
) -> Result<PrecedenceGraph<S>, LexoError> {
    let mut extractor = ConstraintExtractor::new(words);
    if !words.is_empty() {
        match traversal {
            Traversal::Recursive => extractor.process_recursive(0..words.len(), 0)?,
            Traversal::ExplicitStack => extractor.process_with_stack(0..words.len())?,
        }
    }
    Ok(extractor.into_graph())
}

struct ConstraintExtractor<'w, S: Symbol> {
    words: &'w [Vec<S>],
    graph: PrecedenceGraph<S>,
}

impl<'w, S: Symbol> ConstraintExtractor<'w, S> {
    fn new(words: &'w [Vec<S>]) -> Self {
        Self {
            words,
            graph: PrecedenceGraph::new(),
        }
    }

    fn into_graph(self) -> PrecedenceGraph<S> {
        self.graph
    }

    fn process_recursive(&mut self, range: Range<usize>, skip: usize) -> Result<(), LexoError> {
        for tie in self.scan(range, skip)? {
            self.process_recursive(tie, skip + 1)?;
        }
        Ok(())
    }

    /// Visits ranges in the same depth-first order as [`Self::process_recursive`].
    fn process_with_stack(&mut self, range: Range<usize>) -> Result<(), LexoError> {
        let mut stack = vec![(range, 0usize)];
        while let Some((range, skip)) = stack.pop() {
            let ties = self.scan(range, skip)?;
            stack.extend(ties.into_iter().rev().map(|tie| (tie, skip + 1)));
        }
        Ok(())
    }

    /// Records the edges visible at position `skip` of `range` and returns its tie
    /// ranges, left to right.
    fn scan(&mut self, range: Range<usize>, skip: usize) -> Result<Vec<Range<usize>>, LexoError> {
        let words = self.words;
        let end = range.end;
        let mut ties = Vec::new();
        // words ending exactly here sort first; duplicates of them may follow
        let mut start = range.start;
        while start < end && words[start].len() == skip {
            start += 1;
        }
        if start == end {
            return Ok(ties);
        }

        let mut previous = symbol_at(words, start, skip)?;
        self.graph.ensure_node(previous);
        let mut run_start = start;
        for index in start + 1..end {
            let current = symbol_at(words, index, skip)?;
            if current == previous {
                continue;
            }
            if index - run_start > 1 {
                ties.push(run_start..index);
            }
            self.graph.ensure_node(current);
            self.graph.add_precedence(previous, current)?;
            previous = current;
            run_start = index;
        }
        if end - run_start > 1 {
            ties.push(run_start..end);
        }
        if !ties.is_empty() {
            trace!(depth = skip, ties = ties.len(), "tie ranges found");
        }
        Ok(ties)
    }
}

fn symbol_at<S: Symbol>(words: &[Vec<S>], index: usize, skip: usize) -> Result<&S, LexoError> {
    words[index].get(skip).ok_or_else(|| {
        LexoError::order(
            "prefix-after-extension",
            "word is a prefix of a word sorted before it",
        )
        .with_context("word_index", index)
        .with_context("depth", skip)
        .with_hint("a word must sort before every longer word it prefixes")
    })
}
