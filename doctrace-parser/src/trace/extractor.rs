//! Trace extraction over a full doc comment.

use super::accumulator::blocks;
use super::matcher::TraceMatcher;
use super::record::{DocumentedFunction, FunctionTraces, TraceRecord};

/// Runs doc text through the block accumulator and the matcher.
#[derive(Debug, Clone, Default)]
pub struct TraceExtractor {
    matcher: TraceMatcher,
}

impl TraceExtractor {
    pub fn new(matcher: TraceMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &TraceMatcher {
        &self.matcher
    }

    /// Every valid trace in `doc`, in the order the blocks appear. Never fails; text without
    /// valid traces yields an empty vector.
    pub fn extract(&self, doc: &str) -> Vec<TraceRecord> {
        extract_with(&self.matcher, doc)
    }

    /// Pair each function with its traces, dropping functions that have none.
    pub fn collect<I>(&self, functions: I) -> Vec<FunctionTraces>
    where
        I: IntoIterator<Item = DocumentedFunction>,
    {
        functions
            .into_iter()
            .filter_map(|function| {
                let traces = self.extract(&function.doc);
                if traces.is_empty() {
                    tracing::debug!(function = function.name.as_str(), "no traces found");
                    return None;
                }
                Some(FunctionTraces { function, traces })
            })
            .collect()
    }
}

/// Extract traces with the default `ABT` matcher.
pub fn extract(doc: &str) -> Vec<TraceRecord> {
    extract_with(TraceMatcher::default_matcher(), doc)
}

fn extract_with(matcher: &TraceMatcher, doc: &str) -> Vec<TraceRecord> {
    blocks(doc.lines().map(str::trim))
        .filter_map(|block| matcher.match_block(&block))
        .collect()
}
