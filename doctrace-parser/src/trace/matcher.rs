//! Trace marker matching
//!
//! A block is a trace when the whole of it has the shape
//!
//! ```text
//! <CATEGORY>(<PREFIX>-<DIGITS>)[:][ ]<description...>
//! ```
//!
//! and its category is recognized. The colon and the space are independently optional, so
//! `BUG(ABT-1): x`, `BUG(ABT-1):x`, `BUG(ABT-1) x` and `BUG(ABT-1)x` all describe `x`.

use super::category::CategorySet;
use super::record::TraceRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Ticket project key used when nothing else is configured.
pub const DEFAULT_EPIC_PREFIX: &str = "ABT";

static DEFAULT_MATCHER: Lazy<TraceMatcher> = Lazy::new(|| {
    TraceMatcher::new(DEFAULT_EPIC_PREFIX, CategorySet::default())
        .expect("default epic prefix is valid")
});

/// Errors raised while building a matcher from user supplied settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("invalid epic prefix {0:?}: must be non-empty and contain no whitespace or parentheses")]
    InvalidPrefix(String),

    #[error("invalid category {0:?}: categories are made of A-Z and _ only")]
    InvalidCategory(String),
}

/// Applies the trace pattern to a single normalized block.
#[derive(Debug, Clone)]
pub struct TraceMatcher {
    prefix: String,
    categories: CategorySet,
    pattern: Regex,
}

impl TraceMatcher {
    /// Compile a matcher for ticket identifiers of the form `<prefix>-<digits>`.
    pub fn new(prefix: &str, categories: CategorySet) -> Result<Self, TraceError> {
        if prefix.is_empty()
            || prefix
                .chars()
                .any(|c| c.is_whitespace() || c == '(' || c == ')')
        {
            return Err(TraceError::InvalidPrefix(prefix.to_string()));
        }

        let unmatchable = |category: &&str| {
            category.is_empty()
                || !category
                    .chars()
                    .all(|c| c.is_ascii_uppercase() || c == '_')
        };
        if let Some(category) = categories.iter().find(unmatchable) {
            return Err(TraceError::InvalidCategory(category.to_string()));
        }

        let source = format!(r"^([A-Z_]+)\(({}-[0-9]+)\):? ?(.*)$", regex::escape(prefix));
        let pattern = Regex::new(&source).map_err(|_| TraceError::InvalidPrefix(prefix.to_string()))?;

        Ok(Self {
            prefix: prefix.to_string(),
            categories,
            pattern,
        })
    }

    /// The shared matcher for the `ABT` prefix and the default categories.
    pub fn default_matcher() -> &'static TraceMatcher {
        &DEFAULT_MATCHER
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Extract a record from `block`, or `None` when it is not a recognized trace.
    pub fn match_block(&self, block: &str) -> Option<TraceRecord> {
        let Some(captures) = self.pattern.captures(block) else {
            tracing::debug!(block, "block does not match the trace marker shape");
            return None;
        };

        let category = &captures[1];
        if !self.categories.is_valid(category) {
            tracing::debug!(category, "ignoring marker with unrecognized category");
            return None;
        }

        Some(TraceRecord::new(category, &captures[2], &captures[3]))
    }
}

impl Default for TraceMatcher {
    fn default() -> Self {
        DEFAULT_MATCHER.clone()
    }
}
