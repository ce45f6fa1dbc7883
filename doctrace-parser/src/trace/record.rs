//! Data model shared by the engine, discovery and report rendering.

use serde::Serialize;

/// A single audit trace: category, ticket identifier and description.
///
/// Only [`TraceMatcher`](super::TraceMatcher) creates records, and they are never mutated
/// afterwards, so every record carries a category that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    category: String,
    epic: String,
    description: String,
}

impl TraceRecord {
    pub(crate) fn new(
        category: impl Into<String>,
        epic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            epic: epic.into(),
            description: description.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Ticket identifier, `<PREFIX>-<digits>`.
    pub fn epic(&self) -> &str {
        &self.epic
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A documented function as handed over by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentedFunction {
    pub name: String,
    pub package: String,
    pub file: String,
    /// 1-based line of the declaration.
    pub line: usize,
    /// Doc text with comment markers already stripped.
    pub doc: String,
}

/// A function together with the traces found in its doc text, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionTraces {
    pub function: DocumentedFunction,
    pub traces: Vec<TraceRecord>,
}
