//! Trace extraction
//!
//! Raw doc text flows one way through this module:
//!
//! ```text
//! doc text -> lines (trimmed) -> BlockAccumulator -> blocks -> TraceMatcher (CategorySet) -> TraceRecord
//! ```
//!
//! [`TraceExtractor`] ties the pieces together and is the entry point for callers.

pub mod accumulator;
pub mod category;
pub mod extractor;
pub mod matcher;
pub mod record;

pub use accumulator::{blocks, is_block_start, BlockAccumulator, Blocks};
pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use extractor::{extract, TraceExtractor};
pub use matcher::{TraceError, TraceMatcher, DEFAULT_EPIC_PREFIX};
pub use record::{DocumentedFunction, FunctionTraces, TraceRecord};
