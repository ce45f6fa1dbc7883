//! # doctrace-parser
//!
//! Extracts audit trace records from the doc comments of test functions.
//!
//! A trace marker looks like a godoc note that points at a ticket:
//!
//! ```text
//! FEATURE(ABT-123): Create a payment with the downstream services and
//! verify the payment has been created correctly.
//! ```
//!
//! File Layout
//!
//! src/
//!   ├── trace        The comment block engine: categories, matcher, block accumulator, extractor
//!   └── discovery    Finds documented test functions in source files and hands their doc text over
//!
//! The engine never fails: a block that is not a valid trace is just prose. Only discovery
//! (reading files) and building a matcher from user supplied settings can return errors.

pub mod discovery;
pub mod trace;

pub use discovery::{DiscoveryError, FunctionSource, GoScanner, MemorySource, PathSource};
pub use trace::{
    extract, BlockAccumulator, CategorySet, DocumentedFunction, FunctionTraces, TraceError,
    TraceExtractor, TraceMatcher, TraceRecord,
};
