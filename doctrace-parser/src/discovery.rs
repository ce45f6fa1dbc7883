//! Function Discovery
//!
//! Finds documented test functions and hands their doc text to the trace engine. The engine
//! itself does no filtering; deciding what counts as a test function happens here.
//!
//! Sources implement [`FunctionSource`]. Two are provided:
//! - [`MemorySource`] for source text already in memory
//! - [`PathSource`] for a directory of test files on disk

pub mod go;
pub mod sources;

use crate::trace::DocumentedFunction;
use std::path::PathBuf;
use thiserror::Error;

pub use go::GoScanner;
pub use sources::{MemorySource, PathSource};

/// Failures while reading or scanning source files. These stop the whole run.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error walking {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("{path}: no package clause found")]
    MissingPackage { path: PathBuf },
}

/// Anything that can list documented functions.
pub trait FunctionSource {
    fn functions(&self) -> Result<Vec<DocumentedFunction>, DiscoveryError>;
}
