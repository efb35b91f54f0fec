//! Corpus loading and splitting
//!
//! Reads the lore text file and cuts it into the passages both indexes are
//! built from.

mod loader;
mod splitter;

pub use loader::{Corpus, CorpusLoader};
pub use splitter::RecursiveSplitter;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing the corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Could not read corpus {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus {0} contains no text")]
    Empty(PathBuf),

    #[error("chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})")]
    InvalidChunking {
        chunk_size: usize,
        chunk_overlap: usize,
    },
}
