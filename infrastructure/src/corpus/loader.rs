//! Corpus file loader

use super::{CorpusError, RecursiveSplitter};
use lorekeeper_domain::Passage;
use std::path::{Path, PathBuf};
use tracing::info;

/// The passages of one corpus file, in document order
#[derive(Debug, Clone)]
pub struct Corpus {
    pub source: PathBuf,
    pub passages: Vec<Passage>,
}

impl Corpus {
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }
}

pub struct CorpusLoader {
    splitter: RecursiveSplitter,
}

impl CorpusLoader {
    pub fn new(splitter: RecursiveSplitter) -> Self {
        Self { splitter }
    }

    /// Read a UTF-8 file and split it into numbered passages
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Corpus, CorpusError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let passages = self.split_text(&text);
        if passages.is_empty() {
            return Err(CorpusError::Empty(path.to_path_buf()));
        }

        info!(
            "Loaded {} passages from {} ({} chars per chunk, {} overlap)",
            passages.len(),
            path.display(),
            self.splitter.chunk_size(),
            self.splitter.chunk_overlap()
        );

        Ok(Corpus {
            source: path.to_path_buf(),
            passages,
        })
    }

    /// Split already-loaded text; positions start at 0
    pub fn split_text(&self, text: &str) -> Vec<Passage> {
        self.splitter
            .split(text)
            .into_iter()
            .enumerate()
            .map(|(position, content)| Passage::new(position, content))
            .collect()
    }
}
