//! Startup assembly of the corpus and both indexes

use crate::config::FileCorpusConfig;
use crate::corpus::{CorpusError, CorpusLoader, RecursiveSplitter};
use crate::index::{DenseIndex, IndexError, SparseIndex};
use lorekeeper_application::Embedder;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum KnowledgeBaseError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Both indexes over one corpus, shared read-only across sessions
pub struct KnowledgeBase {
    pub dense: Arc<DenseIndex>,
    pub sparse: Arc<SparseIndex>,
}

impl KnowledgeBase {
    /// Load and split the corpus, then load or build the dense index and
    /// build the sparse one.
    pub async fn open<E: Embedder + ?Sized>(
        corpus: &FileCorpusConfig,
        embed_model: &str,
        embedder: &E,
        force_rebuild: bool,
    ) -> Result<Self, KnowledgeBaseError> {
        let splitter = RecursiveSplitter::new(corpus.chunk_size, corpus.chunk_overlap)?;
        let loaded = CorpusLoader::new(splitter).load(&corpus.path)?;

        let dense = DenseIndex::load_or_build(
            Path::new(&corpus.index_path),
            embed_model,
            &loaded.passages,
            embedder,
            corpus.embed_batch_size,
            force_rebuild,
        )
        .await?;

        let sparse = SparseIndex::build(loaded.passages);
        info!(
            "Knowledge base ready: {} passages, {} terms",
            sparse.len(),
            sparse.vocabulary_size()
        );

        Ok(Self {
            dense: Arc::new(dense),
            sparse: Arc::new(sparse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lorekeeper_application::EmbeddingError;

    struct LengthEmbedder;

    #[async_trait]
    impl Embedder for LengthEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
            Ok(texts
                .iter()
                .map(|t| vec![t.chars().count() as f32, 1.0])
                .collect())
        }
    }

    #[tokio::test]
    async fn test_open_builds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let corpus_path = dir.path().join("lore.txt");
        let index_path = dir.path().join("dense.json");
        std::fs::write(&corpus_path, "Первый абзац.\n\nВторой абзац.").unwrap();

        let config = FileCorpusConfig {
            path: corpus_path.to_string_lossy().into_owned(),
            chunk_size: 20,
            chunk_overlap: 2,
            index_path: index_path.to_string_lossy().into_owned(),
            embed_batch_size: 16,
        };

        let kb = KnowledgeBase::open(&config, "len", &LengthEmbedder, false)
            .await
            .unwrap();

        assert_eq!(kb.dense.len(), 2);
        assert_eq!(kb.sparse.len(), 2);
        assert!(index_path.exists());
    }

    #[tokio::test]
    async fn test_open_rejects_bad_chunking() {
        let config = FileCorpusConfig {
            chunk_size: 10,
            chunk_overlap: 10,
            ..Default::default()
        };
        let err = KnowledgeBase::open(&config, "len", &LengthEmbedder, false)
            .await
            .err()
            .unwrap();
        assert!(matches!(
            err,
            KnowledgeBaseError::Corpus(CorpusError::InvalidChunking { .. })
        ));
    }
}
