//! Dense (semantic) passage index

use super::IndexError;
use async_trait::async_trait;
use lorekeeper_application::{Embedder, EmbeddingError, RetrievalError, Retriever};
use lorekeeper_domain::Passage;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    passage: Passage,
    vector: Vec<f32>,
}

/// In-memory cosine-similarity index over passage embeddings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseIndex {
    version: u32,
    /// Embedding model the vectors came from
    model: String,
    dimensions: usize,
    entries: Vec<Entry>,
}

impl DenseIndex {
    /// Build from precomputed vectors, one per passage
    pub fn from_vectors(
        model: impl Into<String>,
        passages: Vec<Passage>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self, IndexError> {
        let dimensions = vectors.first().map(Vec::len).ok_or(IndexError::NoPassages)?;
        if passages.len() != vectors.len() {
            return Err(IndexError::Embedding(EmbeddingError::CountMismatch {
                expected: passages.len(),
                got: vectors.len(),
            }));
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != dimensions) {
            return Err(IndexError::DimensionMismatch {
                expected: dimensions,
                got: bad.len(),
            });
        }

        Ok(Self {
            version: FORMAT_VERSION,
            model: model.into(),
            dimensions,
            entries: passages
                .into_iter()
                .zip(vectors)
                .map(|(passage, vector)| Entry { passage, vector })
                .collect(),
        })
    }

    /// Embed `passages` in batches of `batch_size` and index them
    pub async fn build<E: Embedder + ?Sized>(
        model: impl Into<String>,
        passages: Vec<Passage>,
        embedder: &E,
        batch_size: usize,
    ) -> Result<Self, IndexError> {
        if passages.is_empty() {
            return Err(IndexError::NoPassages);
        }

        let batch_size = batch_size.max(1);
        let batches = passages.len().div_ceil(batch_size);
        let mut vectors = Vec::with_capacity(passages.len());

        for (i, batch) in passages.chunks(batch_size).enumerate() {
            debug!("Embedding batch {}/{}", i + 1, batches);
            let texts: Vec<String> = batch.iter().map(|p| p.content.clone()).collect();
            let embedded = embedder.embed(&texts).await?;
            if embedded.len() != texts.len() {
                return Err(EmbeddingError::CountMismatch {
                    expected: texts.len(),
                    got: embedded.len(),
                }
                .into());
            }
            vectors.extend(embedded);
        }

        Self::from_vectors(model, passages, vectors)
    }

    /// Load a saved index, or build and save a fresh one.
    ///
    /// A saved index is reused only when it was built from exactly these
    /// passages with the same model; anything else triggers a rebuild.
    pub async fn load_or_build<E: Embedder + ?Sized>(
        path: &Path,
        model: &str,
        passages: &[Passage],
        embedder: &E,
        batch_size: usize,
        force_rebuild: bool,
    ) -> Result<Self, IndexError> {
        if !force_rebuild && path.exists() {
            match Self::load(path) {
                Ok(index) if index.matches(model, passages) => {
                    info!("Loaded dense index from {}", path.display());
                    return Ok(index);
                }
                Ok(_) => warn!("Dense index at {} is stale, rebuilding", path.display()),
                Err(e) => warn!("Could not load dense index, rebuilding: {}", e),
            }
        }

        info!("Building dense index over {} passages", passages.len());
        let index = Self::build(model, passages.to_vec(), embedder, batch_size).await?;
        index.save(path)?;
        info!("Saved dense index to {}", path.display());
        Ok(index)
    }

    pub fn save(&self, path: &Path) -> Result<(), IndexError> {
        let io_err = |source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        // Write beside the target, then rename over it
        let tmp = path.with_extension("json.tmp");
        let file = File::create(&tmp).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|source| IndexError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(io_err)?;
        std::fs::rename(&tmp, path).map_err(io_err)
    }

    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let file = File::open(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| IndexError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    fn matches(&self, model: &str, passages: &[Passage]) -> bool {
        self.version == FORMAT_VERSION
            && self.model == model
            && self.entries.len() == passages.len()
            && self
                .entries
                .iter()
                .zip(passages)
                .all(|(entry, passage)| entry.passage == *passage)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The `k` passages most similar to `query`, best first.
    ///
    /// `fetch_k` only bounds the candidate pool (never below `k`). Ranking is
    /// plain cosine similarity, so the result is the same top `k` for any
    /// `fetch_k`. Ties keep corpus order.
    pub fn search(&self, query: &[f32], k: usize, fetch_k: usize) -> Vec<Passage> {
        let mut scored: Vec<(f64, &Passage)> = self
            .entries
            .iter()
            .map(|e| (cosine_similarity(query, &e.vector), &e.passage))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(fetch_k.max(k));

        scored
            .into_iter()
            .take(k)
            .map(|(_, passage)| passage.clone())
            .collect()
    }
}

/// Cosine similarity; 0 for empty, mismatched or zero-magnitude vectors
fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        dot / denom
    }
}

/// Semantic retriever: embeds the query, then searches the dense index
pub struct DenseRetriever<E: Embedder> {
    index: Arc<DenseIndex>,
    embedder: Arc<E>,
    fetch_k: usize,
}

impl<E: Embedder> DenseRetriever<E> {
    pub fn new(index: Arc<DenseIndex>, embedder: Arc<E>, fetch_k: usize) -> Self {
        Self {
            index,
            embedder,
            fetch_k,
        }
    }
}

#[async_trait]
impl<E: Embedder> Retriever for DenseRetriever<E> {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Passage>, RetrievalError> {
        let vector = self
            .embedder
            .embed_query(query)
            .await
            .map_err(|e| RetrievalError::Embedding(e.to_string()))?;

        if vector.len() != self.index.dimensions() {
            return Err(RetrievalError::IndexUnavailable(format!(
                "query has {} dimensions, index has {}",
                vector.len(),
                self.index.dimensions()
            )));
        }

        Ok(self.index.search(&vector, k, self.fetch_k))
    }

    fn name(&self) -> &str {
        "dense"
    }
}
