//! Sparse (lexical) TF-IDF passage index
//!
//! Terms are lowercase runs of two or more word characters. Weights use a
//! smoothed idf, `ln((1 + n) / (1 + df)) + 1`, and every passage vector is
//! L2-normalized so the dot product with a query vector is cosine
//! similarity.

use async_trait::async_trait;
use lorekeeper_application::{RetrievalError, Retriever};
use lorekeeper_domain::Passage;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w\w+").expect("token pattern is valid"));

type SparseVector = Vec<(usize, f64)>;

/// In-memory TF-IDF index, rebuilt from the passages on every start
pub struct SparseIndex {
    passages: Vec<Passage>,
    vectors: Vec<SparseVector>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl SparseIndex {
    pub fn build(passages: Vec<Passage>) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();
        let mut term_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(passages.len());

        for passage in &passages {
            let mut counts: HashMap<usize, usize> = HashMap::new();
            for token in tokenize(&passage.content) {
                let next_id = vocabulary.len();
                let id = *vocabulary.entry(token).or_insert(next_id);
                if id == doc_freq.len() {
                    doc_freq.push(0);
                }
                *counts.entry(id).or_insert(0) += 1;
            }
            for id in counts.keys() {
                doc_freq[*id] += 1;
            }
            term_counts.push(counts);
        }

        let n = passages.len() as f64;
        let idf: Vec<f64> = doc_freq
            .iter()
            .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();

        let vectors = term_counts
            .iter()
            .map(|counts| {
                normalize(
                    counts
                        .iter()
                        .map(|(id, tf)| (*id, *tf as f64 * idf[*id]))
                        .collect(),
                )
            })
            .collect();

        Self {
            passages,
            vectors,
            vocabulary,
            idf,
        }
    }

    pub fn len(&self) -> usize {
        self.passages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Up to `k` passages sharing at least one term with `query`, best first.
    ///
    /// Ties keep corpus order.
    pub fn search(&self, query: &str, k: usize) -> Vec<Passage> {
        let query_vector = self.vectorize(query);
        if query_vector.is_empty() {
            return Vec::new();
        }
        let query_weights: HashMap<usize, f64> = query_vector.into_iter().collect();

        let mut scored: Vec<(f64, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .filter_map(|(i, vector)| {
                let score: f64 = vector
                    .iter()
                    .filter_map(|(id, w)| query_weights.get(id).map(|q| q * w))
                    .sum();
                (score > 0.0).then_some((score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(k)
            .map(|(_, i)| self.passages[i].clone())
            .collect()
    }

    /// Query terms unknown to the corpus carry no weight
    fn vectorize(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(text) {
            if let Some(id) = self.vocabulary.get(&token) {
                *counts.entry(*id).or_insert(0) += 1;
            }
        }
        normalize(
            counts
                .into_iter()
                .map(|(id, tf)| (id, tf as f64 * self.idf[id]))
                .collect(),
        )
    }
}

#[async_trait]
impl Retriever for SparseIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<Passage>, RetrievalError> {
        Ok(SparseIndex::search(self, query, k))
    }

    fn name(&self) -> &str {
        "sparse"
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    TOKEN.find_iter(text).map(|m| m.as_str().to_lowercase())
}

fn normalize(mut vector: SparseVector) -> SparseVector {
    let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut vector {
            *w /= norm;
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> SparseIndex {
        SparseIndex::build(vec![
            Passage::new(0, "Танис Полуэльф вёл отряд через лес."),
            Passage::new(1, "Рейстлин изучал магию в Башне Высшего Волшебства."),
            Passage::new(2, "В лесу жили эльфы, и Танис знал их язык."),
            Passage::new(3, "Карамон охранял брата Рейстлина."),
        ])
    }

    #[test]
    fn test_lexical_match_ranks_first() {
        let hits = index().search("Где изучал магию Рейстлин?", 5);
        assert_eq!(hits[0].position, 1);
    }

    #[test]
    fn test_no_shared_terms_no_results() {
        assert!(index().search("драконы Кринна", 5).is_empty());
        assert!(index().search("?!", 5).is_empty());
    }

    #[test]
    fn test_k_limits_and_case_insensitive() {
        let hits = index().search("ТАНИС", 1);
        assert_eq!(hits.len(), 1);
        assert!(hits[0].content.contains("Танис"));
    }

    #[test]
    fn test_rare_term_outweighs_common_term() {
        // "танис" is in two passages, "отряд" only in one
        let hits = index().search("танис отряд", 5);
        assert_eq!(hits[0].position, 0);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_single_letter_words_ignored() {
        let index = index();
        assert!(index.search("в и", 5).is_empty());
        assert!(index.vocabulary_size() > 0);
    }

    #[tokio::test]
    async fn test_retriever_impl() {
        let index = index();
        let hits = Retriever::search(&index, "Карамон", 3).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(Retriever::name(&index), "sparse");
    }

    #[test]
    fn test_empty_index() {
        let index = SparseIndex::build(vec![]);
        assert!(index.is_empty());
        assert!(index.search("что угодно", 3).is_empty());
    }
}
