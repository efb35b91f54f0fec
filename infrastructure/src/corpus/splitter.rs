//! Character-sized text splitter
//!
//! Wraps the `text-splitter` crate. Text is cut at the coarsest semantic
//! boundary that fits (line breaks, sentences, words, graphemes) and
//! neighbouring sections are merged into chunks of at most `chunk_size`
//! characters, with up to `chunk_overlap` characters repeated at the start of
//! the next chunk.

use super::CorpusError;
use text_splitter::{Characters, ChunkConfig, TextSplitter};

pub struct RecursiveSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    splitter: TextSplitter<Characters>,
}

impl RecursiveSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, CorpusError> {
        let invalid = || CorpusError::InvalidChunking {
            chunk_size,
            chunk_overlap,
        };
        if chunk_size == 0 {
            return Err(invalid());
        }

        let config = ChunkConfig::new(chunk_size)
            .with_overlap(chunk_overlap)
            .map_err(|_| invalid())?
            .with_trim(true);

        Ok(Self {
            chunk_size,
            chunk_overlap,
            splitter: TextSplitter::new(config),
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into trimmed, non-empty chunks in document order
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        self.splitter
            .chunks(text)
            .map(str::trim)
            .filter(|chunk| !chunk.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_overlap_not_below_size() {
        assert!(matches!(
            RecursiveSplitter::new(100, 100),
            Err(CorpusError::InvalidChunking {
                chunk_size: 100,
                chunk_overlap: 100
            })
        ));
        assert!(RecursiveSplitter::new(0, 0).is_err());
        assert!(RecursiveSplitter::new(500, 50).is_ok());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let splitter = RecursiveSplitter::new(500, 50).unwrap();
        assert_eq!(splitter.split("  Короткий текст.  "), vec!["Короткий текст."]);
        assert!(splitter.split("   \n\n  ").is_empty());
    }

    #[test]
    fn test_paragraphs_kept_whole_when_they_fit() {
        let splitter = RecursiveSplitter::new(30, 5).unwrap();
        let text = "Первый абзац текста.\n\nВторой абзац текста.";
        assert_eq!(
            splitter.split(text),
            vec!["Первый абзац текста.", "Второй абзац текста."]
        );
    }

    #[test]
    fn test_chunks_respect_size_in_chars() {
        let splitter = RecursiveSplitter::new(40, 10).unwrap();
        let text = "Рейстлин Маджере был магом ордена Чёрных Мантий и братом Карамона. "
            .repeat(12);

        let chunks = splitter.split(&text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 40, "chunk too long: {:?}", chunk);
        }
    }

    #[test]
    fn test_overlap_repeats_words() {
        let text = "aa bb cc dd ee ff gg hh ii jj kk ll mm nn";
        let words_in = |chunks: &[String]| {
            chunks
                .iter()
                .map(|c| c.split_whitespace().count())
                .sum::<usize>()
        };

        let plain = RecursiveSplitter::new(20, 0).unwrap().split(text);
        let overlapping = RecursiveSplitter::new(20, 8).unwrap().split(text);

        assert!(plain.len() > 1);
        assert_eq!(words_in(&plain), 14);
        assert!(words_in(&overlapping) > 14);
    }

    #[test]
    fn test_unbreakable_word_split_by_chars() {
        let splitter = RecursiveSplitter::new(10, 2).unwrap();
        let chunks = splitter.split(&"ж".repeat(25));
        assert!(chunks.len() >= 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
    }
}
