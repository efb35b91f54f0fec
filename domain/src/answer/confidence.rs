//! Confidence scoring for candidate answers
//!
//! The score is a cheap proxy for "specific, grounded in the sources, and
//! stated without hedging". It does not check facts and is only meaningful
//! for ranking candidates for the same question against each other.
//!
//! # Algorithm
//!
//! Applied strictly in this order; the multiplicative steps act on the sum
//! of the additive ones.
//!
//! | Step | Term |
//! |------|------|
//! | 1 | `words * 0.05` |
//! | 2 | mean word-set overlap with each source `* 3.0` |
//! | 3 | `+1` per regex match: integers, `H:MM`, `D Month YYYY`, two-word names |
//! | 4 | `+2` any discourse marker, `+1` colon, `+1` two or more periods |
//! | 5 | `* 0.8` if fewer than 8 or more than 100 words |
//! | 6 | `* 0.7` per distinct hedging phrase present |
//! | 7 | `* 0.2` per distinct ignorance phrase present |

use super::lexicon::Lexicon;
use crate::core::passage::Passage;
use crate::core::string::words;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const WORD_WEIGHT: f64 = 0.05;
const OVERLAP_WEIGHT: f64 = 3.0;
const DISCOURSE_BONUS: f64 = 2.0;
const COLON_BONUS: f64 = 1.0;
const PERIOD_BONUS: f64 = 1.0;
const MIN_WORDS: usize = 8;
const MAX_WORDS: usize = 100;
const LENGTH_PENALTY: f64 = 0.8;
const HEDGE_PENALTY: f64 = 0.7;
const IGNORANCE_PENALTY: f64 = 0.2;

const INTEGER_PATTERN: &str = r"\d+";
const TIME_PATTERN: &str = r"\d{1,2}:\d{2}";
const DATE_PATTERN: &str = r"\d{1,2}\s+\w+\s+\d{4}";

/// Every intermediate term of one scoring run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub word_count: usize,
    pub length_base: f64,
    pub overlap_bonus: f64,
    pub fact_count: usize,
    pub structure_bonus: f64,
    pub length_penalized: bool,
    pub hedges: Vec<String>,
    pub ignorance: Vec<String>,
    pub total: f64,
}

/// Stateless scorer; holds only its lexicon and compiled patterns
#[derive(Debug, Clone)]
pub struct ConfidenceScorer {
    lexicon: Lexicon,
    fact_patterns: Vec<Regex>,
}

impl ConfidenceScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        let fact_patterns = [
            INTEGER_PATTERN,
            TIME_PATTERN,
            DATE_PATTERN,
            lexicon.proper_name_pattern,
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("fact pattern is a valid regex"))
        .collect();

        Self {
            lexicon,
            fact_patterns,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Confidence of `answer` given the passages it was generated from
    pub fn score(&self, answer: &str, sources: &[Passage]) -> f64 {
        self.breakdown(answer, sources).total
    }

    /// Score with all intermediate terms exposed
    pub fn breakdown(&self, answer: &str, sources: &[Passage]) -> ScoreBreakdown {
        let answer_lower = answer.to_lowercase();
        let word_count = words(answer).count();

        let length_base = word_count as f64 * WORD_WEIGHT;
        let overlap_bonus = source_overlap(&answer_lower, sources) * OVERLAP_WEIGHT;
        let fact_count = self.count_facts(answer);
        let structure_bonus = self.structure_bonus(answer, &answer_lower);

        let mut score = length_base + overlap_bonus + fact_count as f64 + structure_bonus;

        let length_penalized = !(MIN_WORDS..=MAX_WORDS).contains(&word_count);
        if length_penalized {
            score *= LENGTH_PENALTY;
        }

        let hedges = matched_phrases(&answer_lower, self.lexicon.hedging_phrases);
        for _ in &hedges {
            score *= HEDGE_PENALTY;
        }

        let ignorance = matched_phrases(&answer_lower, self.lexicon.ignorance_phrases);
        for _ in &ignorance {
            score *= IGNORANCE_PENALTY;
        }

        ScoreBreakdown {
            word_count,
            length_base,
            overlap_bonus,
            fact_count,
            structure_bonus,
            length_penalized,
            hedges,
            ignorance,
            total: score,
        }
    }

    fn count_facts(&self, answer: &str) -> usize {
        self.fact_patterns
            .iter()
            .map(|pattern| pattern.find_iter(answer).count())
            .sum()
    }

    fn structure_bonus(&self, answer: &str, answer_lower: &str) -> f64 {
        let mut bonus = 0.0;
        if self
            .lexicon
            .discourse_markers
            .iter()
            .any(|marker| answer_lower.contains(marker))
        {
            bonus += DISCOURSE_BONUS;
        }
        if answer.contains(':') {
            bonus += COLON_BONUS;
        }
        // More than two segments when split on '.', i.e. at least two periods
        if answer.split('.').count() > 2 {
            bonus += PERIOD_BONUS;
        }
        bonus
    }
}

impl Default for ConfidenceScorer {
    fn default() -> Self {
        Self::new(Lexicon::default())
    }
}

/// Mean fraction of the answer's distinct words found in each source
fn source_overlap(answer_lower: &str, sources: &[Passage]) -> f64 {
    if sources.is_empty() {
        return 0.0;
    }

    let answer_words: HashSet<&str> = words(answer_lower).collect();
    let mut total = 0.0;

    for source in sources {
        if answer_words.is_empty() {
            continue;
        }
        let source_lower = source.content.to_lowercase();
        let source_words: HashSet<&str> = words(&source_lower).collect();
        let overlap = answer_words.intersection(&source_words).count();
        total += overlap as f64 / answer_words.len() as f64;
    }

    total / sources.len() as f64
}

fn matched_phrases(answer_lower: &str, phrases: &[&str]) -> Vec<String> {
    phrases
        .iter()
        .filter(|phrase| answer_lower.contains(*phrase))
        .map(|phrase| phrase.to_string())
        .collect()
}
