//! Phrase lists used by the confidence scorer
//!
//! The corpus and the answers are Russian, so [`Lexicon::russian`] is the
//! default. All phrases are lowercase and matched as substrings of the
//! lowercased answer.

/// Language-specific cue phrases and the proper-name pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    /// Reasoning / summary cues that earn the structural bonus
    pub discourse_markers: &'static [&'static str],
    /// Uncertainty markers, each one found multiplies the score by 0.7
    pub hedging_phrases: &'static [&'static str],
    /// Explicit admissions of not knowing, each one found multiplies by 0.2
    pub ignorance_phrases: &'static [&'static str],
    /// Regex for a capitalized two-word proper name
    pub proper_name_pattern: &'static str,
}

const RU_DISCOURSE_MARKERS: &[&str] = &[
    "во-первых",
    "первое",
    "поскольку",
    "так как",
    "потому что",
    "суммируя",
    "подводя итог",
    "в итоге",
];

const RU_HEDGING_PHRASES: &[&str] = &[
    "возможно",
    "вероятно",
    "предположительно",
    "может быть",
    "вроде",
    "вроде бы",
    "вроде как",
    "кажется",
    "кажись",
    "будто",
    "как будто",
    "наверно",
    "наверное",
    "видимо",
    "по-видимому",
    "похоже",
    "должно быть",
    "трудно сказать",
    "сложно утверждать",
    "я не уверен",
    "это спорный вопрос",
    "нельзя сказать точно",
    "под вопросом",
    "требует уточнения",
    "нет точных данных",
    "недостаточно информации",
    "не могу точно сказать",
];

const RU_IGNORANCE_PHRASES: &[&str] = &[
    "не знаю",
    "не указан",
    "не могу сказать",
    "точно не известно",
    "нет информации",
    "нет данных",
    "не совсем ясно",
    "затрудняюсь ответить",
    "информация отсутствует",
    "не располагаю информацией",
];

const EN_DISCOURSE_MARKERS: &[&str] = &[
    "first",
    "firstly",
    "because",
    "since",
    "therefore",
    "in summary",
    "to summarize",
    "in conclusion",
    "as a result",
];

const EN_HEDGING_PHRASES: &[&str] = &[
    "maybe",
    "perhaps",
    "probably",
    "possibly",
    "presumably",
    "approximately",
    "it seems",
    "apparently",
    "likely",
    "might be",
    "i'm not sure",
    "i am not sure",
    "hard to say",
    "not entirely certain",
    "requires clarification",
    "not enough information",
];

const EN_IGNORANCE_PHRASES: &[&str] = &[
    "i don't know",
    "i do not know",
    "not specified",
    "cannot say",
    "can't say",
    "no information",
    "no data",
    "not known",
    "information is missing",
    "unable to answer",
];

impl Lexicon {
    pub fn russian() -> Self {
        Self {
            discourse_markers: RU_DISCOURSE_MARKERS,
            hedging_phrases: RU_HEDGING_PHRASES,
            ignorance_phrases: RU_IGNORANCE_PHRASES,
            proper_name_pattern: r"[А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+",
        }
    }

    pub fn english() -> Self {
        Self {
            discourse_markers: EN_DISCOURSE_MARKERS,
            hedging_phrases: EN_HEDGING_PHRASES,
            ignorance_phrases: EN_IGNORANCE_PHRASES,
            proper_name_pattern: r"[A-Z][a-z]+\s+[A-Z][a-z]+",
        }
    }

    /// Look a lexicon up by language code ("ru", "en")
    pub fn for_language(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "ru" | "russian" => Some(Self::russian()),
            "en" | "english" => Some(Self::english()),
            _ => None,
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::russian()
    }
}
