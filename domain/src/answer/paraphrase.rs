//! Paraphrase response parsing.
//!
//! Pure text handling for the single generation call that produces
//! alternate phrasings. No I/O happens here.

/// Parse a model's paraphrase output into at most `wanted` lines
///
/// Lines are trimmed, list decorations (`1.`, `2)`, `-`, `*`, `•`) are
/// stripped, and empty lines are dropped. Returns fewer than `wanted` items
/// when the model produced fewer usable lines.
pub fn parse_paraphrases(raw: &str, wanted: usize) -> Vec<String> {
    raw.lines()
        .map(|line| strip_list_marker(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .take(wanted)
        .map(str::to_string)
        .collect()
}

/// Build the full phrasing list, original first
pub fn paraphrase_set(original: &str, paraphrases: Vec<String>) -> Vec<String> {
    let mut set = Vec::with_capacity(paraphrases.len() + 1);
    set.push(original.to_string());
    set.extend(paraphrases);
    set
}

fn strip_list_marker(line: &str) -> &str {
    for bullet in ["-", "*", "•"] {
        if let Some(rest) = line.strip_prefix(bullet) {
            if rest.starts_with(char::is_whitespace) {
                return rest;
            }
        }
    }

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        for terminator in [".", ")"] {
            if let Some(rest) = rest.strip_prefix(terminator) {
                if rest.starts_with(char::is_whitespace) {
                    return rest;
                }
            }
        }
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_lines() {
        let raw = "Кто правит Севером?\n\n  Кто король Севера?  \nКому подчиняется Север?\n";
        let parsed = parse_paraphrases(raw, 3);
        assert_eq!(
            parsed,
            vec![
                "Кто правит Севером?",
                "Кто король Севера?",
                "Кому подчиняется Север?"
            ]
        );
    }

    #[test]
    fn test_parse_truncates_to_wanted() {
        let parsed = parse_paraphrases("a\nb\nc\nd", 2);
        assert_eq!(parsed, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_returns_fewer_when_short() {
        let parsed = parse_paraphrases("only one\n   \n", 5);
        assert_eq!(parsed, vec!["only one"]);
    }

    #[test]
    fn test_parse_strips_list_markers() {
        let raw = "1. Первый вариант\n2) Второй вариант\n- Третий\n• Четвёртый\n* Пятый";
        let parsed = parse_paraphrases(raw, 5);
        assert_eq!(
            parsed,
            vec!["Первый вариант", "Второй вариант", "Третий", "Четвёртый", "Пятый"]
        );
    }

    #[test]
    fn test_bare_markers_kept() {
        let parsed = parse_paraphrases("1.\n-\nreal line", 3);
        // "1." and "-" have no trailing whitespace, so they are kept as-is
        assert_eq!(parsed, vec!["1.", "-", "real line"]);
    }

    #[test]
    fn test_numbers_inside_text_untouched() {
        let parsed = parse_paraphrases("300 спартанцев?\n2024 год", 2);
        assert_eq!(parsed, vec!["300 спартанцев?", "2024 год"]);
    }

    #[test]
    fn test_paraphrase_set_original_first() {
        let set = paraphrase_set("orig", vec!["p1".to_string(), "p2".to_string()]);
        assert_eq!(set, vec!["orig", "p1", "p2"]);
    }
}
