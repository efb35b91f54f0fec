//! String utilities for the domain layer.

/// Take at most `max_chars` characters of `s`
///
/// Counts characters, not bytes, so Cyrillic text previews at the
/// same visual length as ASCII.
pub fn preview(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Split on whitespace the way the scorer counts words
pub fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_ascii() {
        assert_eq!(preview("hello world", 5), "hello");
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn test_preview_cyrillic_counts_chars() {
        // Each Cyrillic letter is 2 bytes
        assert_eq!(preview("Винтерфелл", 4), "Винт");
        assert_eq!(preview("Винтерфелл", 100), "Винтерфелл");
    }

    #[test]
    fn test_words_split_on_any_whitespace() {
        let count = words("Дейенерис  Таргариен\nправит\tМиэрином").count();
        assert_eq!(count, 4);
    }
}
