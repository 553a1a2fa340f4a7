use std::collections::HashSet;

/// Extracts the distinct words of `text`, lower-cased, in order of first
/// appearance.
///
/// Words are separated by runs of whitespace; empty tokens never appear.
///
/// # Example
///
/// ```rust
/// use utilkit_core::unique_words;
///
/// assert_eq!(unique_words("a B b  A c"), vec!["a", "b", "c"]);
/// ```
pub fn unique_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut seen = HashSet::new();

    lowered
        .split_whitespace()
        .filter(|word| seen.insert(*word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_duplicates_preserving_order() {
        let text = "olá olá mundo mundo javascript é incrível javascript";
        assert_eq!(
            unique_words(text),
            vec!["olá", "mundo", "javascript", "é", "incrível"]
        );
    }

    #[test]
    fn test_case_is_folded() {
        assert_eq!(unique_words("Rust RUST rust Ölfass ölfass"), vec!["rust", "ölfass"]);
    }

    #[test]
    fn test_whitespace_runs_and_edges() {
        assert_eq!(unique_words("  one\t\ttwo\n one   "), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(unique_words("").is_empty());
        assert!(unique_words(" \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_is_part_of_the_word() {
        assert_eq!(unique_words("hi hi! hi"), vec!["hi", "hi!"]);
    }
}
