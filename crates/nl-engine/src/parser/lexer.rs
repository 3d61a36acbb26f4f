//! Lowercasing, whitespace splitting, filler stripping.

use super::vocab::FILLER_WORDS;

/// Normalize a raw input line into tokens: lowercase, split on runs of
/// whitespace, drop filler words. An all-filler or empty line yields an
/// empty token list, which the parser turns into a null command.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split_whitespace()
        .filter(|token| !FILLER_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("TAKE Quarter"), vec!["take", "quarter"]);
        assert_eq!(tokenize("  look \t around  "), vec!["look", "around"]);
    }

    #[test]
    fn drops_fillers_but_keeps_prepositions() {
        assert_eq!(tokenize("look at the sign"), vec!["look", "sign"]);
        assert_eq!(
            tokenize("use the key on a door"),
            vec!["use", "key", "on", "door"]
        );
    }

    #[test]
    fn empty_and_all_filler_input_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("the an at").is_empty());
    }
}
