//! Text normalization and positional tokenization.
//!
//! `normalize` cleans raw input down to a single line of space-separated
//! words; `tokenize` assigns each token the composite key
//! `"{story_id},{position}"` with positions counted from 1 in source order.

use crate::model::{PositionKey, StoryId, TokenMap};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Word runs, or a lone mark from the narrow punctuation class. Normalization
// blanks punctuation before this runs, so in practice only word tokens come
// out; the mark branch is kept for callers feeding unnormalized text.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\w+|[.,!?"-]"#).unwrap());

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[.,!?;:\-"']"#).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Cleans raw text: drops ASCII control characters (newline, carriage
/// return and tab survive long enough to count as whitespace), blanks
/// punctuation, collapses whitespace runs to single spaces, optionally
/// folds accented characters to their bare equivalents, and trims.
pub fn normalize(text: &str, strip_accents: bool) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_ascii_control() || matches!(c, '\n' | '\r' | '\t'))
        .collect();
    let spaced = PUNCTUATION.replace_all(&cleaned, " ");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    let folded = if strip_accents {
        collapsed.nfd().filter(|c| !is_combining_mark(*c)).collect()
    } else {
        collapsed.into_owned()
    };
    folded.trim().to_string()
}

/// Splits normalized text into tokens and keys each one by its 1-based
/// position. Empty text yields an empty map; there are no error cases.
pub fn tokenize(text: &str, story: StoryId) -> (TokenMap, usize) {
    let mut tokens = TokenMap::new();
    for (i, found) in TOKEN.find_iter(text).enumerate() {
        tokens.insert(
            PositionKey::new(story, i as u32 + 1),
            found.as_str().to_string(),
        );
    }
    let total = tokens.len();
    (tokens, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(map: &TokenMap) -> Vec<String> {
        map.keys().map(|k| k.to_string()).collect()
    }

    fn values(map: &TokenMap) -> Vec<&str> {
        map.values().map(|v| v.as_str()).collect()
    }

    #[test]
    fn normalize_blanks_punctuation_and_collapses_whitespace() {
        let text = "Era  uma vez,\num reino.";
        assert_eq!(normalize(text, false), "Era uma vez um reino");
    }

    #[test]
    fn normalize_strips_control_characters() {
        let text = "Era\u{0} uma\u{7} vez\tum\nreino";
        assert_eq!(normalize(text, false), "Era uma vez um reino");
    }

    #[test]
    fn normalize_folds_accents_when_asked() {
        assert_eq!(normalize("Árvore dos céus", true), "Arvore dos ceus");
        assert_eq!(normalize("Árvore dos céus", false), "Árvore dos céus");
    }

    #[test]
    fn normalize_handles_quotes_and_dashes() {
        assert_eq!(
            normalize("\"bem-vindo\" disse: 'entre'", false),
            "bem vindo disse entre"
        );
    }

    #[test]
    fn normalize_empty_input() {
        assert_eq!(normalize("", true), "");
        assert_eq!(normalize("  \n\t ", true), "");
    }

    #[test]
    fn tokenize_assigns_dense_one_based_keys() {
        let text = normalize("Era uma vez um reino.", true);
        let (tokens, total) = tokenize(&text, StoryId::new(0));

        assert_eq!(total, 5);
        assert_eq!(keys(&tokens), vec!["0,1", "0,2", "0,3", "0,4", "0,5"]);
        assert_eq!(values(&tokens), vec!["Era", "uma", "vez", "um", "reino"]);
    }

    #[test]
    fn tokenize_empty_text_yields_empty_map() {
        let (tokens, total) = tokenize("", StoryId::new(3));
        assert!(tokens.is_empty());
        assert_eq!(total, 0);
    }

    #[test]
    fn tokenize_uses_the_given_story_id_as_prefix() {
        let (tokens, _) = tokenize("uma palavra", StoryId::new(12));
        assert_eq!(keys(&tokens), vec!["12,1", "12,2"]);
    }

    #[test]
    fn tokenize_keeps_unnormalized_marks_as_single_tokens() {
        // Callers are expected to normalize first; raw punctuation from the
        // narrow class still comes out one mark per token.
        let (tokens, total) = tokenize("fim.", StoryId::new(0));
        assert_eq!(total, 2);
        assert_eq!(values(&tokens), vec!["fim", "."]);
    }

    #[test]
    fn keys_survive_double_digit_positions_in_order() {
        let text = normalize(
            "um dois tres quatro cinco seis sete oito nove dez onze doze",
            true,
        );
        let (tokens, total) = tokenize(&text, StoryId::new(0));
        assert_eq!(total, 12);
        let ordered: Vec<String> = keys(&tokens);
        assert_eq!(ordered[9], "0,10");
        assert_eq!(ordered[11], "0,12");
    }
}
