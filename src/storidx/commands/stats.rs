use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;
use std::collections::HashMap;

const MOST_COMMON_LIMIT: usize = 10;

/// Aggregate numbers over the whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStats {
    pub stories: usize,
    pub total_tokens: usize,
    pub unique_tokens: usize,
    pub unique_ratio: f64,
    /// Up to ten (token, occurrences) pairs, most frequent first
    pub most_common: Vec<(String, usize)>,
}

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let stories = store.list_stories(scope)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total_tokens = 0usize;
    for story in &stories {
        for token in story.tokens.values() {
            *counts.entry(token.as_str()).or_insert(0) += 1;
            total_tokens += 1;
        }
    }

    let unique_tokens = counts.len();
    let unique_ratio = if total_tokens > 0 {
        unique_tokens as f64 / total_tokens as f64
    } else {
        0.0
    };

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // Ties broken alphabetically so the ranking is deterministic
    ranked.sort_by(|(tok_a, n_a), (tok_b, n_b)| n_b.cmp(n_a).then(tok_a.cmp(tok_b)));
    let most_common = ranked
        .into_iter()
        .take(MOST_COMMON_LIMIT)
        .map(|(tok, n)| (tok.to_string(), n))
        .collect();

    Ok(CmdResult::default().with_stats(CollectionStats {
        stories: stories.len(),
        total_tokens,
        unique_tokens,
        unique_ratio,
        most_common,
    }))
}
