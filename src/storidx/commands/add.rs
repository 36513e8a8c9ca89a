use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Scope, Story, StoryId};
use crate::store::DataStore;
use crate::tokenizer::{normalize, tokenize};

/// Creates a new story. The next id is the current story count, which keeps
/// ids dense and zero-based; title/text emptiness is the caller's problem.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    title: String,
    text: String,
    strip_accents: bool,
) -> Result<CmdResult> {
    let id = StoryId::new(store.list_stories(scope)?.len() as u32);
    let (tokens, total) = tokenize(&normalize(&text, strip_accents), id);
    let story = Story::new(id, &title, tokens);
    store.save_story(&story, scope)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Story added (id {}, {} tokens): {}",
        id, total, story.name
    )));
    result.affected_stories.push(story);
    Ok(result)
}
