use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Scope, Story, StoryId};
use crate::store::DataStore;
use crate::tokenizer::{normalize, tokenize};

/// Replaces a story's title and text under its existing id. The new text is
/// re-tokenized from scratch, so positions come out dense again regardless
/// of what was stored before.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    id: StoryId,
    new_title: String,
    new_text: String,
    strip_accents: bool,
) -> Result<CmdResult> {
    // Fails with StoryNotFound before anything is touched
    store.get_story(id, scope)?;

    let (tokens, total) = tokenize(&normalize(&new_text, strip_accents), id);
    let story = Story::new(id, &new_title, tokens);
    store.save_story(&story, scope)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Story updated (id {}, {} tokens): {}",
        id, total, story.name
    )));
    result.affected_stories.push(story);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::StoridxError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn keeps_the_original_id() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Scope::Project, "A".into(), "um".into(), true).unwrap();
        add::run(&mut store, Scope::Project, "B".into(), "dois".into(), true).unwrap();

        let result = run(
            &mut store,
            Scope::Project,
            StoryId::new(1),
            "B revista".into(),
            "texto novo e maior".into(),
            true,
        )
        .unwrap();

        let story = &result.affected_stories[0];
        assert_eq!(story.id, StoryId::new(1));
        assert_eq!(story.name, "B revista");
    }

    #[test]
    fn token_count_reflects_only_the_new_text() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Scope::Project,
            "Longa".into(),
            "um dois tres quatro cinco".into(),
            true,
        )
        .unwrap();

        run(
            &mut store,
            Scope::Project,
            StoryId::new(0),
            "Curta".into(),
            "apenas duas".into(),
            true,
        )
        .unwrap();

        let story = store.get_story(StoryId::new(0), Scope::Project).unwrap();
        assert_eq!(story.token_count, 2);
        let keys: Vec<String> = story.tokens.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["0,1", "0,2"]);
    }

    #[test]
    fn unknown_id_fails_without_side_effects() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Scope::Project, "A".into(), "um".into(), true).unwrap();

        let result = run(
            &mut store,
            Scope::Project,
            StoryId::new(5),
            "X".into(),
            "y".into(),
            true,
        );
        assert!(matches!(result, Err(StoridxError::StoryNotFound(_))));
        assert_eq!(store.list_stories(Scope::Project).unwrap().len(), 1);
    }
}
