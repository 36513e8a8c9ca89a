use crate::commands::{CmdResult, RenderedStory};
use crate::error::Result;
use crate::model::{Scope, Story, StoryId};
use crate::store::DataStore;
use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());

/// Rebuilds readable text from a story's positional index: tokens joined in
/// numeric key order, with the space in front of punctuation removed so
/// marks attach to the preceding word.
///
/// The token map is already ordered by the numeric component-wise key
/// comparison (including legacy derivation suffixes), so iteration order is
/// the sort the format requires.
pub fn render_text(story: &Story) -> String {
    let joined = story
        .tokens
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    SPACE_BEFORE_PUNCT.replace_all(&joined, "$1").into_owned()
}

pub fn run<S: DataStore>(store: &S, scope: Scope, ids: &[StoryId]) -> Result<CmdResult> {
    let mut rendered = Vec::with_capacity(ids.len());
    for &id in ids {
        let story = store.get_story(id, scope)?;
        let text = render_text(&story);
        rendered.push(RenderedStory { story, text });
    }
    Ok(CmdResult::default().with_rendered(rendered))
}

/// Title and reconstructed text of one story, shaped for an edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub text: String,
}

pub fn for_edit<S: DataStore>(store: &S, scope: Scope, id: StoryId) -> Result<StoryDraft> {
    let story = store.get_story(id, scope)?;
    Ok(StoryDraft {
        title: story.name.clone(),
        text: render_text(&story),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::error::StoridxError;
    use crate::model::{PositionKey, TokenMap};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn roundtrip_through_add_reproduces_normalized_text() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Scope::Project,
            "Reino".into(),
            "Era uma vez um reino.".into(),
            true,
        )
        .unwrap();

        let result = run(&store, Scope::Project, &[StoryId::new(0)]).unwrap();
        assert_eq!(result.rendered[0].text, "Era uma vez um reino");
    }

    #[test]
    fn tokens_join_in_numeric_order_past_position_nine() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Scope::Project,
            "Contagem".into(),
            "um dois tres quatro cinco seis sete oito nove dez onze".into(),
            true,
        )
        .unwrap();

        let result = run(&store, Scope::Project, &[StoryId::new(0)]).unwrap();
        assert_eq!(
            result.rendered[0].text,
            "um dois tres quatro cinco seis sete oito nove dez onze"
        );
    }

    #[test]
    fn punctuation_tokens_attach_to_preceding_word() {
        // Build a story with punctuation tokens directly; the normal add path
        // never produces them, but legacy data can
        let id = StoryId::new(0);
        let mut tokens = TokenMap::new();
        for (i, tok) in ["Olá", ",", "mundo", "!"].iter().enumerate() {
            tokens.insert(PositionKey::new(id, i as u32 + 1), tok.to_string());
        }
        let story = Story::new(id, "Saudação", tokens);

        assert_eq!(render_text(&story), "Olá, mundo!");
    }

    #[test]
    fn derivation_keys_render_without_panicking() {
        let id = StoryId::new(0);
        let mut tokens = TokenMap::new();
        tokens.insert("0,1".parse().unwrap(), "era".to_string());
        tokens.insert("0,2".parse().unwrap(), "uma".to_string());
        tokens.insert("0,2.1".parse().unwrap(), "vez".to_string());
        let story = Story::new(id, "Derivada", tokens);

        assert_eq!(render_text(&story), "era uma vez");
    }

    #[test]
    fn empty_story_renders_empty_text() {
        let story = Story::new(StoryId::new(0), "Vazia", TokenMap::new());
        assert_eq!(render_text(&story), "");
    }

    #[test]
    fn for_edit_returns_title_and_text() {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Scope::Project,
            "Editável".into(),
            "algum texto aqui".into(),
            true,
        )
        .unwrap();

        let draft = for_edit(&store, Scope::Project, StoryId::new(0)).unwrap();
        assert_eq!(draft.title, "Editável");
        assert_eq!(draft.text, "algum texto aqui");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(
            run(&store, Scope::Project, &[StoryId::new(0)]),
            Err(StoridxError::StoryNotFound(_))
        ));
        assert!(matches!(
            for_edit(&store, Scope::Project, StoryId::new(0)),
            Err(StoridxError::StoryNotFound(_))
        ));
    }
}
