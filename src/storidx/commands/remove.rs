use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Scope, StoryId, StoryMap};
use crate::store::DataStore;

/// Deletes stories, then (unless suppressed) renumbers the survivors back to
/// a dense `0..N-1` id range. Renumbering rewrites every position-key prefix
/// along with the id field, so keys keep matching their story.
///
/// All ids refer to the numbering in effect when the call was made:
/// renumbering runs once, after the last deletion.
pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    ids: &[StoryId],
    renumber: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let story = store.get_story(id, scope)?;
        store.delete_story(id, scope)?;
        result.add_message(CmdMessage::success(format!(
            "Story deleted (id {}): {}",
            id, story.name
        )));
        result.affected_stories.push(story);
    }

    if renumber {
        let remaining = store.list_stories(scope)?;
        if !remaining.is_empty() {
            let mut renumbered = StoryMap::new();
            let mut changed = false;
            for (i, story) in remaining.into_iter().enumerate() {
                let new_id = StoryId::new(i as u32);
                changed |= story.id != new_id;
                renumbered.insert(new_id, story.with_id(new_id));
            }
            if changed {
                store.replace_all(renumbered, scope)?;
                result.add_message(CmdMessage::info("Remaining story ids renumbered."));
            }
        }
    }

    Ok(result)
}
