use super::DataStore;
use crate::error::{Result, StoridxError};
use crate::model::{Scope, Story, StoryId, StoryMap};

/// In-memory store for tests. Same observable behavior as [`super::fs::FileStore`]
/// minus the disk.
#[derive(Default)]
pub struct InMemoryStore {
    project: StoryMap,
    global: StoryMap,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, scope: Scope) -> &StoryMap {
        match scope {
            Scope::Project => &self.project,
            Scope::Global => &self.global,
        }
    }

    fn map_mut(&mut self, scope: Scope) -> &mut StoryMap {
        match scope {
            Scope::Project => &mut self.project,
            Scope::Global => &mut self.global,
        }
    }
}

impl DataStore for InMemoryStore {
    fn save_story(&mut self, story: &Story, scope: Scope) -> Result<()> {
        self.map_mut(scope).insert(story.id, story.clone());
        Ok(())
    }

    fn get_story(&self, id: StoryId, scope: Scope) -> Result<Story> {
        self.map(scope)
            .get(&id)
            .cloned()
            .ok_or(StoridxError::StoryNotFound(id))
    }

    fn list_stories(&self, scope: Scope) -> Result<Vec<Story>> {
        Ok(self.map(scope).values().cloned().collect())
    }

    fn delete_story(&mut self, id: StoryId, scope: Scope) -> Result<()> {
        if self.map_mut(scope).remove(&id).is_none() {
            return Err(StoridxError::StoryNotFound(id));
        }
        Ok(())
    }

    fn replace_all(&mut self, stories: StoryMap, scope: Scope) -> Result<()> {
        *self.map_mut(scope) = stories;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TokenMap;

    #[test]
    fn delete_not_found() {
        let mut store = InMemoryStore::new();
        match store.delete_story(StoryId::new(2), Scope::Project) {
            Err(StoridxError::StoryNotFound(id)) => assert_eq!(id, StoryId::new(2)),
            _ => panic!("Expected StoryNotFound"),
        }
    }

    #[test]
    fn scope_isolation() {
        let mut store = InMemoryStore::new();
        let story = Story::new(StoryId::new(0), "only project", TokenMap::new());
        store.save_story(&story, Scope::Project).unwrap();

        assert!(store.get_story(StoryId::new(0), Scope::Project).is_ok());
        assert!(store.get_story(StoryId::new(0), Scope::Global).is_err());
    }

    #[test]
    fn replace_all_swaps_the_collection() {
        let mut store = InMemoryStore::new();
        store
            .save_story(&Story::new(StoryId::new(0), "velha", TokenMap::new()), Scope::Project)
            .unwrap();

        let mut fresh = StoryMap::new();
        fresh.insert(
            StoryId::new(0),
            Story::new(StoryId::new(0), "nova", TokenMap::new()),
        );
        store.replace_all(fresh, Scope::Project).unwrap();

        let listed = store.list_stories(Scope::Project).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "nova");
    }
}
