use super::DataStore;
use crate::error::{Result, StoridxError};
use crate::model::{Scope, Story, StoryId, StoryMap};
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "stories.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StoridxError::Io)?;
        }
        Ok(())
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                StoridxError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    /// Reads the whole collection. A missing file is an empty collection; a
    /// file that does not parse is reset to an empty collection and a fresh
    /// valid document is written back, so corruption never escapes the load.
    fn load_stories(&self, store_path: &Path) -> Result<StoryMap> {
        let data_file = store_path.join(DATA_FILENAME);
        if !data_file.exists() {
            return Ok(StoryMap::new());
        }
        let content = fs::read_to_string(&data_file).map_err(StoridxError::Io)?;
        match serde_json::from_str(&content) {
            Ok(stories) => Ok(stories),
            Err(_) => {
                let empty = StoryMap::new();
                self.save_stories(store_path, &empty)?;
                Ok(empty)
            }
        }
    }

    fn save_stories(&self, store_path: &Path, stories: &StoryMap) -> Result<()> {
        self.ensure_dir(store_path)?;
        let data_file = store_path.join(DATA_FILENAME);
        let content = serde_json::to_string_pretty(stories).map_err(StoridxError::Serialization)?;
        fs::write(data_file, content).map_err(StoridxError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_story(&mut self, story: &Story, scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        let mut stories = self.load_stories(&root)?;
        stories.insert(story.id, story.clone());
        self.save_stories(&root, &stories)
    }

    fn get_story(&self, id: StoryId, scope: Scope) -> Result<Story> {
        let root = self.get_store_path(scope)?;
        let stories = self.load_stories(&root)?;
        stories
            .get(&id)
            .cloned()
            .ok_or(StoridxError::StoryNotFound(id))
    }

    fn list_stories(&self, scope: Scope) -> Result<Vec<Story>> {
        let root = self.get_store_path(scope)?;
        if !root.exists() {
            return Ok(Vec::new());
        }
        let stories = self.load_stories(&root)?;
        Ok(stories.into_values().collect())
    }

    fn delete_story(&mut self, id: StoryId, scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        let mut stories = self.load_stories(&root)?;
        if stories.remove(&id).is_none() {
            return Err(StoridxError::StoryNotFound(id));
        }
        self.save_stories(&root, &stories)
    }

    fn replace_all(&mut self, stories: StoryMap, scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        self.save_stories(&root, &stories)
    }
}
