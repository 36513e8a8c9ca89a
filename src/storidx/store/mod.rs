//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the story collection lives so the
//! command layer can run against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage. The whole collection is one JSON
//!   document (`stories.json`) per scope; every operation is a full
//!   read-modify-persist cycle, so the file on disk is always a complete,
//!   valid snapshot after a mutating call returns.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for tests. No persistence,
//!   fast isolated execution.
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`] parameter:
//! - `Scope::Project`: local `.storidx/` directory in the current project
//! - `Scope::Global`: user-wide storage
//!
//! ## Storage Format
//!
//! `stories.json` is a top-level object mapping story-id strings to story
//! records (`"índice"`, `"Nome"`, `"total_tokens"`, `"Tokens individuais"`).
//! A missing file reads as an empty collection. A file that fails to parse
//! also reads as empty, and a fresh valid empty document is written in its
//! place rather than surfacing an error.

use crate::error::Result;
use crate::model::{Scope, Story, StoryId, StoryMap};

pub mod fs;
pub mod memory;

/// Abstract interface for story storage.
pub trait DataStore {
    /// Save a story (create or update)
    fn save_story(&mut self, story: &Story, scope: Scope) -> Result<()>;

    /// Get a story by id
    fn get_story(&self, id: StoryId, scope: Scope) -> Result<Story>;

    /// List all stories in a scope, in ascending id order
    fn list_stories(&self, scope: Scope) -> Result<Vec<Story>>;

    /// Delete a story permanently
    fn delete_story(&mut self, id: StoryId, scope: Scope) -> Result<()>;

    /// Replace the whole collection at once (renumbering writes)
    fn replace_all(&mut self, stories: StoryMap, scope: Scope) -> Result<()>;
}
