//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for every
//! storidx operation, regardless of the UI driving it.
//!
//! The facade dispatches to command functions and returns structured
//! `Result<CmdResult>` values. It does no business logic, no I/O formatting,
//! and never prints — presentation belongs to the caller.
//!
//! `StoryApi<S: DataStore>` is generic over the storage backend:
//! production runs on `FileStore`, tests on `InMemoryStore`.

use crate::commands;
use crate::commands::view::StoryDraft;
use crate::error::Result;
use crate::model::{Scope, StoryId};
use crate::store::DataStore;

pub struct StoryApi<S: DataStore> {
    store: S,
    paths: commands::StoridxPaths,
    strip_accents: bool,
}

impl<S: DataStore> StoryApi<S> {
    pub fn new(store: S, paths: commands::StoridxPaths, strip_accents: bool) -> Self {
        Self {
            store,
            paths,
            strip_accents,
        }
    }

    pub fn add_story(
        &mut self,
        scope: Scope,
        title: String,
        text: String,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, scope, title, text, self.strip_accents)
    }

    pub fn update_story(
        &mut self,
        scope: Scope,
        id: StoryId,
        title: String,
        text: String,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, scope, id, title, text, self.strip_accents)
    }

    pub fn remove_stories(
        &mut self,
        scope: Scope,
        ids: &[StoryId],
        renumber: bool,
    ) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, scope, ids, renumber)
    }

    pub fn view_stories(&self, scope: Scope, ids: &[StoryId]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, scope, ids)
    }

    pub fn story_for_edit(&self, scope: Scope, id: StoryId) -> Result<StoryDraft> {
        commands::view::for_edit(&self.store, scope, id)
    }

    pub fn list_stories(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, scope)
    }

    pub fn export_stories(
        &self,
        scope: Scope,
        ids: &[StoryId],
        mode: commands::export::ExportMode,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, scope, ids, mode)
    }

    pub fn stats(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, scope)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn paths(&self) -> &commands::StoridxPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportMode;
pub use commands::{CmdMessage, CmdResult, MessageLevel, StoridxPaths};
