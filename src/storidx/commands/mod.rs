use crate::config::StoridxConfig;
use crate::error::{Result, StoridxError};
use crate::model::{Scope, Story};
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod remove;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct StoridxPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl StoridxPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| StoridxError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A story rendered back to readable text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedStory {
    pub story: Story,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_stories: Vec<Story>,
    pub listed_stories: Vec<Story>,
    pub rendered: Vec<RenderedStory>,
    pub stats: Option<stats::CollectionStats>,
    pub config: Option<StoridxConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_stories(mut self, stories: Vec<Story>) -> Self {
        self.affected_stories = stories;
        self
    }

    pub fn with_listed_stories(mut self, stories: Vec<Story>) -> Self {
        self.listed_stories = stories;
        self
    }

    pub fn with_rendered(mut self, rendered: Vec<RenderedStory>) -> Self {
        self.rendered = rendered;
        self
    }

    pub fn with_stats(mut self, stats: stats::CollectionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: StoridxConfig) -> Self {
        self.config = Some(config);
        self
    }
}
