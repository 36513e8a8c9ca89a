use crate::commands::view::render_text;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoridxError};
use crate::model::{Scope, Story, StoryId, StoryMap};
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// The persisted JSON document (pretty, UTF-8 as-is)
    Json,
    /// Gzipped tar with one plain-text file per story
    Archive,
}

pub fn run<S: DataStore>(
    store: &S,
    scope: Scope,
    ids: &[StoryId],
    mode: ExportMode,
) -> Result<CmdResult> {
    let stories = resolve_stories(store, scope, ids)?;

    if stories.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No stories to export."));
        return Ok(res);
    }

    let now = Utc::now();
    let mut result = CmdResult::default();
    match mode {
        ExportMode::Json => {
            let filename = format!("storidx-{}.json", now.format("%Y-%m-%d_%H%M%S"));
            let map: StoryMap = stories.iter().map(|s| (s.id, s.clone())).collect();
            let content =
                serde_json::to_string_pretty(&map).map_err(StoridxError::Serialization)?;
            std::fs::write(&filename, content).map_err(StoridxError::Io)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} stories to {}",
                stories.len(),
                filename
            )));
        }
        ExportMode::Archive => {
            let filename = format!("storidx-{}.tar.gz", now.format("%Y-%m-%d_%H%M%S"));
            let file = File::create(&filename).map_err(StoridxError::Io)?;
            write_archive(file, &stories)?;
            result.add_message(CmdMessage::success(format!(
                "Exported {} stories to {}",
                stories.len(),
                filename
            )));
        }
    }
    Ok(result)
}

fn resolve_stories<S: DataStore>(
    store: &S,
    scope: Scope,
    ids: &[StoryId],
) -> Result<Vec<Story>> {
    if ids.is_empty() {
        store.list_stories(scope)
    } else {
        ids.iter().map(|&id| store.get_story(id, scope)).collect()
    }
}

fn write_archive<W: Write>(writer: W, stories: &[Story]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for story in stories {
        let entry_name = format!(
            "stories/{}-{}.txt",
            story.id,
            sanitize_filename(&story.name)
        );
        let content = format!("{}\n\n{}\n", story.name, render_text(story));

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(&mut header, entry_name, content.as_bytes())
            .map_err(StoridxError::Io)?;
    }

    tar.finish().map_err(StoridxError::Io)?;
    Ok(())
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            Scope::Project,
            "Primeira".into(),
            "Era uma vez.".into(),
            true,
        )
        .unwrap();
        add::run(
            &mut store,
            Scope::Project,
            "Segunda".into(),
            "um reino distante".into(),
            true,
        )
        .unwrap();
        store
    }

    #[test]
    fn resolve_defaults_to_all_stories() {
        let store = seeded_store();
        let stories = resolve_stories(&store, Scope::Project, &[]).unwrap();
        assert_eq!(stories.len(), 2);
    }

    #[test]
    fn resolve_honors_explicit_ids() {
        let store = seeded_store();
        let stories = resolve_stories(&store, Scope::Project, &[StoryId::new(1)]).unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].name, "Segunda");
    }

    #[test]
    fn write_archive_produces_gzip_content() {
        let store = seeded_store();
        let stories = resolve_stories(&store, Scope::Project, &[]).unwrap();

        let mut buf = Vec::new();
        write_archive(&mut buf, &stories).unwrap();

        assert!(!buf.is_empty());
        // Gzip magic bytes
        assert_eq!(buf[0], 0x1f);
        assert_eq!(buf[1], 0x8b);
    }

    #[test]
    fn sanitize_replaces_path_hostile_characters() {
        assert_eq!(sanitize_filename("Hello World"), "Hello World");
        assert_eq!(sanitize_filename("foo/bar"), "foo_bar");
        assert_eq!(sanitize_filename("a:b?c"), "a_b_c");
    }
}
