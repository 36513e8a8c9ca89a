use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use storidx::api::{CmdMessage, ConfigAction, ExportMode, MessageLevel, StoridxPaths, StoryApi};
use storidx::commands::RenderedStory;
use storidx::config::StoridxConfig;
use storidx::editor::{edit_content, EditorContent};
use storidx::error::{Result, StoridxError};
use storidx::model::{Scope, Story, StoryId};
use storidx::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StoryApi<FileStore>,
    scope: Scope,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            text,
            no_editor,
        }) => handle_add(&mut ctx, title, text, no_editor),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Tokens { id }) => handle_tokens(&ctx, id),
        Some(Commands::Edit {
            id,
            no_editor,
            title,
            text,
        }) => handle_edit(&mut ctx, id, no_editor, title, text),
        Some(Commands::Delete { ids, keep_ids }) => handle_delete(&mut ctx, ids, keep_ids),
        Some(Commands::Export { ids, archive }) => handle_export(&ctx, ids, archive),
        Some(Commands::Stats) => handle_stats(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(".storidx");

    let global_data_dir = match std::env::var_os("STORIDX_GLOBAL_DATA") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "storidx", "storidx")
            .ok_or_else(|| StoridxError::Store("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_data_dir,
    };
    let config = StoridxConfig::load(config_dir).unwrap_or_default();

    let store = FileStore::new(Some(project_dir.clone()), global_data_dir.clone());
    let paths = StoridxPaths {
        project: Some(project_dir),
        global: global_data_dir,
    };
    let api = StoryApi::new(store, paths, config.strip_accents);

    Ok(AppContext { api, scope })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    text: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_text) = if no_editor {
        (title.unwrap_or_default(), text.unwrap_or_default())
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), text.unwrap_or_default());
        let edited = edit_content(&initial)?;
        (edited.title, edited.text)
    };

    // The store does not validate; empty input stops here
    if final_title.trim().is_empty() {
        return Err(StoridxError::Api("Title cannot be empty".into()));
    }
    if final_text.trim().is_empty() {
        return Err(StoridxError::Api("Text cannot be empty".into()));
    }

    let result = ctx.api.add_story(ctx.scope, final_title, final_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_stories(ctx.scope)?;
    print_stories(&result.listed_stories);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let parsed = parse_ids(&ids)?;
    let result = ctx.api.view_stories(ctx.scope, &parsed)?;
    print_rendered(&result.rendered);
    print_messages(&result.messages);
    Ok(())
}

fn handle_tokens(ctx: &AppContext, id: String) -> Result<()> {
    let parsed = parse_ids(&[id])?;
    let result = ctx.api.view_stories(ctx.scope, &parsed)?;
    for rs in &result.rendered {
        let json =
            serde_json::to_string_pretty(&rs.story).map_err(StoridxError::Serialization)?;
        println!("{}", json);
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: String,
    no_editor: bool,
    title: Option<String>,
    text: Option<String>,
) -> Result<()> {
    let story_id = parse_id(&id)?;
    let draft = ctx.api.story_for_edit(ctx.scope, story_id)?;

    let (new_title, new_text) = if no_editor {
        (
            title.unwrap_or_else(|| draft.title.clone()),
            text.unwrap_or_else(|| draft.text.clone()),
        )
    } else {
        let edited = edit_content(&EditorContent::new(draft.title, draft.text))?;
        (edited.title, edited.text)
    };

    if new_title.trim().is_empty() {
        return Err(StoridxError::Api("Title cannot be empty".into()));
    }
    if new_text.trim().is_empty() {
        return Err(StoridxError::Api("Text cannot be empty".into()));
    }

    let result = ctx.api.update_story(ctx.scope, story_id, new_title, new_text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>, keep_ids: bool) -> Result<()> {
    let parsed = parse_ids(&ids)?;
    let result = ctx.api.remove_stories(ctx.scope, &parsed, !keep_ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, ids: Vec<String>, archive: bool) -> Result<()> {
    let parsed = parse_ids(&ids)?;
    let mode = if archive {
        ExportMode::Archive
    } else {
        ExportMode::Json
    };
    let result = ctx.api.export_stories(ctx.scope, &parsed, mode)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats(ctx.scope)?;
    if let Some(stats) = &result.stats {
        println!("{}: {}", "Stories".bold(), stats.stories);
        println!("{}: {}", "Total tokens".bold(), stats.total_tokens);
        println!("{}: {}", "Unique tokens".bold(), stats.unique_tokens);
        println!(
            "{}: {:.1}%",
            "Unique token rate".bold(),
            stats.unique_ratio * 100.0
        );
        if !stats.most_common.is_empty() {
            println!("{}", "Most common:".bold());
            for (token, count) in &stats.most_common {
                println!(
                    "  {}: {} occurrence{}",
                    token,
                    count,
                    if *count > 1 { "s" } else { "" }
                );
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if let Some(config) = &result.config {
        println!("strip-accents = {}", config.strip_accents);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_rendered(rendered: &[RenderedStory]) {
    for (i, rs) in rendered.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        println!(
            "{} {}",
            rs.story.id.to_string().yellow(),
            rs.story.name.bold()
        );
        println!("--------------------------------");
        println!("{}", rs.text);
    }
}

const LINE_WIDTH: usize = 80;
const COUNT_WIDTH: usize = 12;

fn print_stories(stories: &[Story]) {
    if stories.is_empty() {
        println!("No stories found.");
        return;
    }

    for story in stories {
        let idx_str = format!("{}. ", story.id);
        let count_str = format!(
            "{:>width$}",
            format!("{} tokens", story.token_count),
            width = COUNT_WIDTH
        );

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + COUNT_WIDTH + 2);
        let name_display = truncate_to_width(&story.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "  {}{}{}  {}",
            idx_str,
            name_display,
            " ".repeat(padding),
            count_str.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn parse_id(s: &str) -> Result<StoryId> {
    s.parse()
        .map_err(|e: String| StoridxError::Api(e))
}

fn parse_ids(strs: &[String]) -> Result<Vec<StoryId>> {
    strs.iter().map(|s| parse_id(s)).collect()
}
