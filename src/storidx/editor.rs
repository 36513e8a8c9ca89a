use crate::error::{Result, StoridxError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Content of an editor buffer. Format: first line is the title, a blank
/// line, then the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub text: String,
}

impl EditorContent {
    pub fn new(title: String, text: String) -> Self {
        Self { title, text }
    }

    pub fn to_buffer(&self) -> String {
        if self.text.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.text)
        }
    }

    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let rest: Vec<&str> = lines.collect();
        let text = rest.join("\n").trim().to_string();
        Self { title, text }
    }
}

/// Gets the editor command from the environment: `$EDITOR`, then `$VISUAL`,
/// then common fallbacks.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(StoridxError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor, waits for it to close, and returns the
/// file contents afterwards.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| StoridxError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(StoridxError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(StoridxError::Io)
}

/// Opens an editor seeded with `initial` and returns the edited content.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join("storidx_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(StoridxError::Io)?;
    let result = open_in_editor(&temp_file)?;
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_buffer_with_text() {
        let ec = EditorContent::new("Título".to_string(), "Era uma vez.".to_string());
        assert_eq!(ec.to_buffer(), "Título\n\nEra uma vez.");
    }

    #[test]
    fn to_buffer_without_text() {
        let ec = EditorContent::new("Título".to_string(), String::new());
        assert_eq!(ec.to_buffer(), "Título\n\n");
    }

    #[test]
    fn from_buffer_normal() {
        let ec = EditorContent::from_buffer("Título\n\nLinha um.\nLinha dois.");
        assert_eq!(ec.title, "Título");
        assert_eq!(ec.text, "Linha um.\nLinha dois.");
    }

    #[test]
    fn from_buffer_title_only() {
        let ec = EditorContent::from_buffer("Só o título");
        assert_eq!(ec.title, "Só o título");
        assert_eq!(ec.text, "");
    }

    #[test]
    fn from_buffer_empty() {
        let ec = EditorContent::from_buffer("");
        assert_eq!(ec.title, "");
        assert_eq!(ec.text, "");
    }

    #[test]
    fn roundtrip() {
        let original = EditorContent::new("Teste".to_string(), "corpo\ncom linhas".to_string());
        assert_eq!(EditorContent::from_buffer(&original.to_buffer()), original);
    }
}
