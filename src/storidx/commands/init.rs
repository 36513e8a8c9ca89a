use crate::commands::{CmdMessage, CmdResult, StoridxPaths};
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &StoridxPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;

    let data_file = dir.join("stories.json");
    if !data_file.exists() {
        fs::write(&data_file, "{}")?;
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized storidx store at {}",
        dir.display()
    )));
    Ok(result)
}
