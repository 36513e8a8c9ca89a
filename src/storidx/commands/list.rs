use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Scope;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let stories = store.list_stories(scope)?;
    Ok(CmdResult::default().with_listed_stories(stories))
}
