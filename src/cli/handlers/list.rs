use crate::model::CategoryFilter;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_memo_list;

pub fn handle_list(
    ctx: &CommandContext,
    search: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let filter: CategoryFilter = category.as_deref().unwrap_or("").parse()?;
    let memos = ctx.store.view(search.as_deref().unwrap_or(""), filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&memos)?);
    } else {
        print_memo_list(&memos, ctx.config.memos.preview_length);
    }
    Ok(())
}
