use crate::model::CategoryFilter;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_memo_list;

pub fn handle_search(
    ctx: &CommandContext,
    query: String,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let filter: CategoryFilter = category.as_deref().unwrap_or("").parse()?;
    let results = ctx.store.view(&query, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Found {} results for '{}':\n", results.len(), query.trim());
        print_memo_list(&results, ctx.config.memos.preview_length);
    }
    Ok(())
}
