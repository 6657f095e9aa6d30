use crate::model::{Category, MemoFormData};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{collect_tags, resolve_content, warn_if_unsaved};

pub fn handle_create(
    ctx: &mut CommandContext,
    title: String,
    category: Option<String>,
    content: Option<String>,
    tag: Vec<String>,
    json: bool,
) -> Result<()> {
    let content = resolve_content(content)?.unwrap_or_default();
    let category = category
        .map(Category::from)
        .unwrap_or_else(|| ctx.config.memos.default_category());

    let form = MemoFormData::new(title)
        .with_content(content)
        .with_category(category)
        .with_tags(collect_tags(tag));

    let memo = ctx.store.create(form)?;
    warn_if_unsaved(ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&memo)?);
    } else {
        println!("{} {} {}", "Created".green(), memo.id.cyan(), memo.title);
    }
    Ok(())
}
