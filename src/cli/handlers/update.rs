use crate::model::{Category, MemoFormData};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{collect_tags, resolve_content, warn_if_unsaved};

/// Parameters for update operation. `None` keeps the current value.
pub struct UpdateParams {
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub tag: Vec<String>,
    pub clear_tags: bool,
    pub json: bool,
}

pub fn handle_update(ctx: &mut CommandContext, params: UpdateParams) -> Result<()> {
    let current = ctx.store.get(&params.id)?;
    let mut form = MemoFormData::from_memo(current);

    if let Some(t) = params.title {
        form.title = t;
    }
    if let Some(c) = params.category {
        form.category = Category::from(c);
    }
    if let Some(c) = resolve_content(params.content)? {
        form.content = c;
    }
    if params.clear_tags {
        form.tags.clear();
    } else if !params.tag.is_empty() {
        form.tags = collect_tags(params.tag);
    }

    let memo = ctx.store.update(&params.id, form)?;
    warn_if_unsaved(ctx);

    if params.json {
        println!("{}", serde_json::to_string_pretty(&memo)?);
    } else {
        println!("{} {} {}", "Updated".green(), memo.id.cyan(), memo.title);
    }
    Ok(())
}
