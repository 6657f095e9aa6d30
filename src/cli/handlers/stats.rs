use crate::model::Category;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::format_category;

pub fn handle_stats(ctx: &CommandContext, json: bool) -> Result<()> {
    let stats = ctx.store.stats();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "total": stats.total,
                "byCategory": stats.by_category,
            }))?
        );
        return Ok(());
    }

    println!("{} {}", "Total:".bold(), stats.total);
    for category in Category::KNOWN {
        println!(
            "  {:<10} {}",
            format_category(&category),
            stats.count(&category)
        );
    }
    for (raw, count) in &stats.by_category {
        let category = Category::from(raw.as_str());
        if !category.is_known() {
            println!("  {:<10} {} {}", raw, count, "(shown as Other)".dimmed());
        }
    }
    Ok(())
}
