use crate::model::{Category, Memo, parse_tag_list};
use crate::preview;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Read};

/// Resolve content from the CLI arg, reading stdin for `-`.
pub fn resolve_content(content: Option<String>) -> Result<Option<String>> {
    match content {
        Some(c) if c == "-" => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(Some(buf.trim_end().to_string()))
        }
        other => Ok(other),
    }
}

/// Flatten repeated `--tag` values, each of which may be comma-separated.
pub fn collect_tags(raw: Vec<String>) -> Vec<String> {
    raw.iter().flat_map(|t| parse_tag_list(t)).collect()
}

/// Format a category label with color coding
pub fn format_category(category: &Category) -> colored::ColoredString {
    let label = category.label();
    match category {
        Category::Personal => label.blue(),
        Category::Work => label.green(),
        Category::Study => label.purple(),
        Category::Idea => label.yellow(),
        Category::Other | Category::Unknown(_) => label.white(),
    }
}

/// Print a single memo with details
pub fn print_memo(memo: &Memo) {
    println!("{} {}", memo.id.cyan().bold(), memo.title.bold());
    println!("Category: {}", format_category(&memo.category));
    if !memo.tags.is_empty() {
        println!("Tags:     {}", format_tags(&memo.tags));
    }
    println!(
        "Created:  {}",
        memo.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed()
    );
    println!(
        "Updated:  {}",
        memo.updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .dimmed()
    );

    if !memo.content.is_empty() {
        println!();
        println!("{}", memo.content);
    }
}

/// Print a list of memos with a plain-text excerpt of each body
pub fn print_memo_list(memos: &[Memo], preview_length: usize) {
    if memos.is_empty() {
        println!("No memos found.");
        return;
    }

    for memo in memos {
        print!(
            "{} [{}] {}",
            memo.id.cyan(),
            format_category(&memo.category),
            memo.title.bold()
        );
        if !memo.tags.is_empty() {
            print!(" {}", format_tags(&memo.tags));
        }
        println!(
            " {}",
            memo.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );

        let excerpt = preview::excerpt(&memo.content, preview_length);
        if !excerpt.is_empty() {
            println!("    {}", excerpt.dimmed());
        }
    }
}

fn format_tags(tags: &[String]) -> colored::ColoredString {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
        .magenta()
}

pub fn warn_if_unsaved(ctx: &super::CommandContext) {
    if ctx.store.last_save_failed() {
        eprintln!(
            "{} changes could not be written to {}",
            "warning:".yellow().bold(),
            ctx.config.data_path(&ctx.root).display()
        );
    }
}
