use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

use super::CommandContext;
use super::utils::warn_if_unsaved;

pub fn handle_delete(ctx: &mut CommandContext, id: String, force: bool, json: bool) -> Result<()> {
    let title = ctx.store.get(&id)?.title.clone();

    if !force && !json {
        print!("Delete {} ({}) permanently? [y/N] ", id.cyan(), title);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    ctx.store.delete(&id)?;
    warn_if_unsaved(ctx);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "action": "deleted",
                "id": id
            }))?
        );
    } else {
        println!("{} {}", "Deleted".red(), id.cyan());
    }
    Ok(())
}
