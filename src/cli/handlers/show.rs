use anyhow::Result;

use super::CommandContext;
use super::utils::print_memo;

pub fn handle_show(ctx: &CommandContext, id: String, json: bool) -> Result<()> {
    let memo = ctx.store.get(&id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(memo)?);
    } else {
        print_memo(memo);
    }
    Ok(())
}
