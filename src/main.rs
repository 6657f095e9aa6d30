use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use memos::cli::handlers::{self, CommandContext, UpdateParams};
use memos::cli::{Cli, Commands};
use memos::config::MemosConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    memos::logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    match cli.command {
        Commands::Init {
            path,
            default_category,
        } => handlers::handle_init(path, default_category),
        Commands::Categories => handlers::handle_categories(),
        Commands::Create {
            title,
            category,
            content,
            tag,
            json,
        } => handlers::handle_create(&mut load_context()?, title, category, content, tag, json),
        Commands::Show { id, json } => handlers::handle_show(&load_context()?, id, json),
        Commands::List {
            search,
            category,
            json,
        } => handlers::handle_list(&load_context()?, search, category, json),
        Commands::Search {
            query,
            category,
            json,
        } => handlers::handle_search(&load_context()?, query, category, json),
        Commands::Update {
            id,
            title,
            category,
            content,
            tag,
            clear_tags,
            json,
        } => handlers::handle_update(
            &mut load_context()?,
            UpdateParams {
                id,
                title,
                category,
                content,
                tag,
                clear_tags,
                json,
            },
        ),
        Commands::Delete { id, force, json } => {
            handlers::handle_delete(&mut load_context()?, id, force, json)
        }
        Commands::Stats { json } => handlers::handle_stats(&load_context()?, json),
    }
}

fn load_context() -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let (config, root) = MemosConfig::load(&cwd).context("Failed to load memos configuration")?;
    Ok(CommandContext::new(config, root))
}
