use crate::config::{CONFIG_FILE_NAME, MemosConfig, MemosSettings};
use crate::error::MemosError;
use crate::model::Category;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(path: Option<String>, default_category: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(MemosError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let defaults = MemosSettings::default();
    let default_category = default_category.unwrap_or(defaults.default_category.clone());
    if !Category::from(default_category.as_str()).is_known() {
        eprintln!(
            "{} '{}' is not a known category; memos will display it as Other",
            "warning:".yellow().bold(),
            default_category
        );
    }

    let config = MemosConfig {
        memos: MemosSettings {
            path: path.unwrap_or(defaults.path.clone()),
            default_category,
            ..defaults
        },
    };

    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    config.save(&config_path)?;

    println!(
        "{} memos project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
