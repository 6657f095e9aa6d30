use crate::model::Category;
use anyhow::Result;
use colored::Colorize;

use super::utils::format_category;

pub fn handle_categories() -> Result<()> {
    for category in Category::KNOWN {
        println!("{:<10} {}", category.as_str().cyan(), format_category(&category));
    }
    Ok(())
}
