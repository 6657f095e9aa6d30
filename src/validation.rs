//! Input validation for memo form data.

use crate::error::{MemosError, Result};
use crate::model::MemoFormData;

/// Validates a memo title. Whitespace-only titles count as empty.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(MemosError::Validation("Title cannot be empty".to_string()));
    }
    Ok(())
}

/// Validates a whole form and returns it with title and tags trimmed.
///
/// Only an empty title is rejected. Content and tags are free text of any length.
pub fn normalize_form(mut form: MemoFormData) -> Result<MemoFormData> {
    validate_title(&form.title)?;

    form.title = form.title.trim().to_string();
    form.tags = form.tags.into_iter().map(|t| t.trim().to_string()).collect();
    Ok(form)
}
