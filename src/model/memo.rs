use super::category::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Memo {
    pub fn new(id: String, form: MemoFormData, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: form.title,
            content: form.content,
            category: form.category,
            tags: form.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field from `form` and refresh `updated_at`.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn apply(&mut self, form: MemoFormData, now: DateTime<Utc>) {
        self.title = form.title;
        self.content = form.content;
        self.category = form.category;
        self.tags = form.tags;
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }
}

/// User-supplied fields for create and update. Never carries identity or timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoFormData {
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub category: Category,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl MemoFormData {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Category>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Seed a form from an existing memo, for partial edits.
    pub fn from_memo(memo: &Memo) -> Self {
        Self {
            title: memo.title.clone(),
            content: memo.content.clone(),
            category: memo.category.clone(),
            tags: memo.tags.clone(),
        }
    }
}

/// Split a comma-separated tag field, dropping blank entries.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
