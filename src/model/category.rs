use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::MemosError;

/// Classification label attached to every memo.
///
/// Values outside the known set are kept verbatim in [`Category::Unknown`] so
/// that storage round-trips and filtering see exactly what was written, while
/// rendering falls back to the "Other" label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Study,
    Idea,
    Other,
    Unknown(String),
}

impl Category {
    /// The closed set of categories, in display order.
    pub const KNOWN: [Category; 5] = [
        Category::Personal,
        Category::Work,
        Category::Study,
        Category::Idea,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Study => "study",
            Category::Idea => "idea",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    /// Human-readable label. Unrecognized values render as "Other".
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Study => "Study",
            Category::Idea => "Idea",
            Category::Other | Category::Unknown(_) => "Other",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Unknown(_))
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        let known = match value.as_str() {
            "personal" => Some(Category::Personal),
            "work" => Some(Category::Work),
            "study" => Some(Category::Study),
            "idea" => Some(Category::Idea),
            "other" => Some(Category::Other),
            _ => None,
        };
        known.unwrap_or(Category::Unknown(value))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category selection applied by the query engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CategoryFilter::Only(_))
    }
}

impl FromStr for CategoryFilter {
    type Err = MemosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(Category::from(s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_round_trip() {
        for category in Category::KNOWN {
            let raw: String = category.clone().into();
            assert_eq!(Category::from(raw), category);
        }
    }

    #[test]
    fn test_unknown_category_kept_verbatim() {
        let category = Category::from("Recipes");
        assert_eq!(category, Category::Unknown("Recipes".to_string()));
        assert_eq!(category.as_str(), "Recipes");
        assert_eq!(category.label(), "Other");
        assert!(!category.is_known());
    }

    #[test]
    fn test_category_matching_is_case_sensitive() {
        assert_eq!(Category::from("Work"), Category::Unknown("Work".to_string()));
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let json = serde_json::to_string(&Category::Idea).unwrap();
        assert_eq!(json, "\"idea\"");

        let parsed: Category = serde_json::from_str("\"journal\"").unwrap();
        assert_eq!(parsed, Category::Unknown("journal".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"journal\"");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "work".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Work)
        );
    }

    #[test]
    fn test_filter_parse_keeps_surrounding_whitespace() {
        assert_eq!(
            " work".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Unknown(" work".to_string()))
        );
    }
}
