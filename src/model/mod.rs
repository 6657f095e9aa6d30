//! Data models for memos.
//!
//! - [`Memo`]: a single user-authored note
//! - [`MemoFormData`]: the user-editable subset of a memo
//! - [`Category`]: classification label (personal, work, study, idea, other)
//! - [`CategoryFilter`]: category selection for views

mod category;
mod memo;

pub use category::{Category, CategoryFilter};
pub use memo::{Memo, MemoFormData, parse_tag_list};
