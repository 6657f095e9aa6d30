//! # Memos - a local-first markdown memo keeper
//!
//! Memos keeps short markdown notes with a title, a category and free-form
//! tags. The whole collection is stored as one JSON document in a project's
//! `.memos/` directory and is rewritten after every change.
//!
//! ## Quick Start
//!
//! ```bash
//! memos init
//! memos create "Groceries" -c personal -d "milk, eggs" --tag home
//! memos list --search milk
//! memos stats
//! ```
//!
//! ## Library use
//!
//! ```
//! use memos::model::{CategoryFilter, MemoFormData};
//! use memos::storage::{MemoryBackend, Persistence};
//! use memos::store::MemoStore;
//!
//! let mut store = MemoStore::new(Persistence::new(MemoryBackend::new(), "memos"));
//! store.initialize();
//! store
//!     .create(MemoFormData::new("Trip Plan").with_content("Visit Paris in June"))
//!     .unwrap();
//! assert_eq!(store.view("paris", CategoryFilter::All).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Memo, Category, ...)
//! - [`search`]: Query engine for filtered views
//! - [`storage`]: Persistence of the memo collection
//! - [`store`]: The memo store
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.memos.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `MemosError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for memos.
pub mod model;

/// Markdown to plain-text excerpts for list output.
pub mod preview;

pub mod search;

/// Whole-collection persistence behind a pluggable backend.
pub mod storage;

/// The memo store: create, update, delete, stats and views.
pub mod store;

/// Input validation utilities.
///
/// Validates titles, content and tags before they reach the store.
pub mod validation;
