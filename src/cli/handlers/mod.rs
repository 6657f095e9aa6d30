mod categories;
mod create;
mod delete;
mod init;
mod list;
mod search;
mod show;
mod stats;
mod update;
mod utils;

pub use categories::handle_categories;
pub use create::handle_create;
pub use delete::handle_delete;
pub use init::handle_init;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;
pub use stats::handle_stats;
pub use update::{UpdateParams, handle_update};

use crate::config::MemosConfig;
use crate::storage::{JsonFileBackend, Persistence};
use crate::store::MemoStore;
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: MemosConfig,
    pub root: PathBuf,
    pub store: MemoStore<JsonFileBackend>,
}

impl CommandContext {
    /// Build the store for the project and load its memos.
    pub fn new(config: MemosConfig, root: PathBuf) -> Self {
        let backend = JsonFileBackend::new(config.data_path(&root));
        let persistence = Persistence::new(backend, config.memos.storage_key.clone());
        let mut store = MemoStore::new(persistence).with_id_length(config.memos.id_length);
        store.initialize();
        Self {
            config,
            root,
            store,
        }
    }
}
