mod listeners;

pub mod fs;
pub mod memory;
pub mod migrations;
pub mod presenters;
pub mod sqlite;

pub use fs::WalkdirCatalogProvider;
pub use memory::{InMemorySelectionStore, StaticCatalogProvider};
pub use presenters::{present_cell_row, present_gallery_json, present_overlay, present_selection};
pub use sqlite::SqliteSelectionStore;
