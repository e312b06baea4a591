//! Study content: chapters, items, and catalog loading
//!
//! The catalog is immutable for the lifetime of a run. Everything else in
//! the app refers to its items by chapter id, category, and position.

pub mod loader;
pub mod model;

// Re-exports
pub use loader::{Catalog, CatalogError, resolve_catalog};
pub use model::{Category, Chapter, ChapterId, ItemRef, KanjiItem, PhraseItem, VocabItem};
