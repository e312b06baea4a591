//! Kotoba - a TUI for studying Japanese vocabulary, kanji, and phrases
//!
//! Kotoba organizes study material into chapters, each carrying three item
//! categories, and offers three ways through them: a browsable list, a
//! flashcard deck, and multiple-choice quizzes in both directions. Known
//! items, quiz scores, and the daily study streak persist between runs.

pub mod app;
pub mod catalog;
pub mod config;
pub mod progress;
pub mod quiz;
pub mod session;
pub mod theme;
pub mod ui;

pub use app::App;
pub use catalog::Catalog;
pub use config::Config;
pub use progress::ProgressRecord;
pub use theme::Theme;
