//! Catalog loading
//!
//! Chapters come from one of three sources, in order of precedence: an
//! explicit path (CLI flag or config), a `content.json` in the data
//! directory, or the bundled starter chapters. Explicit paths fail loudly;
//! the silent fallback only applies when no content was configured at all.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{Chapter, ChapterId};
use crate::config::Config;

/// Starter chapters compiled into the binary, so the app works before the
/// user has pointed it at any content of their own.
const STARTER_CONTENT: &str = include_str!("starter.json");

static BUNDLED: Lazy<Catalog> =
    Lazy::new(|| serde_json::from_str(STARTER_CONTENT).expect("bundled starter content is valid"));

/// Errors from reading or validating a content file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read content from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content in {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate chapter id {id}")]
    DuplicateChapter { id: ChapterId },
}

/// The full set of chapters available to study
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Chapters in curriculum order
    pub chapters: Vec<Chapter>,
}

impl Catalog {
    /// Load and validate a content file
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| CatalogError::Read { path: path.to_path_buf(), source })?;
        let catalog: Catalog = serde_json::from_str(&contents)
            .map_err(|source| CatalogError::Parse { path: path.to_path_buf(), source })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The chapters compiled into the binary
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    /// Find a chapter by id
    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Number of chapters
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Total number of items across every chapter
    pub fn item_count(&self) -> usize {
        self.chapters.iter().map(Chapter::item_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    /// Chapter ids must be unique; item keys and progress records depend
    /// on it.
    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for chapter in &self.chapters {
            if !seen.insert(chapter.id) {
                return Err(CatalogError::DuplicateChapter { id: chapter.id });
            }
        }
        Ok(())
    }
}

/// Pick the catalog the app should use.
///
/// An explicit path (CLI flag, then config) must load or the caller gets an
/// error; if nothing was configured, a `content.json` in the data directory
/// is used when present, and the bundled starter chapters otherwise.
pub fn resolve_catalog(override_path: Option<&Path>, config: &Config) -> Result<Catalog> {
    if let Some(path) = override_path {
        return Catalog::load_from_path(path)
            .with_context(|| format!("failed to load content from {:?}", path));
    }

    if let Some(path) = config.content_path.as_deref() {
        return Catalog::load_from_path(path)
            .with_context(|| format!("failed to load content configured at {:?}", path));
    }

    let default_path = Config::data_dir()?.join("content.json");
    if default_path.exists() {
        return Catalog::load_from_path(&default_path)
            .with_context(|| format!("failed to load content from {:?}", default_path));
    }

    tracing::info!("no user content found, using bundled starter chapters");
    Ok(Catalog::bundled().clone())
}
