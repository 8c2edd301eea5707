//! Item records consumed by the carousel.
//!
//! Items arrive from the page layer as CMS-shaped documents:
//!
//! ```json
//! { "id": "a", "data": { "title": "Dunes", "main_image": { "url": "...", "alt": "..." } } }
//! ```
//!
//! Every nested field is optional; rendering omits what is missing.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One rotatable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Caller-assigned identifier, unique within a list.
    pub id: String,
    /// Absent and `null` both read as an empty payload.
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: ItemData,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemData {
    pub title: Option<String>,
    pub main_image: Option<MainImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MainImage {
    pub url: Option<String>,
    pub alt: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Item with an id and no payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: ItemData::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.data.title = Some(title.into());
        self
    }

    pub fn with_image(mut self, url: Option<&str>, alt: Option<&str>) -> Self {
        self.data.main_image = Some(MainImage {
            url: url.map(str::to_string),
            alt: alt.map(str::to_string),
        });
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.data.title.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.data.main_image.as_ref()?.url.as_deref()
    }

    pub fn image_alt(&self) -> Option<&str> {
        self.data.main_image.as_ref()?.alt.as_deref()
    }
}

/// Errors that can occur when loading an item list.
#[derive(Debug, Error)]
pub enum ItemsError {
    #[error("Failed to read items file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse items file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a JSON array of items from disk.
///
/// Duplicate ids are reported but kept; order is preserved exactly.
pub fn load_items(path: &Path) -> Result<Vec<Item>, ItemsError> {
    let content = fs::read_to_string(path).map_err(|e| ItemsError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let items = parse_items(&content).map_err(|e| ItemsError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(count = items.len(), path = %path.display(), "Loaded carousel items");
    Ok(items)
}

/// Parses a JSON array of items.
pub fn parse_items(content: &str) -> Result<Vec<Item>, serde_json::Error> {
    let items: Vec<Item> = serde_json::from_str(content)?;
    let mut seen = HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            tracing::warn!(id = %item.id, "Duplicate carousel item id");
        }
    }
    Ok(items)
}
