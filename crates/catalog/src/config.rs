//! TOML catalog files.
//!
//! A catalog file is a list of `[[stories]]` tables, each with a
//! `[stories.resources]` table keyed by language code:
//!
//! ```toml
//! [[stories]]
//! id = "tara"
//! title = "Tara the Brave Turtle"
//! tag = "EN"
//! pills = ["Courage"]
//! [stories.resources]
//! en = "./tara-the-brave-turtle.pdf"
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use shared::domain::StoryRecord;

use crate::{Catalog, CatalogError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    stories: Vec<StoryRecord>,
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(raw)?;
    Catalog::new(file.stories)
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), stories = catalog.len(), "loaded story catalog");
    Ok(catalog)
}
