#![deny(clippy::unwrap_used)]

use serde::Deserialize;
use std::path::Path;

use crate::{errors::AppError, static_files};

#[derive(Debug, Clone, Deserialize)]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub hero: Hero,
    pub sections: Vec<PageSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub badge: Option<String>,
    pub name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
    pub title: String,
    /// Shown in a narrow column to the left of the body.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub body: Vec<Block>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: String },
    Subheading { text: String },
    List { items: Vec<String> },
    Expander { title: String, items: Vec<String> },
    Image { file: String },
    Link { label: String, url: String },
    Contact { entries: Vec<ContactEntry> },
    Divider,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl PageContent {
    pub fn from_json(json: &str) -> Result<PageContent, AppError> {
        serde_json::from_str(json).map_err(|err| {
            tracing::error!("Invalid page content: {}", err);
            AppError::BadContent
        })
    }

    pub fn from_file(path: &Path) -> Result<PageContent, AppError> {
        let json = std::fs::read_to_string(path).map_err(|err| {
            tracing::error!("Cannot read page content {}: {}", path.display(), err);
            AppError::ContentNotFound
        })?;
        PageContent::from_json(&json)
    }

    pub fn builtin() -> Result<PageContent, AppError> {
        let json = static_files::get("portfolio.json").map_err(|_| AppError::ContentNotFound)?;
        PageContent::from_json(json)
    }
}
