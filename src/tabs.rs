//! Tab ingestion: the external "current list of open tabs" interface.
//!
//! The engine consumes a tab list once at initialization (and again on
//! explicit reconcile). The list is a JSON array of `{id, title, url}`
//! objects; a built-in sample keeps the binary usable without a browser
//! attached.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use indoc::indoc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entity::TabId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub title: String,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum TabSourceError {
    #[error("failed to read tab list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse tab list {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub trait TabSource {
    fn tabs(&self) -> Result<Vec<Tab>, TabSourceError>;
}

/// Reads a JSON tab list from disk.
pub struct FileTabSource {
    path: PathBuf,
}

impl FileTabSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabSource for FileTabSource {
    fn tabs(&self) -> Result<Vec<Tab>, TabSourceError> {
        parse_tabs(&self.path, &read_tab_file(&self.path)?)
    }
}

fn read_tab_file(path: &Path) -> Result<String, TabSourceError> {
    fs::read_to_string(path).map_err(|source| TabSourceError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_tabs(path: &Path, contents: &str) -> Result<Vec<Tab>, TabSourceError> {
    serde_json::from_str(contents).map_err(|source| TabSourceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

const SAMPLE_TABS: &str = indoc! {r#"
    [
        {"id": 1, "title": "Rust std docs", "url": "https://doc.rust-lang.org/std/"},
        {"id": 2, "title": "crates.io", "url": "https://crates.io/"},
        {"id": 3, "title": "This Week in Rust", "url": "https://this-week-in-rust.org/"},
        {"id": 4, "title": "ratatui book", "url": "https://ratatui.rs/tutorials/"},
        {"id": 5, "title": "", "url": "https://news.ycombinator.com/item?id=1"},
        {"id": 6, "title": "release notes", "url": "https://github.com/rust-lang/rust/releases"},
        {"id": 7, "title": "local dev", "url": "http://localhost:8080/dashboard"},
        {"id": 8, "title": "odd duck", "url": "about:blank"}
    ]
"#};

/// Built-in demo list used when no tab file is given.
pub struct SampleTabSource;

impl TabSource for SampleTabSource {
    fn tabs(&self) -> Result<Vec<Tab>, TabSourceError> {
        parse_tabs(Path::new("<built-in sample>"), SAMPLE_TABS)
    }
}
