//! JSON Lines loading for corpus splits

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::document::Document;
use crate::error::{CoreError, Result};

/// Load every document of a JSON Lines file, in file order.
///
/// Whitespace-only lines are skipped. Any unreadable or malformed line
/// fails the whole file; no partial result is returned.
pub fn load_jsonl(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let io_error = |source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut documents = Vec::new();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(io_error)?;
        if line.trim().is_empty() {
            continue;
        }

        let document = Document::from_json(&line).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        documents.push(document);
    }

    debug!("Parsed {} documents from {}", documents.len(), path.display());
    Ok(documents)
}

/// One named partition of the corpus (train, dev, test).
///
/// Loading a split never fails: a load error is kept next to an empty
/// document list so the report can still run.
#[derive(Debug)]
pub struct Split {
    pub name: String,
    pub path: PathBuf,
    pub documents: Vec<Document>,
    pub error: Option<CoreError>,
}

impl Split {
    pub fn load(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let path = path.into();

        match load_jsonl(&path) {
            Ok(documents) => {
                info!("Loaded {} split ({} documents)", name, documents.len());
                Self {
                    name,
                    path,
                    documents,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Failed to load {} split: {}", name, e);
                Self {
                    name,
                    path,
                    documents: Vec::new(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.error.is_none()
    }

    /// The line shown to the user after loading
    pub fn load_message(&self) -> String {
        match &self.error {
            None => format!(
                "Successfully loaded {} documents from {}",
                self.documents.len(),
                self.path.display()
            ),
            Some(e) => format!("Error loading {}: {}", self.path.display(), e),
        }
    }
}
