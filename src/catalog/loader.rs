use std::{collections::BTreeSet, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{store::PromptCatalog, types::Prompt};

#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: json5::Error,
    },
    #[error("catalog file {path} declares duplicate prompt id '{id}'")]
    DuplicateId { path: String, id: String },
    #[error("catalog file {path} declares a prompt with an empty id")]
    EmptyId { path: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    prompts: Vec<Prompt>,
}

/// Loads the prompt set from a JSON5 catalog file.
///
/// An empty prompt list is allowed (the engine then recommends nothing);
/// duplicate or empty ids are rejected because id lookups must be stable for
/// the process lifetime.
pub fn load_catalog_file(path: &Path) -> Result<PromptCatalog, CatalogFileError> {
    let display_path = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| CatalogFileError::Read {
        path: display_path.clone(),
        source,
    })?;
    let file: CatalogFile = json5::from_str(&content).map_err(|source| CatalogFileError::Parse {
        path: display_path.clone(),
        source,
    })?;

    let mut seen_ids = BTreeSet::new();
    for prompt in &file.prompts {
        if prompt.id.trim().is_empty() {
            return Err(CatalogFileError::EmptyId { path: display_path });
        }
        if !seen_ids.insert(prompt.id.clone()) {
            return Err(CatalogFileError::DuplicateId {
                path: display_path,
                id: prompt.id.clone(),
            });
        }
    }

    Ok(PromptCatalog::new(file.prompts))
}
