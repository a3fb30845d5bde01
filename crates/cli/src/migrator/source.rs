//! Export-directory discovery for the migrator.
//!
//! Responsibilities:
//! - Locate the data directory inside a generator export (`<dir>/data/`
//!   when present, the directory itself otherwise).
//! - Discover collections by their `*.schema.json` files and attach the
//!   companion document/synonym/override files that share the stem.
//!
//! Non-responsibilities:
//! - No file content parsing here; the replay code reads the files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::generator::data_export::{CURATION_SETS_FILE, STOPWORDS_FILE, SYNONYM_SETS_FILE};

const SCHEMA_SUFFIX: &str = ".schema.json";

/// One collection's files inside an export directory.
#[derive(Debug, Clone)]
pub(crate) struct CollectionExport {
    /// File stem shared by the companion files (the resource address the
    /// generator used; the real collection name lives inside the schema).
    pub stem: String,
    pub schema_path: PathBuf,
    pub documents_path: Option<PathBuf>,
    pub synonyms_path: Option<PathBuf>,
    pub overrides_path: Option<PathBuf>,
}

/// A scanned export directory.
#[derive(Debug, Clone, Default)]
pub(crate) struct ExportDirectory {
    pub collections: Vec<CollectionExport>,
    pub stopwords_path: Option<PathBuf>,
    pub synonym_sets_path: Option<PathBuf>,
    pub curation_sets_path: Option<PathBuf>,
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Scan a generator export directory.
///
/// Collections are processed in file-name order so runs are deterministic.
pub(crate) fn scan(source_dir: &Path) -> Result<ExportDirectory> {
    let data_dir = {
        let nested = source_dir.join("data");
        if nested.is_dir() { nested } else { source_dir.to_path_buf() }
    };

    let mut export = ExportDirectory::default();
    let mut stems = Vec::new();

    let entries = std::fs::read_dir(&data_dir)
        .with_context(|| format!("reading export directory {}", data_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(stem) = name.strip_suffix(SCHEMA_SUFFIX) {
            if !stem.is_empty() {
                stems.push(stem.to_string());
            }
        }
    }
    stems.sort();

    for stem in stems {
        export.collections.push(CollectionExport {
            schema_path: data_dir.join(format!("{}{}", stem, SCHEMA_SUFFIX)),
            documents_path: existing(data_dir.join(format!("{}.jsonl", stem))),
            synonyms_path: existing(data_dir.join(format!("{}.synonyms.json", stem))),
            overrides_path: existing(data_dir.join(format!("{}.overrides.json", stem))),
            stem,
        });
    }

    export.stopwords_path = existing(data_dir.join(STOPWORDS_FILE));
    export.synonym_sets_path = existing(data_dir.join(SYNONYM_SETS_FILE));
    export.curation_sets_path = existing(data_dir.join(CURATION_SETS_FILE));

    Ok(export)
}
