//! Source discovery for a single build directory
//!
//! tup evaluates one Tupfile per directory, so discovery is deliberately
//! shallow: only files directly inside the directory are considered. Each
//! source `<basename>.<ext>` may have a sidecar `<basename>.json` holding its
//! extracted metadata.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::formats::FormatRegistry;
use crate::metadata::Metadata;
use crate::rule::Rule;

/// A source file claimed by a registered format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path on disk
    pub path: PathBuf,
    /// File name as written into the rule (e.g. `song.wave`)
    pub name: String,
    /// File name without its extension (e.g. `song`)
    pub basename: String,
}

impl SourceFile {
    /// Describe `path`, or `None` if it has no usable UTF-8 file name
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let basename = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            path: path.to_path_buf(),
            name,
            basename,
        })
    }

    /// Sidecar metadata path (`<basename>.json` next to the source)
    pub fn metadata_path(&self) -> PathBuf {
        self.path.with_file_name(format!("{}.json", self.basename))
    }
}

/// List sources in `dir` claimed by any registered format, in file-name order
pub fn find_sources(dir: &Path, registry: &FormatRegistry) -> Result<Vec<SourceFile>, String> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()));
    }

    let mut sources = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        // Directories are never sources, even with a claimed extension
        if !entry.file_type().is_file() {
            continue;
        }

        // Only files some registered format claims
        let path = entry.path();
        if registry.for_path(path).is_none() {
            continue;
        }

        match SourceFile::from_path(path) {
            Some(source) => sources.push(source),
            None => log::warn!("Skipping source with non UTF-8 name: {}", path.display()),
        }
    }

    log::debug!("Found {} source(s) in {}", sources.len(), dir.display());
    Ok(sources)
}

/// Build the rule for one source, loading its sidecar metadata if present
pub fn plan_source(source: &SourceFile, registry: &FormatRegistry) -> Result<Rule, String> {
    let format = registry
        .for_path(&source.path)
        .ok_or_else(|| format!("No format claims {}", source.path.display()))?;

    // A missing sidecar means empty metadata, a broken one is an error
    let metadata = Metadata::load_optional(&source.metadata_path())?;
    format.process(&metadata, &source.basename, &source.name, &[])
}

/// Build rules for every source in `dir`, in file-name order
pub fn plan_directory(dir: &Path, registry: &FormatRegistry) -> Result<Vec<Rule>, String> {
    find_sources(dir, registry)?
        .iter()
        .map(|source| plan_source(source, registry))
        .collect()
}
