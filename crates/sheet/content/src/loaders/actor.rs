//! Actor sheet loader.

use std::path::Path;

use sheet_core::ActorSheet;

use crate::loaders::{DocumentFormat, LoadResult, read_file};

/// Loader for actor sheets from JSON or RON files.
pub struct ActorLoader;

impl ActorLoader {
    /// Load an actor sheet; the format follows the file extension.
    ///
    /// Derived fields present in the file are accepted and overwritten by the
    /// next recompute.
    pub fn load(path: &Path) -> LoadResult<ActorSheet> {
        let content = read_file(path)?;
        DocumentFormat::from_path(path)
            .parse(&content, "actor sheet")
            .map_err(|e| e.context(format!("in {}", path.display())))
    }
}
