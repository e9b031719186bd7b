//! Damage batch loader.

use std::path::Path;

use sheet_core::DamageEvent;

use crate::loaders::{DocumentFormat, LoadResult, read_file};

/// Loader for ordered damage batches from JSON or RON files.
pub struct DamageLoader;

impl DamageLoader {
    /// Load a batch. A document holding a single event is read as a batch of one.
    pub fn load(path: &Path) -> LoadResult<Vec<DamageEvent>> {
        let content = read_file(path)?;
        let format = DocumentFormat::from_path(path);

        match format.parse::<Vec<DamageEvent>>(&content, "damage batch") {
            Ok(events) => Ok(events),
            Err(batch_err) => format
                .parse::<DamageEvent>(&content, "damage event")
                .map(|event| vec![event])
                .map_err(|_| batch_err.context(format!("in {}", path.display()))),
        }
    }
}
