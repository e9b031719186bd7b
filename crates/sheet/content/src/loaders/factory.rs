//! Content factory for loading a campaign directory.

use std::path::{Path, PathBuf};

use sheet_core::{ActorSheet, RulesConfig};

use crate::loaders::{ActorLoader, LoadResult, RulesLoader};

/// Content factory that loads sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// └── actors/
///     ├── rhen.json
///     └── vail.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules from `rules.toml`, or the default rules when the file is absent.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if path.exists() {
            RulesLoader::load(&path)
        } else {
            Ok(RulesConfig::default())
        }
    }

    /// Load every `.json` / `.ron` sheet under `actors/`, keyed by file stem
    /// and sorted by key.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorSheet)>> {
        let dir = self.data_dir.join("actors");
        let entries = std::fs::read_dir(&dir).map_err(|e| {
            anyhow::anyhow!("Failed to read actor directory {}: {}", dir.display(), e)
        })?;

        let mut actors = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_sheet = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| matches!(ext, "json" | "ron"));
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if is_sheet {
                actors.push((id.to_owned(), ActorLoader::load(&path)?));
            }
        }

        actors.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(actors)
    }
}
