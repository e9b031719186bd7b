//! Content loaders for reading sheet data from files.

pub mod actor;
pub mod damage;
pub mod factory;
pub mod rules;

pub use actor::ActorLoader;
pub use damage::DamageLoader;
pub use factory::ContentFactory;
pub use rules::RulesLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Structured document formats accepted for sheets and damage batches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Ron,
}

impl DocumentFormat {
    /// Picks the format from a file extension; anything but `.ron` is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::Ron,
            _ => Self::Json,
        }
    }

    /// Parses `content`, naming `what` in the error.
    pub fn parse<T: DeserializeOwned>(self, content: &str, what: &str) -> LoadResult<T> {
        match self {
            Self::Json => serde_json::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} JSON: {}", what, e)),
            Self::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e)),
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
