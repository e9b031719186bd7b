//! Repository contract for saving and loading actor sheets.

use sheet_core::ActorSheet;

use super::Result;

/// Storage for actor sheets keyed by actor id.
pub trait ActorRepository: Send + Sync {
    /// Save a sheet, replacing any sheet stored under `id`.
    fn save(&self, id: &str, sheet: &ActorSheet) -> Result<()>;

    fn load(&self, id: &str) -> Result<Option<ActorSheet>>;

    fn exists(&self, id: &str) -> bool;

    fn delete(&self, id: &str) -> Result<()>;

    /// List stored actor ids in ascending order.
    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}
