//! In-memory ActorRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use sheet_core::ActorSheet;

use super::{ActorRepository, RepositoryError, Result};

/// In-memory implementation of ActorRepository.
pub struct InMemoryActorRepo {
    sheets: RwLock<HashMap<String, ActorSheet>>,
}

impl InMemoryActorRepo {
    pub fn new() -> Self {
        Self {
            sheets: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryActorRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorRepository for InMemoryActorRepo {
    fn save(&self, id: &str, sheet: &ActorSheet) -> Result<()> {
        let mut sheets = self
            .sheets
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sheets.insert(id.to_owned(), sheet.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Option<ActorSheet>> {
        let sheets = self
            .sheets
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sheets.get(id).cloned())
    }

    fn exists(&self, id: &str) -> bool {
        self.sheets
            .read()
            .map(|sheets| sheets.contains_key(id))
            .unwrap_or(false)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut sheets = self
            .sheets
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sheets.remove(id);
        Ok(())
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        let sheets = self
            .sheets
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut ids: Vec<String> = sheets.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_delete() {
        let repo = InMemoryActorRepo::new();
        assert!(!repo.exists("rhen"));
        assert_eq!(repo.load("rhen").unwrap(), None);

        repo.save("rhen", &ActorSheet::new("Rhen")).unwrap();
        repo.save("abel", &ActorSheet::new("Abel")).unwrap();
        assert!(repo.exists("rhen"));
        assert_eq!(repo.load("rhen").unwrap().unwrap().name, "Rhen");
        assert_eq!(repo.list_ids().unwrap(), ["abel", "rhen"]);

        repo.delete("rhen").unwrap();
        assert!(!repo.exists("rhen"));
        assert_eq!(repo.list_ids().unwrap(), ["abel"]);
    }
}
