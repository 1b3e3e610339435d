use super::DataStore;
use crate::error::{Result, StockError};
use crate::model::Inventory;

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Inventory>,
    saves: usize,
    fail_saves: bool,
    corrupt: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(inventory: Inventory) -> Self {
        Self {
            snapshot: Some(inventory),
            ..Self::default()
        }
    }

    /// Every `save` fails, as if the disk were read-only.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// `load` fails, as if the stored document could not be parsed.
    pub fn corrupted(mut self) -> Self {
        self.corrupt = true;
        self
    }

    pub fn snapshot(&self) -> Option<&Inventory> {
        self.snapshot.as_ref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Option<Inventory>> {
        if self.corrupt {
            return Err(StockError::Store("corrupted snapshot".to_string()));
        }
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        if self.fail_saves {
            return Err(StockError::Store("store is read-only".to_string()));
        }
        self.snapshot = Some(inventory.clone());
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_none());
        assert_eq!(store.saves(), 0);
    }

    #[test]
    fn keeps_last_snapshot() {
        let mut store = InMemoryStore::new();
        store.save(&Inventory::seeded()).unwrap();
        assert_eq!(store.load().unwrap(), Some(Inventory::seeded()));
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn failing_store_keeps_previous_snapshot() {
        let mut store = InMemoryStore::with_snapshot(Inventory::new()).failing_saves();
        assert!(store.save(&Inventory::seeded()).is_err());
        assert_eq!(store.snapshot(), Some(&Inventory::new()));
        assert_eq!(store.saves(), 0);
    }
}
