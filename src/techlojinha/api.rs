//! # API Facade
//!
//! [`StockApi`] is the single entry point for every inventory operation,
//! whatever the UI. It owns the in-memory [`Inventory`] and the store, so there
//! is no global state: a UI holds one `StockApi` and calls it once per user
//! action.
//!
//! The facade:
//! - **Normalizes inputs**: trims surrounding whitespace from both fields
//! - **Dispatches** to the matching `commands::*::run`
//! - **Persists** the full snapshot whenever a command reports a mutation
//!
//! Storage problems never reach the caller. A snapshot that cannot be loaded
//! is replaced by the seeded stock and a failed save is logged while the
//! in-memory state stays authoritative.

use crate::commands::{self, CmdResult};
use crate::model::Inventory;
use crate::store::DataStore;
use tracing::{error, info, warn};

pub struct StockApi<S: DataStore> {
    store: S,
    inventory: Inventory,
}

impl<S: DataStore> StockApi<S> {
    /// Loads the stored snapshot, falling back to [`Inventory::seeded`].
    pub fn open(store: S) -> Self {
        let inventory = match store.load() {
            Ok(Some(inventory)) => inventory,
            Ok(None) => {
                info!(location = %store.location(), "no saved inventory, using default stock");
                Inventory::seeded()
            }
            Err(e) => {
                warn!(
                    location = %store.location(),
                    error = %e,
                    "could not load inventory, using default stock"
                );
                Inventory::seeded()
            }
        };
        Self { store, inventory }
    }

    pub fn add(&mut self, category: &str, product: &str) -> CmdResult {
        let result = commands::add::run(&mut self.inventory, category.trim(), product.trim());
        self.persist_if_mutated(&result);
        result
    }

    pub fn sell(&mut self, category: &str, product: &str) -> CmdResult {
        let result = commands::sell::run(&mut self.inventory, category.trim(), product.trim());
        self.persist_if_mutated(&result);
        result
    }

    pub fn search(&self, category: &str) -> CmdResult {
        commands::search::run(&self.inventory, category.trim())
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.inventory)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist_if_mutated(&mut self, result: &CmdResult) {
        if !result.mutated {
            return;
        }
        if let Err(e) = self.store.save(&self.inventory) {
            error!(
                location = %self.store.location(),
                error = %e,
                "could not save inventory, changes are kept in memory only"
            );
        }
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::report::Report;
