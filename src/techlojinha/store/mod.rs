//! # Storage Layer
//!
//! The inventory is persisted as a single snapshot: every save rewrites the whole
//! mapping, every load reads the whole file. [`DataStore`] abstracts where that
//! snapshot lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document on disk
//!   (`dados_estoque.json` by default).
//! - [`memory::InMemoryStore`]: keeps the last snapshot in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "Placa de vídeo": [
//!         "RTX 5060 Ti"
//!     ],
//!     "SSD": [
//!         "Kingston 1TB",
//!         "Samsung 970"
//!     ]
//! }
//! ```
//!
//! Keys keep insertion order and non-ASCII text is written as-is. There is no
//! version field and no schema marker.
//!
//! Stores report failures through [`Result`](crate::error::Result); deciding
//! whether a failure is fatal belongs to the caller (see [`crate::api`]).

use crate::error::Result;
use crate::model::Inventory;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory snapshots.
pub trait DataStore {
    /// Read the stored snapshot. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Inventory>>;

    /// Replace the stored snapshot with `inventory`.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Human readable location of the snapshot, for diagnostics.
    fn location(&self) -> String;
}
