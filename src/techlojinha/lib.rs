//! # Techlojinha Architecture
//!
//! Techlojinha tracks the parts stock of a small electronics shop: part
//! categories mapped to the product names on the shelf. It is a **UI-agnostic
//! library** with a terminal client; the same core could sit behind a desktop
//! form, which is what the shop originally used.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive form, prints      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Inventory and the store                         │
//! │  - Trims inputs, persists after mutations                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / sell / search / list over &mut Inventory           │
//! │  - Returns CmdResult, no I/O                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: whole-snapshot load/save                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure policy
//!
//! Nothing a user types and nothing the disk does crashes the program. Bad input
//! comes back as guidance text in the [`commands::CmdResult`]; storage failures
//! are logged through `tracing` and absorbed by [`api::StockApi`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each action
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Inventory`] mapping and [`model::Scope`]
//! - [`report`]: Output-area text for listings and search hits
//! - [`config`]: Data file resolution
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
