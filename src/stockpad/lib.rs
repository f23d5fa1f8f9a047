//! # Stockpad Architecture
//!
//! Stockpad is a **UI-agnostic inventory library**: it tracks stock items,
//! records sales, and derives low-stock alerts, a demand forecast and the
//! expiration status of perishables. The bundled CLI is one client of it; a
//! browser front end backed by local storage is another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, asks for confirmation, prints tables   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session object: open / mutate / overview / close         │
//! │  - Persists after every successful mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Commands (commands/*.rs)     │ │  Views (views.rs)         │
//! │  - Validate form input        │ │  - Pure projections       │
//! │  - Mutate the Inventory       │ │  - Dashboard, tables      │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BlobStore trait: get/set strings by key                  │
//! │  - FsBlobStore (production), MemBlobStore (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<T, StockError>`, and never prints or exits. Diagnostics go through
//! `tracing`; the binary decides whether and where to show them.
//!
//! ## Deleting items
//!
//! Sales and transactions keep the id and name of the item they were recorded
//! against. Deleting the item does not touch them, so a sale's `item_id` may
//! refer to nothing. This is intended.
//!
//! ## Module Overview
//!
//! - [`api`]: The session facade, entry point for all operations
//! - [`commands`]: Validation and mutation logic for each operation
//! - [`views`]: Derived, read-only projections
//! - [`store`]: Blob store abstraction and collection (de)serialization
//! - [`inventory`]: The in-memory collections and id allocation
//! - [`model`]: Core data types (`Item`, `Sale`, `Transaction`)
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
pub mod views;

#[cfg(test)]
mod test_utils;
