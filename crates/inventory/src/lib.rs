//! Inventory domain module.
//!
//! This crate contains the product record and the in-memory inventory store,
//! implemented purely as deterministic domain logic (no IO, no console output).

pub mod product;
pub mod store;

pub use product::Product;
pub use store::InventoryStore;
