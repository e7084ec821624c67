//! Identifier assignment for newly entered products.

use stockkeep_core::{DomainError, DomainResult, ProductId};
use stockkeep_inventory::InventoryStore;

/// Next free identifier: one past the highest stored id, or 1 when empty.
///
/// Gaps left by removals are not reused.
pub fn next_product_id(store: &InventoryStore) -> DomainResult<ProductId> {
    match store.max_id() {
        None => Ok(ProductId::new(1)),
        Some(max) => max
            .next()
            .ok_or_else(|| DomainError::validation("no product identifiers left")),
    }
}
