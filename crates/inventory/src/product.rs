use serde::{Deserialize, Serialize};

use stockkeep_core::{DomainError, DomainResult, Entity, ProductId};

/// A product record held by the inventory.
///
/// Construction does not validate; the store checks [`Product::validate`]
/// before accepting a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Stock value of this line: quantity × unit price.
    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    /// Check the record-level invariants.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.id.is_valid() {
            return Err(DomainError::validation(format!(
                "product id must be positive (got {})",
                self.id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        if !self.value().is_finite() {
            return Err(DomainError::validation("stock value is too large"));
        }
        Ok(())
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
