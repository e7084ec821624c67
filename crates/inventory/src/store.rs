//! In-memory inventory store.
//!
//! Owns an insertion-ordered collection of [`Product`] records. Every
//! operation is a linear scan; a failed operation leaves the store unchanged.

use stockkeep_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    products: Vec<Product>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product.
    ///
    /// Rejects records failing [`Product::validate`] and identifiers already
    /// present in the store, or whose value would make the total non-finite.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        product.validate()?;
        if self.exists(product.id()) {
            return Err(DomainError::validation(format!(
                "product with id {} already exists",
                product.id()
            )));
        }
        if !(self.total_value() + product.value()).is_finite() {
            return Err(too_valuable());
        }
        self.products.push(product);
        Ok(())
    }

    /// Remove the product with `id`, handing it back to the caller.
    pub fn remove(&mut self, id: ProductId) -> DomainResult<Product> {
        let index = self.position(id).ok_or_else(|| missing(id))?;
        Ok(self.products.remove(index))
    }

    /// Set the stock quantity of an existing product.
    ///
    /// The quantity is checked before the lookup, so a negative value is a
    /// validation error even for an unknown id.
    pub fn update_quantity(&mut self, id: ProductId, new_quantity: i64) -> DomainResult<()> {
        if new_quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        let index = self.position(id).ok_or_else(|| missing(id))?;

        let mut updated = self.products[index].clone();
        updated.set_quantity(new_quantity);
        let others: f64 = self
            .products
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.value())
            .sum();
        if !(others + updated.value()).is_finite() {
            return Err(too_valuable());
        }

        self.products[index] = updated;
        Ok(())
    }

    /// All products in insertion order. Call again to restart.
    pub fn list(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.iter()
    }

    /// Sum of quantity × price over all products; `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::value).sum()
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Highest identifier currently stored.
    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(Entity::id).max()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id() == id)
    }
}

fn missing(id: ProductId) -> DomainError {
    DomainError::not_found(format!("product with id {id}"))
}

fn too_valuable() -> DomainError {
    DomainError::validation("total stock value is too large")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget(id: i64) -> Product {
        Product::new(id, format!("Widget {id}"), 5, 2.5)
    }

    fn ids(store: &InventoryStore) -> Vec<i64> {
        store.list().map(|p| p.id().get()).collect()
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = InventoryStore::new();
        store.add(widget(7)).unwrap();
        store.add(widget(2)).unwrap();
        store.add(widget(5)).unwrap();

        assert_eq!(ids(&store), vec![7, 2, 5]);
    }

    #[test]
    fn duplicate_id_is_rejected_and_store_unchanged() {
        let mut store = InventoryStore::new();
        store.add(widget(1)).unwrap();
        let before = store.clone();

        let err = store.add(Product::new(1, "Other", 1, 1.0)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("already exists") => {}
            _ => panic!("Expected Validation error for duplicate id"),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn non_positive_id_is_rejected() {
        let mut store = InventoryStore::new();
        assert!(store.add(widget(0)).unwrap_err().is_validation());
        assert!(store.add(widget(-4)).unwrap_err().is_validation());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut store = InventoryStore::new();
        store.add(widget(1)).unwrap();

        let err = store.remove(ProductId::new(2)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_existing_shrinks_by_one() {
        let mut store = InventoryStore::new();
        store.add(widget(1)).unwrap();
        store.add(widget(2)).unwrap();
        store.add(widget(3)).unwrap();

        let removed = store.remove(ProductId::new(2)).unwrap();
        assert_eq!(removed.id(), ProductId::new(2));
        assert_eq!(store.len(), 2);
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn negative_quantity_update_does_not_mutate() {
        let mut store = InventoryStore::new();
        store.add(widget(1)).unwrap();

        let err = store.update_quantity(ProductId::new(1), -1).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.get(ProductId::new(1)).unwrap().quantity(), 5);
    }

    #[test]
    fn negative_quantity_is_checked_before_lookup() {
        let mut store = InventoryStore::new();
        let err = store.update_quantity(ProductId::new(99), -1).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = InventoryStore::new();
        let err = store.update_quantity(ProductId::new(3), 4).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn total_value_of_empty_store_is_zero() {
        assert_eq!(InventoryStore::new().total_value(), 0.0);
    }

    #[test]
    fn total_value_sums_lines() {
        let mut store = InventoryStore::new();
        store.add(Product::new(1, "Crate", 3, 10.0)).unwrap();
        assert_eq!(store.total_value(), 30.0);

        store.add(Product::new(2, "Pallet", 2, 0.5)).unwrap();
        assert_eq!(store.total_value(), 31.0);
    }

    #[test]
    fn total_value_never_overflows_to_infinity() {
        let mut store = InventoryStore::new();
        store.add(Product::new(1, "Heavy", 1, 1e308)).unwrap();

        let err = store.add(Product::new(2, "Heavier", 1, 1e308)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.len(), 1);

        store.add(Product::new(3, "Light", 0, 1e308)).unwrap();
        let before = store.clone();
        let err = store.update_quantity(ProductId::new(3), 1).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store, before);

        assert!(store.total_value().is_finite());
    }

    #[test]
    fn list_is_restartable_and_empty_is_fine() {
        let mut store = InventoryStore::new();
        assert_eq!(store.list().count(), 0);

        store.add(widget(1)).unwrap();
        store.add(widget(2)).unwrap();
        assert_eq!(store.list().count(), 2);
        assert_eq!(store.list().count(), 2);
    }

    #[test]
    fn max_id_tracks_highest_identifier() {
        let mut store = InventoryStore::new();
        assert_eq!(store.max_id(), None);

        store.add(widget(4)).unwrap();
        store.add(widget(9)).unwrap();
        store.add(widget(6)).unwrap();
        assert_eq!(store.max_id(), Some(ProductId::new(9)));
    }

    #[test]
    fn widget_lifecycle() {
        let mut store = InventoryStore::new();
        let id = ProductId::new(1);

        store.add(Product::new(1, "Widget", 5, 2.50)).unwrap();
        assert!(store.add(Product::new(1, "Widget", 5, 2.50)).unwrap_err().is_validation());

        store.update_quantity(id, 10).unwrap();
        assert_eq!(store.get(id).unwrap().quantity(), 10);
        assert_eq!(store.total_value(), 25.0);

        store.remove(id).unwrap();
        assert!(!store.exists(id));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add { id: i64, quantity: i64, price: f64 },
        Remove(i64),
        Update { id: i64, quantity: i64 },
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-2i64..12, -3i64..50, 0.0f64..100.0)
                .prop_map(|(id, quantity, price)| Op::Add { id, quantity, price }),
            (-2i64..12).prop_map(Op::Remove),
            (-2i64..12, -3i64..50).prop_map(|(id, quantity)| Op::Update { id, quantity }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: identifiers stay unique and quantities non-negative, and
        /// any failed operation leaves the store exactly as it was.
        #[test]
        fn invariants_hold_under_random_operations(
            ops in prop::collection::vec(op_strategy(), 1..40)
        ) {
            let mut store = InventoryStore::new();

            for op in ops {
                let before = store.clone();
                let result = match op {
                    Op::Add { id, quantity, price } => {
                        store.add(Product::new(id, "Item", quantity, price))
                    }
                    Op::Remove(id) => store.remove(ProductId::new(id)).map(|_| ()),
                    Op::Update { id, quantity } => store.update_quantity(ProductId::new(id), quantity),
                };

                if result.is_err() {
                    prop_assert_eq!(&store, &before);
                }

                let mut seen = ids(&store);
                let total = seen.len();
                seen.sort_unstable();
                seen.dedup();
                prop_assert_eq!(seen.len(), total);
                prop_assert!(store.list().all(|p| p.quantity() >= 0 && p.price() >= 0.0));
            }
        }

        /// Property: total value equals the sum of each line's value.
        #[test]
        fn total_value_matches_line_sum(
            lines in prop::collection::vec((0i64..1_000, 0.0f64..1_000.0), 0..20)
        ) {
            let mut store = InventoryStore::new();
            let mut expected = 0.0;
            for (i, (quantity, price)) in lines.into_iter().enumerate() {
                store.add(Product::new(i as i64 + 1, "Item", quantity, price)).unwrap();
                expected += quantity as f64 * price;
            }
            prop_assert!((store.total_value() - expected).abs() < 1e-6);
        }
    }
}
